//! Locate an element by `id` inside an HTML document and swap its content.
//!
//! This is a tag scanner, not a parser: it understands start tags, quoted and
//! unquoted attribute values and nesting of same-named elements, which is
//! enough to address a container element in a hand-written page. Comments and
//! the text of `script`/`style` elements are not markup and are skipped.

use super::error::SurfaceError;
use regex::Regex;
use std::ops::Range;

const START_TAG: &str = r#"<([A-Za-z][A-Za-z0-9-]*)((?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*)\s*(/?)>"#;

const ATTRIBUTE: &str = r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#;

// Start of a comment or of an element whose content is raw text.
const OPAQUE_START: &str = r"(?i)<!--|<(script|style)(?:\s[^>]*)?>";

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Byte range of the content of the first element whose `id` equals `id`,
/// between the end of its start tag and the beginning of its end tag.
///
/// # Errors
/// Returns an error if no element carries the id, if the element is void or
/// self-closing, or if its end tag is missing.
pub fn locate(markup: &str, id: &str) -> Result<Range<usize>, SurfaceError> {
    let start_tag = Regex::new(START_TAG)?;
    let attribute = Regex::new(ATTRIBUTE)?;
    let opaque = opaque_ranges(markup)?;

    for caps in start_tag.captures_iter(markup) {
        if caps.get(0).is_some_and(|m| is_opaque(&opaque, m.start())) {
            continue;
        }
        let attributes = caps.get(2).map_or("", |m| m.as_str());
        if !has_id(&attribute, attributes, id) {
            continue;
        }

        let Some(whole) = caps.get(0) else { continue };
        let tag = caps
            .get(1)
            .map_or_else(String::new, |m| m.as_str().to_ascii_lowercase());
        let self_closing = caps.get(3).is_some_and(|m| !m.as_str().is_empty());

        if self_closing || VOID_ELEMENTS.contains(&tag.as_str()) {
            return Err(SurfaceError::VoidElement {
                tag,
                id: id.to_string(),
            });
        }

        let start = whole.end();
        return match closing_tag(markup, start, &tag, &opaque)? {
            Some(end) => Ok(start..end),
            None => Err(SurfaceError::Unclosed {
                tag,
                id: id.to_string(),
            }),
        };
    }

    Err(SurfaceError::ElementNotFound(id.to_string()))
}

/// Return a copy of `markup` where the content of the element identified by
/// `id` is replaced with `content`. Everything outside the element content is
/// kept byte for byte.
///
/// # Errors
/// Returns an error under the same conditions as [`locate`].
pub fn replace_content(markup: &str, id: &str, content: &str) -> Result<String, SurfaceError> {
    let range = locate(markup, id)?;

    let mut updated = String::with_capacity(markup.len() - range.len() + content.len());
    updated.push_str(&markup[..range.start]);
    updated.push_str(content);
    updated.push_str(&markup[range.end..]);

    Ok(updated)
}

fn has_id(attribute: &Regex, attributes: &str, id: &str) -> bool {
    attribute.captures_iter(attributes).any(|attr| {
        attr.get(1)
            .is_some_and(|name| name.as_str().eq_ignore_ascii_case("id"))
            && attr
                .get(2)
                .or_else(|| attr.get(3))
                .or_else(|| attr.get(4))
                .is_some_and(|value| value.as_str() == id)
    })
}

// Offset of the end tag matching an element opened just before `from`.
fn closing_tag(
    markup: &str,
    from: usize,
    tag: &str,
    opaque: &[Range<usize>],
) -> Result<Option<usize>, SurfaceError> {
    let pattern = Regex::new(&format!(r"(?i)<(/?){}(?:[\s/>]|$)", regex::escape(tag)))?;
    let mut depth = 0usize;

    for caps in pattern.captures_iter(&markup[from..]) {
        let Some(found) = caps.get(0) else { continue };
        if is_opaque(opaque, from + found.start()) {
            continue;
        }
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());

        if !closing {
            depth += 1;
        } else if depth == 0 {
            return Ok(Some(from + found.start()));
        } else {
            depth -= 1;
        }
    }

    Ok(None)
}

// Byte ranges of comments (delimiters included) and of `script`/`style`
// content, in document order. An unterminated one runs to the end.
fn opaque_ranges(markup: &str) -> Result<Vec<Range<usize>>, SurfaceError> {
    let opening = Regex::new(OPAQUE_START)?;
    let mut ranges = Vec::new();
    let mut pos = 0;

    while let Some(caps) = opening.captures_at(markup, pos) {
        let Some(found) = caps.get(0) else { break };

        let range = match caps.get(1) {
            None => {
                let end = markup[found.end()..]
                    .find("-->")
                    .map_or(markup.len(), |at| found.end() + at + 3);
                found.start()..end
            }
            Some(name) => {
                let close =
                    Regex::new(&format!(r"(?i)</{}\s*>", regex::escape(name.as_str())))?;
                let end = close
                    .find_at(markup, found.end())
                    .map_or(markup.len(), |m| m.start());
                found.end()..end
            }
        };

        pos = range.end.max(found.end());
        ranges.push(range);
    }

    Ok(ranges)
}

fn is_opaque(ranges: &[Range<usize>], offset: usize) -> bool {
    ranges.iter().any(|range| range.contains(&offset))
}
