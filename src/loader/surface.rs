use super::{document, error::SurfaceError};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

/// A region of the presentation layer that receives rendered users.
///
/// The surface is owned by the caller; a load only ever replaces its content
/// wholesale, and leaves it untouched when anything goes wrong.
pub trait OutputSurface {
    /// Identifier of the addressed region.
    fn id(&self) -> &str;

    /// Replace the whole content of the region.
    ///
    /// # Errors
    /// Returns an error if the region cannot be addressed or written. The
    /// previous content must be preserved in that case.
    fn replace_content(&mut self, content: &str) -> Result<(), SurfaceError>;
}

/// In-memory surface.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySurface {
    id: String,
    content: String,
}

impl MemorySurface {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_content(id, "")
    }

    #[must_use]
    pub fn with_content(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl OutputSurface for MemorySurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn replace_content(&mut self, content: &str) -> Result<(), SurfaceError> {
        content.clone_into(&mut self.content);
        Ok(())
    }
}

/// Writes the rendered content as is to a stream, stdout by default. Empty
/// content writes nothing.
#[derive(Debug)]
pub struct WriterSurface<W> {
    id: String,
    writer: W,
}

pub type StdoutSurface = WriterSurface<io::Stdout>;

impl StdoutSurface {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new("stdout", io::stdout())
    }
}

impl<W: Write> WriterSurface<W> {
    pub fn new(id: impl Into<String>, writer: W) -> Self {
        Self {
            id: id.into(),
            writer,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSurface for WriterSurface<W> {
    fn id(&self) -> &str {
        &self.id
    }

    fn replace_content(&mut self, content: &str) -> Result<(), SurfaceError> {
        write!(self.writer, "{content}")
            .and_then(|()| self.writer.flush())
            .map_err(|e| SurfaceError::io(self.id.as_str(), e))
    }
}

/// An element of an HTML document on disk, addressed by its `id` attribute.
///
/// The file is read on every write so edits made between loads are kept. The
/// new document is written next to the original and renamed over it, so a
/// failed write never leaves a truncated page behind. The original file
/// permissions are carried over. A symlinked page is resolved first: the link
/// stays in place and the file it points to is replaced.
#[derive(Clone, Debug)]
pub struct HtmlFileSurface {
    path: PathBuf,
    id: String,
}

impl HtmlFileSurface {
    pub fn new(path: impl Into<PathBuf>, id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            id: id.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn target(&self) -> String {
        self.path.display().to_string()
    }
}

fn staging_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().map(ToOwned::to_owned).unwrap_or_default();
    name.push(".userlist.tmp");
    target.with_file_name(name)
}

impl OutputSurface for HtmlFileSurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn replace_content(&mut self, content: &str) -> Result<(), SurfaceError> {
        let markup =
            fs::read_to_string(&self.path).map_err(|e| SurfaceError::io(self.target(), e))?;

        let updated = document::replace_content(&markup, &self.id, content)?;

        let target = fs::canonicalize(&self.path).map_err(|e| SurfaceError::io(self.target(), e))?;
        let permissions = fs::metadata(&target)
            .map_err(|e| SurfaceError::io(self.target(), e))?
            .permissions();

        let staging = staging_path(&target);
        fs::write(&staging, updated)
            .map_err(|e| SurfaceError::io(staging.display().to_string(), e))?;

        if let Err(e) =
            fs::set_permissions(&staging, permissions).and_then(|()| fs::rename(&staging, &target))
        {
            let _ = fs::remove_file(&staging);
            return Err(SurfaceError::io(self.target(), e));
        }

        debug!(path = %self.path.display(), id = %self.id, "document updated");

        Ok(())
    }
}
