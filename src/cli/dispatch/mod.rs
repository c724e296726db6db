use crate::cli::{
    actions::{load::Args, Action},
    commands::{self, output, ARG_URL},
};
use crate::loader::{DEFAULT_ELEMENT_ID, DEFAULT_USERS_URL};
use anyhow::{anyhow, bail, Context, Result};
use std::path::PathBuf;
use url::Url;

/// # Errors
/// Returns an error if the users URL is invalid or arguments are inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    commands::validate(matches).map_err(|e| anyhow!(e))?;

    let url = matches
        .get_one::<String>(ARG_URL)
        .map_or(DEFAULT_USERS_URL, String::as_str);
    let url = users_url(url).with_context(|| format!("invalid users URL: {url}"))?;

    let output = matches.get_one::<PathBuf>(output::ARG_OUTPUT).cloned();
    let element_id = matches
        .get_one::<String>(output::ARG_ELEMENT_ID)
        .cloned()
        .unwrap_or_else(|| DEFAULT_ELEMENT_ID.to_string());

    if element_id.trim().is_empty() {
        bail!("--element-id must not be empty");
    }

    Ok(Action::Load(Args {
        url,
        output,
        element_id,
    }))
}

fn users_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url)?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => bail!("unsupported scheme {scheme}"),
    }

    if parsed.host().is_none() {
        bail!("no host specified");
    }

    // Keep the URL as given; `Url` would normalize it (e.g. add a trailing slash).
    Ok(url.to_string())
}
