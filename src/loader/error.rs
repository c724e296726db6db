use std::io;
use thiserror::Error;

/// The single failure of a load. The variants only carry the cause for the
/// diagnostic line; every one of them is handled the same way.
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid users payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("cannot update output: {0}")]
    Surface(#[from] SurfaceError),
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("element with id \"{0}\" not found")]
    ElementNotFound(String),
    #[error("element <{tag} id=\"{id}\"> cannot hold content")]
    VoidElement { tag: String, id: String },
    #[error("element <{tag} id=\"{id}\"> is never closed")]
    Unclosed { tag: String, id: String },
    #[error("invalid element pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("{target}: {source}")]
    Io {
        target: String,
        #[source]
        source: io::Error,
    },
}

impl SurfaceError {
    pub(crate) fn io(target: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            target: target.into(),
            source,
        }
    }
}
