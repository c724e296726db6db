use crate::loader::{HtmlFileSurface, StdoutSurface, UserListLoader};
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub url: String,
    pub output: Option<PathBuf>,
    pub element_id: String,
}

/// Run a single load. A failed load is reported on the diagnostic channel and
/// is not an error here.
///
/// # Errors
/// Returns an error if the HTTP client cannot be built.
pub async fn execute(args: Args) -> Result<()> {
    let loader = UserListLoader::new(args.url)?;

    match args.output {
        Some(path) => {
            info!(url = loader.url(), path = %path.display(), id = %args.element_id, "loading users into document");
            let mut surface = HtmlFileSurface::new(path, args.element_id);
            loader.load(&mut surface).await;
        }
        None => {
            info!(url = loader.url(), "loading users to stdout");
            let mut surface = StdoutSurface::stdout();
            loader.load(&mut surface).await;
        }
    }

    debug!("load finished");

    Ok(())
}
