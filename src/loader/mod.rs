pub mod diagnostics;
pub mod document;
pub mod error;
pub mod model;
pub mod render;
pub mod surface;

pub use self::diagnostics::{Diagnostics, TracingDiagnostics, DIAGNOSTIC_PREFIX};
pub use self::error::{LoadFailure, SurfaceError};
pub use self::model::{decode, UserRecord};
pub use self::render::render;
pub use self::surface::{HtmlFileSurface, MemorySurface, OutputSurface, StdoutSurface, WriterSurface};

use reqwest::Client;
use tracing::{debug, info_span, Instrument};

/// Users collection fetched when no URL is configured.
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Identifier of the element that receives the rendered users.
pub const DEFAULT_ELEMENT_ID: &str = "data";

/// Fetches the users collection and renders it into an [`OutputSurface`].
///
/// The request carries no extra headers, no query and no timeout, and the
/// response status is not inspected: whatever body arrives is decoded.
#[derive(Clone, Debug)]
pub struct UserListLoader {
    client: Client,
    url: String,
}

impl UserListLoader {
    /// # Errors
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(url: impl Into<String>) -> Result<Self, LoadFailure> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the users URL and decode the body.
    ///
    /// # Errors
    /// Returns [`LoadFailure::Transport`] if the request or the body transfer
    /// fails, and [`LoadFailure::Decode`] if the body is not a users array.
    pub async fn fetch(&self) -> Result<Vec<UserRecord>, LoadFailure> {
        let span = info_span!("users.fetch", http.method = "GET", url = %self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .instrument(span.clone())
            .await?;

        debug!(status = %response.status(), "response headers received");

        let body = response.bytes().instrument(span).await?;
        let users = decode(&body)?;

        debug!(count = users.len(), "users decoded");

        Ok(users)
    }

    /// Fetch, render and write into `surface`. Returns the number of users
    /// rendered.
    ///
    /// # Errors
    /// Returns the [`LoadFailure`] of the first failing step. The surface is
    /// only written once every previous step succeeded.
    pub async fn try_load<S>(&self, surface: &mut S) -> Result<usize, LoadFailure>
    where
        S: OutputSurface + ?Sized,
    {
        let users = self.fetch().await?;

        surface.replace_content(&render(&users))?;

        debug!(id = surface.id(), count = users.len(), "surface updated");

        Ok(users.len())
    }

    /// Load into `surface`, reporting any failure through `tracing`.
    pub async fn load<S>(&self, surface: &mut S)
    where
        S: OutputSurface + ?Sized,
    {
        self.load_with(surface, &TracingDiagnostics).await;
    }

    /// Load into `surface`, reporting any failure exactly once to
    /// `diagnostics`. The failure does not reach the caller.
    pub async fn load_with<S, D>(&self, surface: &mut S, diagnostics: &D)
    where
        S: OutputSurface + ?Sized,
        D: Diagnostics + ?Sized,
    {
        if let Err(failure) = self.try_load(surface).await {
            diagnostics.report(&failure);
        }
    }
}
