//! # userlist
//!
//! `userlist` fetches a collection of users from a JSON endpoint and renders
//! each user as a `<p>name - email</p>` fragment into an output surface.
//!
//! The surface is either an element inside an HTML document on disk, addressed
//! by its `id` attribute (`data` by default), or standard output.
//!
//! ## Failure handling
//!
//! Every failure during a load (transport, JSON decoding, or writing the
//! surface) collapses into a single [`loader::LoadFailure`]. It is reported
//! once on the diagnostic channel as `Ошибка: <error>`, and the surface is
//! left untouched. The failure is never returned to the caller of
//! [`loader::UserListLoader::load`].
//!
//! ## Escaping
//!
//! Names and emails are interpolated verbatim. A record containing markup ends
//! up as markup in the document.

pub mod cli;
pub mod loader;

pub use loader::{
    render, LoadFailure, MemorySurface, OutputSurface, UserListLoader, UserRecord,
    DEFAULT_ELEMENT_ID, DEFAULT_USERS_URL,
};

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
