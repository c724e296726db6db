use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;
use std::ffi::OsString;

const fn verbosity_level(count: u8) -> Option<tracing::Level> {
    match count {
        0 => None,
        1 => Some(tracing::Level::WARN),
        2 => Some(tracing::Level::INFO),
        3 => Some(tracing::Level::DEBUG),
        _ => Some(tracing::Level::TRACE),
    }
}

/// Parse the process arguments, initialize logging and build the [`Action`].
///
/// # Errors
///
/// Returns an error if telemetry initialization or action dispatch fails
pub fn start() -> Result<Action> {
    start_from(std::env::args_os())
}

/// Same as [`start`] with explicit arguments, the first one being the binary name.
///
/// # Errors
///
/// Returns an error if telemetry initialization or action dispatch fails
pub fn start_from<I, T>(args: I) -> Result<Action>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = commands::new().get_matches_from(args);

    let count = matches
        .get_one::<u8>(commands::logging::ARG_VERBOSITY)
        .copied()
        .unwrap_or(0);
    telemetry::init(verbosity_level(count))?;

    dispatch::handler(&matches)
}
