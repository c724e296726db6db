use anyhow::Result;
use std::io;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

fn env_filter(verbosity_level: Level) -> Result<EnvFilter> {
    Ok(EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("hyper_util=error".parse()?)
        .add_directive("reqwest=warn".parse()?))
}

/// Initialize logging.
/// Events go to stderr; stdout is reserved for rendered output.
/// `RUST_LOG` overrides the verbosity level.
///
/// # Errors
///
/// Returns an error if the filter directives are invalid or a global
/// subscriber is already set
pub fn init(verbosity_level: Option<Level>) -> Result<()> {
    let verbosity_level = verbosity_level.unwrap_or(Level::ERROR);

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false);

    let subscriber = Registry::default()
        .with(fmt_layer)
        .with(env_filter(verbosity_level)?);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_default_level() {
        temp_env::with_var_unset("RUST_LOG", || {
            let filter = env_filter(Level::INFO);
            assert!(filter.is_ok());
            let rendered = filter.map(|f| f.to_string()).unwrap_or_default();
            assert!(rendered.contains("info"));
            assert!(rendered.contains("hyper=error"));
        });
    }

    #[test]
    fn test_env_filter_rust_log_override() {
        temp_env::with_var("RUST_LOG", Some("userlist=trace"), || {
            let rendered = env_filter(Level::ERROR)
                .map(|f| f.to_string())
                .unwrap_or_default();
            assert!(rendered.contains("userlist=trace"));
        });
    }
}
