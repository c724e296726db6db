pub mod logging;
pub mod output;

use crate::loader::DEFAULT_USERS_URL;
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_URL: &str = "url";

/// Validate argument combinations clap cannot express on its own.
///
/// # Errors
/// Returns an error string if `element-id` is given without `output`.
pub fn validate(matches: &clap::ArgMatches) -> Result<(), String> {
    if matches.contains_id(output::ARG_ELEMENT_ID) && !matches.contains_id(output::ARG_OUTPUT) {
        return Err("--element-id requires --output".to_string());
    }
    Ok(())
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("userlist")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_URL)
                .short('u')
                .long("url")
                .help("Users collection to fetch")
                .default_value(DEFAULT_USERS_URL)
                .env("USERLIST_URL"),
        );

    let command = output::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const ENV_VARS: [&str; 4] = [
        "USERLIST_URL",
        "USERLIST_OUTPUT",
        "USERLIST_ELEMENT_ID",
        "USERLIST_LOG_LEVEL",
    ];

    fn clean_env<F: FnOnce()>(f: F) {
        temp_env::with_vars_unset(ENV_VARS, f);
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "userlist");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults() {
        clean_env(|| {
            let matches = new().get_matches_from(vec!["userlist"]);

            assert_eq!(
                matches.get_one::<String>(ARG_URL).cloned(),
                Some("https://jsonplaceholder.typicode.com/users".to_string())
            );
            assert_eq!(matches.get_one::<PathBuf>(output::ARG_OUTPUT), None);
            assert_eq!(matches.get_one::<String>(output::ARG_ELEMENT_ID), None);
            assert_eq!(
                matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                Some(0)
            );
            assert!(validate(&matches).is_ok());
        });
    }

    #[test]
    fn test_check_url_output_and_element_id() {
        clean_env(|| {
            let matches = new().get_matches_from(vec![
                "userlist",
                "--url",
                "http://localhost:3000/users",
                "--output",
                "/tmp/index.html",
                "--element-id",
                "users",
            ]);

            assert_eq!(
                matches.get_one::<String>(ARG_URL).cloned(),
                Some("http://localhost:3000/users".to_string())
            );
            assert_eq!(
                matches.get_one::<PathBuf>(output::ARG_OUTPUT).cloned(),
                Some(PathBuf::from("/tmp/index.html"))
            );
            assert_eq!(
                matches.get_one::<String>(output::ARG_ELEMENT_ID).cloned(),
                Some("users".to_string())
            );
            assert!(validate(&matches).is_ok());
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("USERLIST_URL", Some("https://api.tld/v1/users")),
                ("USERLIST_OUTPUT", Some("/srv/www/index.html")),
                ("USERLIST_ELEMENT_ID", Some("people")),
                ("USERLIST_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["userlist"]);
                assert_eq!(
                    matches.get_one::<String>(ARG_URL).cloned(),
                    Some("https://api.tld/v1/users".to_string())
                );
                assert_eq!(
                    matches.get_one::<PathBuf>(output::ARG_OUTPUT).cloned(),
                    Some(PathBuf::from("/srv/www/index.html"))
                );
                assert_eq!(
                    matches.get_one::<String>(output::ARG_ELEMENT_ID).cloned(),
                    Some("people".to_string())
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_element_id_requires_output() {
        clean_env(|| {
            let matches =
                new().get_matches_from(vec!["userlist", "--element-id", "users"]);
            assert_eq!(
                validate(&matches),
                Err("--element-id requires --output".to_string())
            );
        });
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("USERLIST_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["userlist"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("USERLIST_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["userlist".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }
}
