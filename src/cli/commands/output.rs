use clap::{Arg, Command};

pub const ARG_OUTPUT: &str = "output";
pub const ARG_ELEMENT_ID: &str = "element-id";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_OUTPUT)
                .short('o')
                .long("output")
                .help("HTML document to update (default: write to stdout)")
                .env("USERLIST_OUTPUT")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new(ARG_ELEMENT_ID)
                .short('e')
                .long("element-id")
                .help("id of the element whose content is replaced (default: data)")
                .long_help(
                    "id attribute of the element whose content is replaced. Only meaningful together with --output.",
                )
                .env("USERLIST_ELEMENT_ID"),
        )
}
