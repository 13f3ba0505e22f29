use clap::Parser;

pub const HELP: &str = include_str!("../../config/HELP.md");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(
    name = "compose-shell",
    about = "Open a shell in a docker compose service",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Print the version and exit
    #[arg(long)]
    version: bool,

    #[arg(hide = true)]
    rest: Vec<String>,
}

/// What the command line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Interactive,
    Version,
    Help,
}

impl Invocation {
    /// Classifies the arguments (including the program name). Anything that
    /// is not empty or exactly `--version` asks for help.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString>,
    {
        let args: Vec<std::ffi::OsString> = args.into_iter().map(Into::into).collect();

        // clap swallows a lone `--`, so anything beyond a single `--version`
        // is decided here.
        match args.get(1..) {
            None | Some([]) => return Self::Interactive,
            Some([flag]) if flag.as_os_str() == "--version" => {}
            Some(_) => return Self::Help,
        }

        match Cli::try_parse_from(args) {
            Ok(cli) if cli.version && cli.rest.is_empty() => Self::Version,
            _ => Self::Help,
        }
    }
}

pub fn help_text() -> String {
    format!("{HELP}\n\nVersion: {VERSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_is_interactive() {
        assert_eq!(Invocation::from_args(["compose-shell"]), Invocation::Interactive);
    }

    #[test]
    fn test_version_flag() {
        assert_eq!(
            Invocation::from_args(["compose-shell", "--version"]),
            Invocation::Version
        );
    }

    #[test]
    fn test_anything_else_is_help() {
        for args in [
            vec!["compose-shell", "--help"],
            vec!["compose-shell", "-h"],
            vec!["compose-shell", "-V"],
            vec!["compose-shell", "web"],
            vec!["compose-shell", "--version", "extra"],
            vec!["compose-shell", "--version", "--version"],
            vec!["compose-shell", "--frobnicate"],
            vec!["compose-shell", "--"],
            vec!["compose-shell", "--", "--version"],
        ] {
            assert_eq!(Invocation::from_args(args.clone()), Invocation::Help, "{args:?}");
        }
    }

    #[test]
    fn test_help_text_ends_with_version() {
        let text = help_text();
        assert!(text.contains("CONTAINER_BASE_PATH"));
        assert!(text.ends_with(&format!("Version: {VERSION}")));
    }
}
