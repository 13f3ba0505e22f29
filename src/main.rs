use compose_shell::ShellError;
use compose_shell::cli::{self, Invocation, VERSION};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match Invocation::from_args(std::env::args_os()) {
        Invocation::Version => {
            println!("{VERSION}");
            ExitCode::SUCCESS
        }
        Invocation::Help => {
            println!("{}", cli::args::help_text());
            ExitCode::SUCCESS
        }
        Invocation::Interactive => match cli::shell::run_from_env() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => match e.downcast_ref::<ShellError>() {
                Some(ShellError::Aborted) => {
                    eprintln!("Script terminated by user");
                    ExitCode::from(ShellError::Aborted.exit_code())
                }
                Some(shell_error) => {
                    eprintln!("Error: {e:#}");
                    ExitCode::from(shell_error.exit_code())
                }
                None => {
                    eprintln!("Error: {e:#}");
                    ExitCode::FAILURE
                }
            },
        },
    }
}
