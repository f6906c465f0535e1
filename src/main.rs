//! Promptcraft CLI entry point.
//!
//! Parses arguments, installs the stderr log subscriber, dispatches to the
//! appropriate command handler, and maps errors to exit codes.

use promptcraft::cli::Cli;
use promptcraft::{commands, exit_codes};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "promptcraft=warn";
const VERBOSE_LOG_FILTER: &str = "promptcraft=debug";

fn init_tracing(verbose: bool) {
    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version arrive here too, on stdout.
            let code = if err.use_stderr() {
                exit_codes::USER_ERROR
            } else {
                exit_codes::SUCCESS
            };
            let _ = err.print();
            return ExitCode::from(code as u8);
        }
    };
    init_tracing(cli.verbose);

    match commands::dispatch(cli.command).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            if err.is_retryable() {
                eprintln!("Nothing was saved. Run the same command again to retry.");
            }
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
