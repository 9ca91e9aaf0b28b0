//! threadwright CLI binary.
//!
//! Meant to be run from cron: each invocation posts at most one thread.
//!
//! Exit status: 0 when a thread was fully posted (or a dry run finished),
//! 1 when there was nothing to post or posting stopped part way, 2 on
//! configuration, credential, or topic store errors.

use clap::Parser;
use std::process::ExitCode;

mod cli;
mod logging;
#[cfg(feature = "observability")]
mod observability;

/// Exit status for fatal errors.
const EXIT_FATAL: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Secrets and RUST_LOG may come from .env
    dotenvy::dotenv().ok();

    let cli = cli::Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.json_logs) {
        eprintln!("failed to initialise logging: {}", e);
        return ExitCode::from(EXIT_FATAL);
    }

    let code = match cli::dispatch(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            eprintln!("error: {}", e);
            EXIT_FATAL
        }
    };

    logging::shutdown();
    ExitCode::from(code)
}
