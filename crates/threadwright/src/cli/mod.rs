//! Command-line interface module.

mod commands;
mod run;
mod topics;

pub use commands::{Cli, Commands};
pub use run::run_pipeline;
pub use topics::list_topics;

use threadwright_bot::AppConfig;
use threadwright_error::ThreadwrightResult;

/// Load configuration and execute the requested command.
pub async fn dispatch(cli: Cli) -> ThreadwrightResult<u8> {
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Run { dry_run } => run_pipeline(&config, dry_run).await,
        Commands::Topics => list_topics(&config),
    }
}
