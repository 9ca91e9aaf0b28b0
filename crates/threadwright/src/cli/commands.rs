//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// threadwright - write, illustrate, and post one X thread per run
#[derive(Parser, Debug)]
#[command(name = "threadwright")]
#[command(
    about = "Write, illustrate, and post one X thread per run",
    long_about = "Picks an unused topic, generates a thread and an illustration with xAI, \
                  and posts the thread to X as a reply chain.\n\n\
                  Do not run two instances against the same topic database at once."
)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Extra configuration file, layered over the defaults
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Select a topic, generate, and post a thread
    Run {
        /// Generate and print the thread without recording, uploading, or posting
        #[arg(long)]
        dry_run: bool,
    },

    /// List pool topics and whether each has been used
    Topics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from(["threadwright", "run"]).unwrap();
        assert_eq!(cli.command, Commands::Run { dry_run: false });
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "threadwright",
            "run",
            "--dry-run",
            "-v",
            "--json-logs",
            "--config",
            "/etc/threadwright.toml",
        ])
        .unwrap();
        assert_eq!(cli.command, Commands::Run { dry_run: true });
        assert!(cli.verbose);
        assert!(cli.json_logs);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/threadwright.toml")));
    }

    #[test]
    fn test_parse_topics() {
        let cli = Cli::try_parse_from(["threadwright", "topics"]).unwrap();
        assert_eq!(cli.command, Commands::Topics);
    }

    #[test]
    fn test_command_is_required() {
        assert!(Cli::try_parse_from(["threadwright"]).is_err());
    }
}
