//! `run` command handler.

use threadwright_bot::{AppConfig, Credentials, DryRun, Pipeline, RunOutcome};
use threadwright_error::ThreadwrightResult;
use tracing::{info, instrument};

/// Run the pipeline once (or dry-run it) and return the exit status.
///
/// Credentials are checked before the store is opened or any request is made.
#[instrument(skip(config))]
pub async fn run_pipeline(config: &AppConfig, dry_run: bool) -> ThreadwrightResult<u8> {
    let credentials = Credentials::from_env()?;
    let mut pipeline = Pipeline::connect(config, &credentials)?;

    if dry_run {
        let dry = pipeline.dry_run().await;
        print_dry_run(&dry, config.text.char_limit);
        return Ok(0);
    }

    let outcome = pipeline.run().await?;
    print_outcome(&outcome);
    info!(exit_code = outcome.exit_code(), "Run finished");
    Ok(outcome.exit_code())
}

fn print_dry_run(dry: &DryRun, char_limit: usize) {
    println!("Topic: {}", dry.topic);
    if dry.thread.is_empty() {
        println!("(no thread generated)");
        return;
    }
    for (index, unit) in dry.thread.units().iter().enumerate() {
        let chars = unit.char_count();
        let flag = if chars > char_limit { " OVER LIMIT" } else { "" };
        println!("\n[{}] ({} chars{})\n{}", index + 1, chars, flag, unit);
    }
}

fn print_outcome(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Published { topic, units } => {
            println!("Posted {} posts about: {}", units.len(), topic);
            if let Some(head) = units.first() {
                println!("Thread head: {}", head.id());
            }
        }
        RunOutcome::NothingToPost { topic } => {
            println!("Nothing to post for: {}", topic);
        }
        RunOutcome::Aborted {
            topic,
            failed_index,
            posted,
            reason,
        } => {
            println!(
                "Stopped at post {} of the thread about: {} ({} already posted)",
                failed_index + 1,
                topic,
                posted.len()
            );
            println!("Reason: {}", reason);
        }
    }
}
