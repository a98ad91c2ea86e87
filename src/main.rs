use chrono::{DateTime, Utc};
use clap::Parser;
use review_scheduler::{Difficulty, ReviewScheduler, SchedulingPolicy};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Computes when a card should next be reviewed.
#[derive(Parser, Debug)]
#[command(name = "review-scheduler", version)]
struct Cli {
    /// How well the card was recalled: again, hard, good or easy
    difficulty: Difficulty,

    /// Current interval in days (omit for a card never reviewed)
    #[arg(long)]
    interval: Option<u32>,

    /// Current ease factor (omit for a card never reviewed)
    #[arg(long)]
    ease: Option<f64>,

    /// Instant of the review as RFC 3339, defaults to now
    #[arg(long)]
    now: Option<DateTime<Utc>>,

    /// JSON file overriding the scheduling policy
    #[arg(long)]
    policy: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let policy = match &cli.policy {
        Some(path) => SchedulingPolicy::from_json_path(path)?,
        None => SchedulingPolicy::default(),
    };
    let scheduler = ReviewScheduler::new(policy)?;

    let now = cli.now.unwrap_or_else(Utc::now);
    let outcome = scheduler.next_review(cli.difficulty, cli.interval, cli.ease, now)?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
