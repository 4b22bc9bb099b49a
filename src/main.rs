//! Watcher CLI
//!
//! Command-line interface for the homework-review watcher service.

use std::time::Duration;

use clap::Parser;
use practicum_watcher::{run, Config};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "practicum-watcher")]
#[command(about = "Homework review status watcher and Telegram notifier")]
#[command(version)]
struct Args {
    /// Poll interval in seconds (overrides POLL_INTERVAL_SECONDS)
    #[arg(long)]
    interval: Option<u64>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // RUST_LOG wins over the flag when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("{}. Программа принудительно остановлена.", error);
            return Err(error.into());
        }
    };

    if let Some(interval) = args.interval {
        config.poll_interval = Duration::from_secs(interval);
    }

    tracing::info!(
        "Starting watcher (poll interval {}s)",
        config.poll_interval.as_secs()
    );

    run(config).await?;

    Ok(())
}
