//! Practicum homework-review watcher
//!
//! Polls the Yandex Practicum homework-statuses API on a fixed interval,
//! detects review status changes for the most recent submission, and forwards
//! them to a Telegram chat.

pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod notifier;
pub mod practicum;
pub mod status;
pub mod telegram;

pub use config::Config;
pub use error::{Result, WatcherError};

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::engine::Engine;
use crate::io::ReqwestHttpClient;
use crate::notifier::Notifier;
use crate::practicum::PracticumClient;
use crate::telegram::TelegramNotifier;

/// Run the watcher with the given configuration
pub async fn run(config: Config) -> Result<()> {
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::default());
    let cancel = CancellationToken::new();

    let client = PracticumClient::new(&config, Arc::clone(&http));
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(&config, http));

    let engine = Engine::new(client, notifier, config.poll_interval, cancel.clone());

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    tracing::info!("Watcher engine started");

    // Run the engine (blocks until cancelled)
    engine.run().await;

    tracing::info!("Watcher engine stopped");

    Ok(())
}
