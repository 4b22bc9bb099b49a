//! Engine: the poll cycle and the loop around it

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio_util::sync::CancellationToken;

use crate::notifier::Notifier;
use crate::practicum::{extract_latest, PracticumClient};
use crate::status::status_change_message;

/// Polls the review API on a fixed cadence and forwards status changes to chat
pub struct Engine {
    client: PracticumClient,
    notifier: Arc<dyn Notifier>,
    poll_interval: Duration,
    cancel: CancellationToken,
}

impl Engine {
    pub fn new(
        client: PracticumClient,
        notifier: Arc<dyn Notifier>,
        poll_interval: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            client,
            notifier,
            poll_interval,
            cancel,
        }
    }

    /// Run poll cycles until the cancellation token fires.
    ///
    /// The inter-cycle sleep runs after every cycle, successful or not.
    pub async fn run(&self) {
        let mut last_sent = String::new();
        loop {
            last_sent = self.poll_cycle(&last_sent).await;

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                _ = self.cancel.cancelled() => {
                    tracing::debug!("Polling loop cancelled");
                    break;
                }
            }
        }
    }

    /// Run one fetch-extract-format-notify pass.
    ///
    /// Returns the message to compare against on the next cycle: the freshly
    /// computed one on success, the previous one unchanged on failure, so
    /// the first distinct status after an error is still detected.
    pub async fn poll_cycle(&self, last_sent: &str) -> String {
        match self.try_cycle(last_sent).await {
            Ok(message) => message,
            Err(error) => {
                let report = format!("Сбой в работе программы: {}", error);
                self.send(&report).await;
                tracing::info!("Error notification sent");
                tracing::error!(error = ?error, "Poll cycle failed");
                last_sent.to_string()
            }
        }
    }

    async fn try_cycle(&self, last_sent: &str) -> crate::Result<String> {
        let since = unix_now();
        let response = self.client.latest_statuses(since).await?;
        let record = extract_latest(&response)?;
        let message = status_change_message(&record)?;

        if message != last_sent {
            self.send(&message).await;
            tracing::info!("Status change notification sent");
        } else {
            tracing::debug!("No new statuses in the response");
        }

        Ok(message)
    }

    /// Best-effort delivery; a broken chat channel must not take the loop down.
    async fn send(&self, text: &str) {
        if let Err(error) = self.notifier.notify(text).await {
            tracing::warn!(
                "Notification via '{}' failed: {}",
                self.notifier.type_name(),
                error
            );
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
