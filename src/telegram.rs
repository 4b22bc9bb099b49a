//! Telegram Bot API notification client

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::Config;
use crate::error::WatcherError;
use crate::io::HttpClient;
use crate::notifier::Notifier;

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Telegram Bot API response envelope
#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

/// Telegram message sender
pub struct TelegramNotifier {
    send_message_url: String,
    chat_id: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for TelegramNotifier {
    // send_message_url embeds the bot token
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl TelegramNotifier {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        let send_message_url = format!(
            "{}/bot{}/sendMessage",
            TELEGRAM_API_URL, config.telegram_token
        );

        tracing::debug!("Created TelegramNotifier for chat {}", config.telegram_chat_id);

        Self {
            send_message_url,
            chat_id: config.telegram_chat_id.clone(),
            http,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn type_name(&self) -> &str {
        "telegram"
    }

    async fn notify(&self, text: &str) -> crate::Result<()> {
        let params = [("chat_id", self.chat_id.as_str()), ("text", text)];

        tracing::debug!("Sending Telegram message to chat {}", self.chat_id);
        let response = self.http.post_form(&self.send_message_url, &params).await?;

        if response.status != 200 {
            return Err(WatcherError::Notify(format!(
                "Telegram API returned status {}: {}",
                response.status, response.body
            )));
        }

        // Delivery is fire-and-forget; only the ok flag is consumed.
        if let Ok(parsed) = serde_json::from_str::<SendMessageResponse>(&response.body) {
            if !parsed.ok {
                return Err(WatcherError::Notify(
                    parsed
                        .description
                        .unwrap_or_else(|| "sendMessage rejected".to_string()),
                ));
            }
        }

        tracing::debug!("Telegram message sent successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{HttpResponse, MockHttpClient};

    fn test_config() -> Config {
        Config {
            practicum_token: "practicum-token".to_string(),
            telegram_token: "bot-token".to_string(),
            telegram_chat_id: "12345".to_string(),
            poll_interval: std::time::Duration::from_secs(600),
        }
    }

    #[tokio::test]
    async fn sends_message_with_correct_params() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_form()
            .withf(|url, params| {
                url == "https://api.telegram.org/botbot-token/sendMessage"
                    && params.contains(&("chat_id", "12345"))
                    && params.contains(&("text", "Новый статус"))
            })
            .returning(|_, _| {
                Box::pin(async {
                    Ok(HttpResponse {
                        status: 200,
                        body: r#"{"ok":true,"result":{"message_id":1}}"#.to_string(),
                    })
                })
            });

        let notifier = TelegramNotifier::new(&test_config(), Arc::new(mock));
        notifier.notify("Новый статус").await.unwrap();
    }

    #[tokio::test]
    async fn returns_error_on_non_200() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_form().returning(|_, _| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 401,
                    body: r#"{"ok":false,"description":"Unauthorized"}"#.to_string(),
                })
            })
        });

        let notifier = TelegramNotifier::new(&test_config(), Arc::new(mock));
        let err = notifier.notify("msg").await.unwrap_err();
        match err {
            WatcherError::Notify(msg) => assert!(msg.contains("401"), "{msg}"),
            other => panic!("expected Notify, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn returns_error_when_api_reports_not_ok() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_form().returning(|_, _| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 200,
                    body: r#"{"ok":false,"description":"chat not found"}"#.to_string(),
                })
            })
        });

        let notifier = TelegramNotifier::new(&test_config(), Arc::new(mock));
        let err = notifier.notify("msg").await.unwrap_err();
        match err {
            WatcherError::Notify(msg) => assert_eq!(msg, "chat not found"),
            other => panic!("expected Notify, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_error_passes_through() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_form().returning(|_, _| {
            Box::pin(async { Err(WatcherError::Transport("timeout".to_string())) })
        });

        let notifier = TelegramNotifier::new(&test_config(), Arc::new(mock));
        let err = notifier.notify("msg").await.unwrap_err();
        assert!(matches!(err, WatcherError::Transport(_)));
    }

    #[tokio::test]
    async fn type_name_is_telegram() {
        let mock = MockHttpClient::new();
        let notifier = TelegramNotifier::new(&test_config(), Arc::new(mock));
        assert_eq!(notifier.type_name(), "telegram");
    }
}
