//! Practicum homework-statuses API client

use std::sync::Arc;

use serde_json::Value;

use crate::config::Config;
use crate::error::WatcherError;
use crate::io::HttpClient;

pub const HOMEWORK_STATUSES_URL: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Client for the Practicum review-status endpoint
pub struct PracticumClient {
    token: String,
    endpoint: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl PracticumClient {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        Self {
            token: config.practicum_token.clone(),
            endpoint: HOMEWORK_STATUSES_URL.to_string(),
            http,
        }
    }

    /// Fetch homework statuses updated since the given UNIX timestamp.
    pub async fn latest_statuses(&self, since: u64) -> crate::Result<Value> {
        let url = format!("{}?from_date={}", self.endpoint, since);
        let auth = format!("OAuth {}", self.token);

        tracing::debug!("Fetching homework statuses since {}", since);
        let response = self.http.get(&url, &[("Authorization", &auth)]).await?;

        if response.status != 200 {
            return Err(WatcherError::EndpointUnavailable {
                endpoint: self.endpoint.clone(),
                status: response.status,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}

/// Pick the most recently updated homework record out of a decoded response.
///
/// The API returns an object with a newest-first `homeworks` list; early API
/// versions wrapped that object in a single-element list, which is still
/// tolerated.
pub fn extract_latest(response: &Value) -> crate::Result<Value> {
    let object = match response {
        Value::Array(items) => items.first().ok_or(WatcherError::EmptyPayload)?,
        Value::Object(map) if !map.is_empty() => response,
        _ => return Err(WatcherError::EmptyPayload),
    };

    let homeworks = object
        .get("homeworks")
        .and_then(Value::as_array)
        .ok_or(WatcherError::HomeworksNotAList)?;

    homeworks.first().cloned().ok_or(WatcherError::NoHomeworks)
}
