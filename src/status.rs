//! Known review statuses, verdict texts and message formatting

use serde::Deserialize;
use serde_json::Value;

use crate::error::WatcherError;

/// Review status codes documented by the Practicum API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// Parse a status code from an API record
    pub fn parse(code: &str) -> crate::Result<Self> {
        match code {
            "approved" => Ok(ReviewStatus::Approved),
            "reviewing" => Ok(ReviewStatus::Reviewing),
            "rejected" => Ok(ReviewStatus::Rejected),
            other => Err(WatcherError::UnknownStatus {
                status: other.to_string(),
            }),
        }
    }

    /// The fixed human-readable verdict for this status
    pub fn verdict(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            ReviewStatus::Reviewing => "Работа взята на проверку ревьюером.",
            ReviewStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// The latest homework-review entry returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct StatusRecord {
    pub homework_name: String,
    pub status: String,
}

/// Build the chat message announcing a review status change.
///
/// Field presence is checked before deserializing so each missing key gets
/// its own error; `status` is checked first, matching the API contract.
pub fn status_change_message(record: &Value) -> crate::Result<String> {
    if record.get("status").is_none() {
        return Err(WatcherError::MissingField { field: "status" });
    }
    if record.get("homework_name").is_none() {
        return Err(WatcherError::MissingField {
            field: "homework_name",
        });
    }

    let record: StatusRecord = serde_json::from_value(record.clone())?;
    let status = ReviewStatus::parse(&record.status)?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        record.homework_name,
        status.verdict()
    ))
}
