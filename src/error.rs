//! Error types for the watcher service

/// Errors that can occur while polling and notifying
#[derive(Debug, thiserror::Error)]
pub enum WatcherError {
    #[error("Отсутствует обязательная переменная окружения: {name}")]
    MissingConfig { name: &'static str },

    #[error("сбой при запросе к эндпоинту: {0}")]
    Transport(String),

    #[error("недоступность эндпоинта {endpoint} (код {status})")]
    EndpointUnavailable { endpoint: String, status: u16 },

    #[error("ответ API не является корректным JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("пустой ответ API")]
    EmptyPayload,

    #[error("значение homeworks не является списком")]
    HomeworksNotAList,

    #[error("Список с домашкой пуст")]
    NoHomeworks,

    #[error("Пустое значение {field}")]
    MissingField { field: &'static str },

    #[error("недокументированный статус домашней работы: {status}")]
    UnknownStatus { status: String },

    #[error("Сбой при отправке сообщения в Telegram: {0}")]
    Notify(String),
}

/// Result type alias for watcher operations
pub type Result<T> = std::result::Result<T, WatcherError>;
