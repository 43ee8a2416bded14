/// Core error type for the homework bot.
///
/// Adapter crates map their specific errors into this type so the polling
/// loop can report every failure the same way. Display strings end up in the
/// chat verbatim, so they are written for the student, not for a developer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ошибка конфигурации: {0}")]
    Config(String),

    #[error("нет доступа к {endpoint} (headers: {headers}, params: {params}): {reason}")]
    AccessDenied {
        endpoint: String,
        headers: String,
        params: String,
        reason: String,
    },

    #[error("ответ API не является JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("пустой ответ API")]
    EmptyResponse,

    #[error("неожиданный тип данных: {0}")]
    UnexpectedType(String),

    #[error("в ответе отсутствует {0}")]
    MissingKey(&'static str),

    #[error("неизвестный статус работы - {0}")]
    UnknownStatus(String),

    #[error("не удалось отправить сообщение - {0}")]
    Delivery(String),

    #[error("внешняя ошибка: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
