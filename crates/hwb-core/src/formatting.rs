use serde_json::Value;

use crate::{
    domain::{HomeworkStatus, Report},
    errors::Error,
    Result,
};

/// Text sent when the API reports no homework in the polling window.
pub const NO_NEWS: &str = "Пока никаких новостей";

/// A formatted notification plus the report it stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusUpdate {
    pub message: String,
    pub report: Report,
}

/// Turn one homework record into a status-change notification.
pub fn parse_status(homework: &Value) -> Result<StatusUpdate> {
    let name = match homework.get("homework_name") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => return Err(Error::MissingKey("homework_name")),
    };

    let raw_status = homework.get("status").cloned().unwrap_or(Value::Null);
    let status = match serde_json::from_value::<HomeworkStatus>(raw_status.clone()) {
        Ok(s) => s,
        Err(_) => {
            let shown = match raw_status {
                Value::String(s) => s,
                other => other.to_string(),
            };
            tracing::error!(status = %shown, "unknown homework status");
            return Err(Error::UnknownStatus(shown));
        }
    };

    Ok(StatusUpdate {
        message: status_message(&name, status),
        report: Report::Homework { name, status },
    })
}

pub fn status_message(name: &str, status: HomeworkStatus) -> String {
    format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    )
}

/// Placeholder update for an empty homework list.
pub fn no_news() -> StatusUpdate {
    StatusUpdate {
        message: NO_NEWS.to_string(),
        report: Report::NoNews,
    }
}

/// Chat text for a failed iteration.
pub fn failure_message(err: &Error) -> String {
    format!("Сбой в работе программы: {err}")
}
