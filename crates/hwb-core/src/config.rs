use std::{env, fmt, time::Duration};

use crate::{domain::ChatTarget, errors::Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const REQUIRED: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Typed configuration, built once at startup and shared by reference.
#[derive(Clone)]
pub struct Config {
    // Credentials
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: ChatTarget,

    // Homework API
    pub endpoint: String,
    pub request_timeout: Duration,

    // Loop pacing
    pub retry_period: Duration,
}

impl Config {
    /// Load from the process environment, reading `.env` first if present.
    ///
    /// Variables already set in the environment win over `.env`.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).and_then(non_empty);

        let missing: Vec<&str> = REQUIRED
            .iter()
            .copied()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(Error::Config(format!(
                "отсутствуют необходимые переменные окружения: {}",
                missing.join(", ")
            )));
        }

        let practicum_token = get("PRACTICUM_TOKEN").unwrap_or_default();
        let telegram_token = get("TELEGRAM_TOKEN").unwrap_or_default();
        let telegram_chat_id =
            ChatTarget::parse(&get("TELEGRAM_CHAT_ID").unwrap_or_default());

        let endpoint = get("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let retry_period = secs(&get, "RETRY_PERIOD")?.unwrap_or(DEFAULT_RETRY_PERIOD);
        let request_timeout =
            secs(&get, "REQUEST_TIMEOUT_SECS")?.unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            request_timeout,
            retry_period,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("request_timeout", &self.request_timeout)
            .field("retry_period", &self.retry_period)
            .finish()
    }
}

fn secs(get: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<Duration>> {
    let Some(raw) = get(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u64>()
        .map(|s| Some(Duration::from_secs(s)))
        .map_err(|_| {
            Error::Config(format!(
                "{key} должен быть числом секунд, получено {raw:?}"
            ))
        })
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
