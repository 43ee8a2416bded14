use serde::Deserialize;

/// Where notifications go: a numeric Telegram chat id or a public
/// channel username such as `@my_channel`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChatTarget {
    Id(i64),
    Channel(String),
}

impl ChatTarget {
    /// Anything that is not an integer is taken as a channel username.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(id) => ChatTarget::Id(id),
            Err(_) => ChatTarget::Channel(raw.to_string()),
        }
    }
}

/// Review status code as reported by the homework API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Human-readable review outcome for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// What the bot last told the chat.
///
/// Compared structurally to decide whether a new notification is warranted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    Homework {
        name: String,
        status: HomeworkStatus,
    },
    NoNews,
    Failure(String),
}

/// Current Unix time in whole seconds.
pub fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}
