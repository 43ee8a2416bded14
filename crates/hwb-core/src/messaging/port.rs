use async_trait::async_trait;

use crate::{domain::ChatTarget, Result};

/// Outbound messenger port.
///
/// Implementations report transport and API failures as `Error::External`;
/// the notifier classifies them as delivery failures.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(&self, chat: &ChatTarget, text: &str) -> Result<()>;
}
