use crate::{domain::ChatTarget, errors::Error, messaging::port::MessagingPort, Result};

/// Send `text` to the configured chat.
///
/// Any messenger failure comes back as `Error::Delivery` carrying the cause.
pub async fn send_message(
    messenger: &dyn MessagingPort,
    chat: &ChatTarget,
    text: &str,
) -> Result<()> {
    tracing::debug!(?chat, "sending message");

    match messenger.send_text(chat, text).await {
        Ok(()) => {
            tracing::info!(text, "message sent");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "message delivery failed");
            Err(match e {
                Error::Delivery(cause) => Error::Delivery(cause),
                other => Error::Delivery(other.to_string()),
            })
        }
    }
}
