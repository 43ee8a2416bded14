//! Telegram adapter (teloxide).
//!
//! This crate implements the `hwb-core` MessagingPort over Telegram Bot API.

use async_trait::async_trait;

use teloxide::{prelude::*, types::Recipient};

use hwb_core::{
    config::Config, domain::ChatTarget, errors::Error, messaging::port::MessagingPort, Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(Bot::new(cfg.telegram_token.clone()))
    }

    fn recipient(chat: &ChatTarget) -> Recipient {
        match chat {
            ChatTarget::Id(id) => Recipient::Id(teloxide::types::ChatId(*id)),
            ChatTarget::Channel(name) => Recipient::ChannelUsername(name.clone()),
        }
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::External(format!("telegram error: {e}"))
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    /// One attempt per message; a failure goes straight back to the caller.
    async fn send_text(&self, chat: &ChatTarget, text: &str) -> Result<()> {
        self.bot
            .send_message(Self::recipient(chat), text.to_string())
            .await
            .map_err(Self::map_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_chat_maps_to_chat_id() {
        assert_eq!(
            TelegramMessenger::recipient(&ChatTarget::Id(-100123)),
            Recipient::Id(teloxide::types::ChatId(-100123))
        );
    }

    #[test]
    fn channel_name_maps_to_channel_username() {
        assert_eq!(
            TelegramMessenger::recipient(&ChatTarget::Channel("@my_channel".into())),
            Recipient::ChannelUsername("@my_channel".to_string())
        );
    }

    #[test]
    fn request_errors_become_external() {
        let err = TelegramMessenger::map_err(teloxide::RequestError::Api(
            teloxide::ApiError::BotBlocked,
        ));
        match err {
            Error::External(msg) => assert!(msg.starts_with("telegram error:")),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
