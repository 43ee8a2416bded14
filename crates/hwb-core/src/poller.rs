//! The polling loop: fetch, diff against the last report, notify, sleep.
//!
//! One `Poller` owns the cursor and the last-reported state. Every failure
//! inside an iteration is caught here, turned into a chat message and never
//! allowed to stop the loop.

use std::sync::Arc;

use tokio::time::sleep;

use crate::{
    config::Config,
    domain::{now_unix, Report},
    errors::Error,
    formatting::{failure_message, no_news, parse_status},
    messaging::port::MessagingPort,
    notifier::send_message,
    ports::HomeworkApi,
    validation::{check_response, current_date},
    Result,
};

pub const START_MESSAGE: &str = "Привет! Сейчас проверю, что там у нас";

/// What one iteration ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new status (or "no news") was sent to the chat.
    Notified,
    /// Same report as last time; nothing sent.
    Unchanged,
    /// The iteration failed and the failure was reported (best-effort).
    FailureReported,
    /// The iteration failed the same way as last time; nothing sent.
    FailureSuppressed,
}

pub struct Poller {
    cfg: Arc<Config>,
    api: Arc<dyn HomeworkApi>,
    messenger: Arc<dyn MessagingPort>,
    cursor: i64,
    last: Option<Report>,
}

impl Poller {
    pub fn new(
        cfg: Arc<Config>,
        api: Arc<dyn HomeworkApi>,
        messenger: Arc<dyn MessagingPort>,
    ) -> Self {
        Self {
            cfg,
            api,
            messenger,
            cursor: now_unix(),
            last: None,
        }
    }

    /// Timestamp the next fetch will ask for.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_report(&self) -> Option<&Report> {
        self.last.as_ref()
    }

    /// Greet the chat, then poll forever with a fixed pause between iterations.
    pub async fn run(mut self) {
        tracing::info!(
            endpoint = %self.cfg.endpoint,
            retry_period_secs = self.cfg.retry_period.as_secs(),
            "homework bot started"
        );
        if let Err(e) = self.greet().await {
            tracing::error!(error = %e, "startup greeting not delivered");
        }

        loop {
            let outcome = self.tick().await;
            tracing::debug!(?outcome, cursor = self.cursor, "iteration finished");
            sleep(self.cfg.retry_period).await;
        }
    }

    pub async fn greet(&self) -> Result<()> {
        self.send(START_MESSAGE).await
    }

    /// Run one iteration without the trailing sleep.
    pub async fn tick(&mut self) -> TickOutcome {
        match self.poll_once().await {
            Ok(outcome) => outcome,
            Err(e) => self.report_failure(e).await,
        }
    }

    async fn poll_once(&mut self) -> Result<TickOutcome> {
        let response = self.api.fetch(self.cursor).await?;
        self.cursor = current_date(&response).unwrap_or_else(now_unix);

        let homeworks = check_response(&response)?;
        let update = match homeworks.first() {
            Some(latest) => parse_status(latest)?,
            None => no_news(),
        };

        if self.last.as_ref() == Some(&update.report) {
            tracing::info!(text = %update.message, "no status change");
            return Ok(TickOutcome::Unchanged);
        }

        self.send(&update.message).await?;
        self.last = Some(update.report);
        Ok(TickOutcome::Notified)
    }

    async fn report_failure(&mut self, err: Error) -> TickOutcome {
        let text = failure_message(&err);
        tracing::error!(error = ?err, "{text}");

        // Identical failures are reported once until something else happens.
        let report = Report::Failure(text.clone());
        if self.last.as_ref() == Some(&report) {
            return TickOutcome::FailureSuppressed;
        }

        match self.send(&text).await {
            Ok(()) => self.last = Some(report),
            Err(e) => tracing::error!(error = %e, "failure notification not delivered"),
        }
        TickOutcome::FailureReported
    }

    async fn send(&self, text: &str) -> Result<()> {
        send_message(self.messenger.as_ref(), &self.cfg.telegram_chat_id, text).await
    }
}
