use std::{process::ExitCode, sync::Arc};

use hwb_core::{
    config::Config, messaging::port::MessagingPort, poller::Poller, ports::HomeworkApi,
};
use hwb_practicum::PracticumClient;
use hwb_telegram::TelegramMessenger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = hwb_core::logging::init("hwb") {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "homework bot stopped");
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    // Nothing touches the network before the credentials check passes.
    let cfg = match Config::load() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            tracing::error!(critical = true, error = %e, "required credentials are missing");
            return Err(anyhow::Error::new(e).context("homework bot cannot start"));
        }
    };
    tracing::debug!(config = ?cfg, "configuration loaded");

    let api: Arc<dyn HomeworkApi> = Arc::new(PracticumClient::new(&cfg)?);
    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::from_config(&cfg));
    let poller = Poller::new(cfg, api, messenger);

    tokio::select! {
        _ = poller.run() => {}
        res = tokio::signal::ctrl_c() => {
            res?;
            tracing::info!("interrupted, shutting down");
        }
    }

    Ok(())
}
