use anyhow::{bail, Context, Result};

use hwbot_core::{CycleOutcome, Monitor, PracticumClient, Settings, TelegramNotifier};

/// Diagnostic one-shot: validate configuration, poll once, print the
/// outcome. Nothing is sent to the chat.
pub fn run(settings: Settings) -> Result<()> {
    if let Err(e) = settings.validate() {
        tracing::error!("{e}");
        bail!("{e}");
    }

    let client = PracticumClient::new(
        settings.endpoint.clone(),
        settings.practicum_token.clone(),
        settings.request_timeout,
    )
    .context("building status client")?;
    let notifier = TelegramNotifier::new(
        settings.telegram_token.clone(),
        settings.chat_id.clone(),
        settings.request_timeout,
    )
    .context("building telegram notifier")?;

    let rt = tokio::runtime::Runtime::new()?;
    let outcome = rt.block_on(async {
        let mut monitor = Monitor::new(client, notifier, settings.poll_interval);
        monitor.poll_once().await
    })?;

    match outcome {
        CycleOutcome::StatusChanged(message) => println!("{message}"),
        CycleOutcome::NoUpdates => println!("No homework updates."),
    }
    println!("Configuration OK.");

    Ok(())
}
