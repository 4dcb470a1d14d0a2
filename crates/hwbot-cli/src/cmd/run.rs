use anyhow::{bail, Context, Result};

use hwbot_core::{Monitor, PracticumClient, Settings, TelegramNotifier};

/// Validate settings, build the collaborators, and poll until terminated.
pub fn run(settings: Settings) -> Result<()> {
    // Credentials are checked before anything touches the network.
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
    let monitor = Monitor::new(client, notifier, settings.poll_interval);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        tokio::select! {
            _ = monitor.run() => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted; homework monitor stopped");
            }
        }
    });

    Ok(())
}
