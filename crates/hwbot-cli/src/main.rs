mod cmd;

use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use hwbot_core::config::{DEFAULT_ENDPOINT, DEFAULT_POLL_SECS, DEFAULT_TIMEOUT_SECS};
use hwbot_core::Settings;

#[derive(Parser)]
#[command(
    name = "hwbot",
    about = "Watches homework review status and reports changes to a Telegram chat",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ConfigArgs {
    /// OAuth token for the homework status API
    #[arg(long, global = true, env = "PRACTICUM_TOKEN", hide_env_values = true)]
    practicum_token: Option<String>,

    /// Telegram bot token
    #[arg(long, global = true, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    telegram_token: Option<String>,

    /// Telegram chat that receives notifications
    #[arg(long, global = true, env = "TELEGRAM_CHAT_ID")]
    chat_id: Option<String>,

    /// Status endpoint URL
    #[arg(long, global = true, env = "HOMEWORK_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Seconds between poll cycles
    #[arg(long, global = true, env = "POLL_INTERVAL", default_value_t = DEFAULT_POLL_SECS)]
    interval: u64,

    /// Seconds before an outbound HTTP request is abandoned
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

impl ConfigArgs {
    fn into_settings(self) -> Settings {
        Settings {
            practicum_token: self.practicum_token.unwrap_or_default(),
            telegram_token: self.telegram_token.unwrap_or_default(),
            chat_id: self.chat_id.unwrap_or_default(),
            endpoint: self.endpoint,
            poll_interval: Duration::from_secs(self.interval),
            request_timeout: Duration::from_secs(self.timeout),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the monitor loop
    Run,

    /// Validate configuration and perform a single poll
    Check,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Run => tracing::Level::INFO,
        Commands::Check => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let settings = cli.config.into_settings();

    let result = match cli.command {
        Commands::Run => cmd::run::run(settings),
        Commands::Check => cmd::check::run(settings),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
