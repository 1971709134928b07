// Command-line front end for the ARI client

mod commands;
mod decode;
mod output;

use anyhow::{Context, Result};
use ari_client::{AriClient, AriConfig};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::output::Output;

#[derive(Parser)]
#[command(name = "ari", version, about = "Asterisk REST Interface client")]
struct Cli {
    /// Override ARI_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Print raw JSON instead of summaries
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Stored and live recordings
    #[command(subcommand)]
    Recordings(commands::RecordingsCommand),

    /// Mixing and holding bridges
    #[command(subcommand)]
    Bridges(commands::BridgesCommand),

    /// Channels
    #[command(subcommand)]
    Channels(commands::ChannelsCommand),

    /// Decode newline-delimited event JSON and print identity keys
    Decode {
        /// Read from this file instead of stdin
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,ari_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let out = Output::new(cli.json);

    match cli.command {
        Command::Decode { file: Some(path) } => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            decode::run(BufReader::new(file), &out)
        }
        Command::Decode { file: None } => decode::run(io::stdin().lock(), &out),
        Command::Recordings(cmd) => commands::recordings(&connect(cli.base_url)?, cmd, &out).await,
        Command::Bridges(cmd) => commands::bridges(&connect(cli.base_url)?, cmd, &out).await,
        Command::Channels(cmd) => commands::channels(&connect(cli.base_url)?, cmd, &out).await,
    }
}

fn connect(base_url: Option<String>) -> Result<AriClient> {
    let config = AriConfig::from_env().context("Failed to load ARI configuration")?;
    let config = override_base_url(config, base_url);
    tracing::debug!(base_url = %config.base_url, "Connecting to ARI");
    AriClient::new(config).context("Failed to build ARI client")
}

/// `--base-url` wins over `ARI_BASE_URL`; the timeout always comes from the environment.
fn override_base_url(mut config: AriConfig, base_url: Option<String>) -> AriConfig {
    if let Some(url) = base_url {
        config.base_url = url;
    }
    config
}
