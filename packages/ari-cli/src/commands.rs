//! REST subcommands

use anyhow::{Context, Result};
use ari_client::{AriClient, Bridge, Channel, LiveRecording, StoredRecording};
use clap::Subcommand;
use std::path::PathBuf;

use crate::output::Output;

#[derive(Subcommand)]
pub enum RecordingsCommand {
    /// List stored recordings
    List,
    /// Show a stored recording
    Get { name: String },
    /// Delete a stored recording
    Delete { name: String },
    /// Download a stored recording's media
    Download {
        name: String,
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Copy a stored recording
    Copy { name: String, destination: String },
    /// Show a live recording
    Live { name: String },
    /// Stop a live recording and store it
    Stop { name: String },
    /// Stop a live recording and discard it
    Cancel { name: String },
    Pause { name: String },
    Unpause { name: String },
    Mute { name: String },
    Unmute { name: String },
}

#[derive(Subcommand)]
pub enum BridgesCommand {
    List,
    Get { id: String },
    Destroy { id: String },
}

#[derive(Subcommand)]
pub enum ChannelsCommand {
    List,
    Get {
        id: String,
    },
    Hangup {
        id: String,
        /// normal, busy, congestion, no_answer, ...
        #[arg(long)]
        reason: Option<String>,
    },
}

pub async fn recordings(client: &AriClient, cmd: RecordingsCommand, out: &Output) -> Result<()> {
    let api = client.recordings();
    match cmd {
        RecordingsCommand::List => {
            let recordings = api.list_stored().await.context("Failed to list recordings")?;
            if out.is_json() {
                return out.value(&recordings);
            }
            if recordings.is_empty() {
                out.print_info("No stored recordings");
            }
            for recording in &recordings {
                print_stored(out, recording);
            }
        }
        RecordingsCommand::Get { name } => {
            let recording = api.get_stored(&name).await?;
            show(out, &recording, print_stored)?;
        }
        RecordingsCommand::Delete { name } => {
            api.delete_stored(&name).await?;
            out.print_success(&format!("Deleted {name}"));
        }
        RecordingsCommand::Download { name, output } => {
            let bytes = api.get_stored_file(&name).await?;
            std::fs::write(&output, &bytes)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            out.print_success(&format!("Wrote {} bytes to {}", bytes.len(), output.display()));
        }
        RecordingsCommand::Copy { name, destination } => {
            let copied = api.copy_stored(&name, &destination).await?;
            show(out, &copied, print_stored)?;
        }
        RecordingsCommand::Live { name } => {
            let recording = api.get_live(&name).await?;
            show(out, &recording, print_live)?;
        }
        RecordingsCommand::Stop { name } => {
            api.stop_live(&name).await?;
            out.print_success(&format!("Stopped {name}"));
        }
        RecordingsCommand::Cancel { name } => {
            api.cancel_live(&name).await?;
            out.print_success(&format!("Cancelled {name}"));
        }
        RecordingsCommand::Pause { name } => {
            api.pause_live(&name).await?;
            out.print_success(&format!("Paused {name}"));
        }
        RecordingsCommand::Unpause { name } => {
            api.unpause_live(&name).await?;
            out.print_success(&format!("Unpaused {name}"));
        }
        RecordingsCommand::Mute { name } => {
            api.mute_live(&name).await?;
            out.print_success(&format!("Muted {name}"));
        }
        RecordingsCommand::Unmute { name } => {
            api.unmute_live(&name).await?;
            out.print_success(&format!("Unmuted {name}"));
        }
    }
    Ok(())
}

pub async fn bridges(client: &AriClient, cmd: BridgesCommand, out: &Output) -> Result<()> {
    let api = client.bridges();
    match cmd {
        BridgesCommand::List => {
            let bridges = api.list().await.context("Failed to list bridges")?;
            if out.is_json() {
                return out.value(&bridges);
            }
            for bridge in &bridges {
                print_bridge(out, bridge);
            }
        }
        BridgesCommand::Get { id } => {
            let bridge = api.get(&id).await?;
            show(out, &bridge, print_bridge)?;
        }
        BridgesCommand::Destroy { id } => {
            api.destroy(&id).await?;
            out.print_success(&format!("Destroyed bridge {id}"));
        }
    }
    Ok(())
}

pub async fn channels(client: &AriClient, cmd: ChannelsCommand, out: &Output) -> Result<()> {
    let api = client.channels();
    match cmd {
        ChannelsCommand::List => {
            let channels = api.list().await.context("Failed to list channels")?;
            if out.is_json() {
                return out.value(&channels);
            }
            for channel in &channels {
                print_channel(out, channel);
            }
        }
        ChannelsCommand::Get { id } => {
            let channel = api.get(&id).await?;
            show(out, &channel, print_channel)?;
        }
        ChannelsCommand::Hangup { id, reason } => {
            api.hangup(&id, reason.as_deref()).await?;
            out.print_success(&format!("Hung up {id}"));
        }
    }
    Ok(())
}

fn show<T: serde::Serialize>(out: &Output, value: &T, summary: fn(&Output, &T)) -> Result<()> {
    if out.is_json() {
        out.value(value)
    } else {
        summary(out, value);
        Ok(())
    }
}

fn print_stored(out: &Output, recording: &StoredRecording) {
    out.row(&recording.name, &recording.format);
}

fn print_live(out: &Output, recording: &LiveRecording) {
    let state = recording
        .state
        .map(|s| format!("{s:?}").to_lowercase())
        .unwrap_or_else(|| "unknown".to_string());
    let duration = recording
        .duration
        .map(|d| format!("{d}s"))
        .unwrap_or_default();
    out.row(&recording.name, &format!("{state} {duration}"));
}

fn print_bridge(out: &Output, bridge: &Bridge) {
    let kind = bridge.bridge_type.as_deref().unwrap_or("?");
    out.row(
        &bridge.id,
        &format!("{kind}, {} channel(s)", bridge.channels.len()),
    );
}

fn print_channel(out: &Output, channel: &Channel) {
    let name = channel.name.as_deref().unwrap_or("");
    let state = channel.state.as_deref().unwrap_or("?");
    out.row(&channel.id, &format!("{name} [{state}]"));
}
