use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::AriClient;

/// A recording that is finished and stored on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecording {
    pub name: String,
    pub format: String,
}

/// State of a live recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingState {
    Queued,
    Recording,
    Paused,
    Done,
    Failed,
    Canceled,
    #[serde(other)]
    Unknown,
}

/// A recording in progress.
///
/// The snapshot does not hold a client. The live operations below take one at
/// call time and address the recording by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveRecording {
    pub name: String,
    pub format: Option<String>,
    /// URI of the channel or bridge being recorded
    pub target_uri: Option<String>,
    pub state: Option<RecordingState>,
    /// Seconds recorded so far
    pub duration: Option<i64>,
    pub talking_duration: Option<i64>,
    pub silence_duration: Option<i64>,
    /// Failure reason when `state` is `failed`
    pub cause: Option<String>,
}

impl LiveRecording {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stop the recording and store it.
    pub async fn stop(&self, client: &AriClient) -> Result<()> {
        client.recordings().stop_live(&self.name).await
    }

    /// Stop the recording and discard it.
    pub async fn cancel(&self, client: &AriClient) -> Result<()> {
        client.recordings().cancel_live(&self.name).await
    }

    pub async fn pause(&self, client: &AriClient) -> Result<()> {
        client.recordings().pause_live(&self.name).await
    }

    pub async fn unpause(&self, client: &AriClient) -> Result<()> {
        client.recordings().unpause_live(&self.name).await
    }

    pub async fn mute(&self, client: &AriClient) -> Result<()> {
        client.recordings().mute_live(&self.name).await
    }

    pub async fn unmute(&self, client: &AriClient) -> Result<()> {
        client.recordings().unmute_live(&self.name).await
    }

    /// Fetch a fresh snapshot of this recording.
    pub async fn refresh(&self, client: &AriClient) -> Result<LiveRecording> {
        client.recordings().get_live(&self.name).await
    }
}
