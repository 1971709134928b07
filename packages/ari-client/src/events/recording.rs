use serde::{Deserialize, Serialize};

use crate::resources::LiveRecording;

/// A recording has started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingStarted {
    pub recording: LiveRecording,
}

/// A recording has stopped and been stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingFinished {
    pub recording: LiveRecording,
}

/// A recording failed; `recording.cause` says why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingFailed {
    pub recording: LiveRecording,
}
