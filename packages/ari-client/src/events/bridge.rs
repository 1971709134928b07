use serde::{Deserialize, Serialize};

use crate::resources::Bridge;

/// A bridge has been created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeCreated {
    pub bridge: Bridge,
}

/// A bridge has been destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeDestroyed {
    pub bridge: Bridge,
}

/// The source of video in a bridge has changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeVideoSourceChanged {
    pub bridge: Bridge,
    pub old_video_source_id: Option<String>,
}
