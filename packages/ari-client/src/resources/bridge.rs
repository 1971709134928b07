use serde::{Deserialize, Serialize};

/// A mixing bridge on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bridge {
    pub id: String,
    pub technology: Option<String>,
    /// `mixing` or `holding`
    pub bridge_type: Option<String>,
    pub bridge_class: Option<String>,
    pub creator: Option<String>,
    pub name: Option<String>,
    /// Ids of the channels currently in the bridge
    #[serde(default)]
    pub channels: Vec<String>,
    pub video_mode: Option<String>,
    pub video_source_id: Option<String>,
    pub creationtime: Option<String>,
}

impl Bridge {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn contains_channel(&self, channel_id: &str) -> bool {
        self.channels.iter().any(|c| c == channel_id)
    }
}
