use serde::{Deserialize, Serialize};

/// An endpoint (a technology-specific address such as `PJSIP/alice`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    pub technology: String,
    pub resource: String,
    /// `unknown`, `offline`, `online`
    pub state: Option<String>,
    #[serde(default)]
    pub channel_ids: Vec<String>,
}

impl Endpoint {
    /// `technology/resource`, the form used in dial strings.
    pub fn address(&self) -> String {
        format!("{}/{}", self.technology, self.resource)
    }
}

/// Peer registration status reported for an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Peer {
    /// e.g. `Reachable`, `Unreachable`, `Registered`
    pub peer_status: String,
    pub cause: Option<String>,
    pub address: Option<String>,
    pub port: Option<String>,
    pub time: Option<String>,
}
