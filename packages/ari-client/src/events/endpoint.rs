use serde::{Deserialize, Serialize};

use crate::resources::{Endpoint, Peer};

/// The state of a peer associated with an endpoint has changed.
///
/// Not identifiable: the event is about an endpoint/peer pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerStatusChange {
    pub endpoint: Endpoint,
    pub peer: Peer,
}
