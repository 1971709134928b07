use crate::error::Result;
use crate::resources::Bridge;
use crate::{segment, AriClient};

/// `/bridges` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Bridges<'a> {
    client: &'a AriClient,
}

impl<'a> Bridges<'a> {
    pub(crate) fn new(client: &'a AriClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Bridge>> {
        self.client.get_list("Bridge", "/bridges").await
    }

    pub async fn get(&self, bridge_id: &str) -> Result<Bridge> {
        let path = format!("/bridges/{}", segment(bridge_id));
        self.client.get_resource("Bridge", &path).await
    }

    /// Shut down a bridge. Channels in it are removed but not hung up.
    pub async fn destroy(&self, bridge_id: &str) -> Result<()> {
        let path = format!("/bridges/{}", segment(bridge_id));
        self.client.delete(&path).await
    }
}
