use reqwest::Method;

use crate::error::Result;
use crate::resources::Channel;
use crate::{segment, AriClient};

/// `/channels` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Channels<'a> {
    client: &'a AriClient,
}

impl<'a> Channels<'a> {
    pub(crate) fn new(client: &'a AriClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Channel>> {
        self.client.get_list("Channel", "/channels").await
    }

    pub async fn get(&self, channel_id: &str) -> Result<Channel> {
        let path = format!("/channels/{}", segment(channel_id));
        self.client.get_resource("Channel", &path).await
    }

    /// Hang up a channel. `reason` is one of the server's hangup reasons
    /// (`normal`, `busy`, `congestion`, ...); the server default applies when `None`.
    pub async fn hangup(&self, channel_id: &str, reason: Option<&str>) -> Result<()> {
        let path = format!("/channels/{}", segment(channel_id));
        let mut request = self.client.request(Method::DELETE, &path);
        if let Some(reason) = reason {
            request = request.query(&[("reason", reason)]);
        }
        self.client.execute(Method::DELETE, &path, request).await?;
        Ok(())
    }
}
