use reqwest::Method;
use serde_json::json;
use tracing::info;

use crate::error::Result;
use crate::resources::{LiveRecording, StoredRecording};
use crate::{segment, AriClient};

/// `/recordings` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Recordings<'a> {
    client: &'a AriClient,
}

impl<'a> Recordings<'a> {
    pub(crate) fn new(client: &'a AriClient) -> Self {
        Self { client }
    }

    /// List recordings that are complete.
    pub async fn list_stored(&self) -> Result<Vec<StoredRecording>> {
        self.client.get_list("StoredRecording", "/recordings/stored").await
    }

    /// Get a stored recording's details.
    pub async fn get_stored(&self, name: &str) -> Result<StoredRecording> {
        let path = format!("/recordings/stored/{}", segment(name));
        self.client.get_resource("StoredRecording", &path).await
    }

    /// Delete a stored recording.
    pub async fn delete_stored(&self, name: &str) -> Result<()> {
        let path = format!("/recordings/stored/{}", segment(name));
        self.client.delete(&path).await
    }

    /// Download the recorded media.
    pub async fn get_stored_file(&self, name: &str) -> Result<Vec<u8>> {
        let path = format!("/recordings/stored/{}/file", segment(name));
        let response = self
            .client
            .execute(Method::GET, &path, self.client.request(Method::GET, &path))
            .await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Copy a stored recording to `destination`.
    ///
    /// Fails with `Conflict` when `destination` already exists.
    pub async fn copy_stored(&self, name: &str, destination: &str) -> Result<StoredRecording> {
        let path = format!("/recordings/stored/{}/copy", segment(name));
        let request = self
            .client
            .request(Method::POST, &path)
            .json(&json!({ "destinationRecordingName": destination }));

        let response = self.client.execute(Method::POST, &path, request).await?;
        let copied = crate::parse_resource("StoredRecording", response).await?;
        info!(from = name, to = destination, "Copied stored recording");
        Ok(copied)
    }

    pub async fn get_live(&self, name: &str) -> Result<LiveRecording> {
        let path = format!("/recordings/live/{}", segment(name));
        self.client.get_resource("LiveRecording", &path).await
    }

    /// Stop a live recording and discard it.
    pub async fn cancel_live(&self, name: &str) -> Result<()> {
        let path = format!("/recordings/live/{}", segment(name));
        self.client.delete(&path).await
    }

    /// Stop a live recording and store it.
    pub async fn stop_live(&self, name: &str) -> Result<()> {
        let path = format!("/recordings/live/{}/stop", segment(name));
        self.client.post_empty(&path).await
    }

    /// Pause a live recording. Silence detection is suspended and paused time
    /// does not count toward the maximum duration.
    pub async fn pause_live(&self, name: &str) -> Result<()> {
        let path = format!("/recordings/live/{}/pause", segment(name));
        self.client.post_empty(&path).await
    }

    pub async fn unpause_live(&self, name: &str) -> Result<()> {
        let path = format!("/recordings/live/{}/pause", segment(name));
        self.client.delete(&path).await
    }

    /// Mute a live recording. Silence detection is suspended until unmuted.
    pub async fn mute_live(&self, name: &str) -> Result<()> {
        let path = format!("/recordings/live/{}/mute", segment(name));
        self.client.post_empty(&path).await
    }

    pub async fn unmute_live(&self, name: &str) -> Result<()> {
        let path = format!("/recordings/live/{}/mute", segment(name));
        self.client.delete(&path).await
    }
}
