//! Asterisk REST Interface (ARI) client.
//!
//! Two halves:
//!
//! - Resource operations: one async method per REST endpoint, grouped by
//!   resource (`recordings()`, `bridges()`, `channels()`). HTTP 404 becomes
//!   [`AriError::NotFound`], HTTP 409 becomes [`AriError::Conflict`], anything
//!   else is passed through as the underlying `reqwest` error.
//! - Events: [`Event::parse`] turns an inbound notification message into a
//!   typed [`EventKind`], with an optional identity key for correlation.
//!
//! # Example
//!
//! ```rust,ignore
//! use ari_client::{AriClient, Event};
//!
//! let client = AriClient::from_env()?;
//!
//! for recording in client.recordings().list_stored().await? {
//!     println!("{} ({})", recording.name, recording.format);
//! }
//!
//! let event = Event::parse(r#"{"type": "ChannelDestroyed", "cause": 16,
//!     "cause_txt": "Normal Clearing", "channel": {"id": "1234.1"}}"#)?;
//! assert_eq!(event.event_id().as_deref(), Some("ChannelDestroyed_1234.1"));
//! ```

pub mod api;
pub mod cause;
pub mod config;
pub mod error;
pub mod events;
pub mod payload;
pub mod resources;

pub use api::{Bridges, Channels, Recordings};
pub use cause::HangupCause;
pub use config::AriConfig;
pub use error::{AriError, EventError, Result};
pub use events::{decode_events, Event, EventKind, EventType};
pub use payload::Payload;
pub use resources::*;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// ARI REST client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct AriClient {
    http_client: Client,
    base_url: String,
}

impl AriClient {
    /// Create a client from configuration.
    pub fn new(config: AriConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: config.normalized_base_url(),
        })
    }

    /// Create from `ARI_BASE_URL` / `ARI_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::new(AriConfig::from_env()?)
    }

    /// Use a pre-built HTTP client (default headers, credentials, proxies).
    ///
    /// `config.timeout` is ignored; configure it on `http_client` instead.
    pub fn with_http_client(config: AriConfig, http_client: Client) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            http_client,
            base_url: config.normalized_base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn recordings(&self) -> Recordings<'_> {
        Recordings::new(self)
    }

    pub fn bridges(&self) -> Bridges<'_> {
        Bridges::new(self)
    }

    pub fn channels(&self) -> Channels<'_> {
        Channels::new(self)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client
            .request(method, format!("{}{}", self.base_url, path))
    }

    /// Send a request and translate 404/409. Other failures are returned as
    /// the unmodified `reqwest` error.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Response> {
        debug!(%method, path, "ARI request");

        let response = request.send().await?;
        let status = response.status();

        match status {
            StatusCode::NOT_FOUND => Err(AriError::NotFound {
                path: path.to_string(),
                message: error_message(response).await,
            }),
            StatusCode::CONFLICT => Err(AriError::Conflict {
                path: path.to_string(),
                message: error_message(response).await,
            }),
            _ => Ok(response.error_for_status()?),
        }
    }

    pub(crate) async fn get_resource<T: DeserializeOwned>(
        &self,
        kind: &str,
        path: &str,
    ) -> Result<T> {
        let response = self
            .execute(Method::GET, path, self.request(Method::GET, path))
            .await?;
        parse_resource(kind, response).await
    }

    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        kind: &str,
        path: &str,
    ) -> Result<Vec<T>> {
        let response = self
            .execute(Method::GET, path, self.request(Method::GET, path))
            .await?;
        parse_list(kind, response).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<()> {
        self.execute(Method::POST, path, self.request(Method::POST, path))
            .await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.execute(Method::DELETE, path, self.request(Method::DELETE, path))
            .await?;
        Ok(())
    }
}

/// Decode a single-resource response body through [`Payload`] normalization.
async fn parse_resource<T: DeserializeOwned>(kind: &str, response: Response) -> Result<T> {
    let text = response.text().await?;
    let payload = Payload::parse(kind, &text)?;
    Ok(payload.extract(kind)?)
}

/// Decode a list response. The body must be a JSON array and every element an
/// object of `kind`; the first bad element fails the whole list.
async fn parse_list<T: DeserializeOwned>(kind: &str, response: Response) -> Result<Vec<T>> {
    let text = response.text().await?;
    let value: Value = serde_json::from_str(&text).map_err(EventError::from)?;
    let items = match value {
        Value::Array(items) => items,
        _ => {
            return Err(EventError::malformed(kind, "expected a JSON array of objects").into());
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            Payload::normalize(kind, item)
                .and_then(|payload| payload.extract(kind))
                .map_err(|e| match e {
                    EventError::MalformedPayload { event_type, reason } => {
                        EventError::MalformedPayload {
                            event_type,
                            reason: format!("element {index}: {reason}"),
                        }
                    }
                    other => other,
                })
                .map_err(AriError::from)
        })
        .collect()
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// ARI error bodies are `{"message": "..."}`; fall back to the raw text.
async fn error_message(response: Response) -> String {
    message_from_body(response.text().await)
}

/// An unreadable body still produces a message naming the read failure.
fn message_from_body<E: std::fmt::Display>(body: std::result::Result<String, E>) -> String {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            debug!(error = %e, "Failed to read ARI error body");
            return format!("error body unreadable: {e}");
        }
    };
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.message,
        Err(_) => body,
    }
}

/// Percent-encode one path segment (recording names may contain `/`).
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
