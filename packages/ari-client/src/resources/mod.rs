//! Resource snapshots returned by the server.
//!
//! These are plain values describing server-side state at the moment they were
//! received. They hold no connection to the server.

mod bridge;
mod channel;
mod endpoint;
mod recording;

pub use bridge::Bridge;
pub use channel::{CallerId, Channel, DialplanCep};
pub use endpoint::{Endpoint, Peer};
pub use recording::{LiveRecording, RecordingState, StoredRecording};
