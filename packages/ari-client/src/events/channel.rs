use serde::{Deserialize, Serialize};

use crate::cause::HangupCause;
use crate::resources::Channel;

/// A channel has been created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelCreated {
    pub channel: Channel,
}

/// A channel has been destroyed.
///
/// `cause` and `cause_txt` are kept exactly as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelDestroyed {
    /// Integer representation of the cause of the hangup
    pub cause: i32,
    /// Text representation of the cause of the hangup
    pub cause_txt: String,
    pub channel: Channel,
}

impl ChannelDestroyed {
    /// Table entry for `cause`, if the code is a known one.
    pub fn hangup_cause(&self) -> Option<HangupCause> {
        HangupCause::from_code(self.cause)
    }
}

/// A hangup was requested on a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelHangupRequest {
    pub channel: Channel,
    pub cause: Option<i32>,
    /// Whether the hangup request was a soft hangup request
    pub soft: Option<bool>,
}

/// A channel entered a Stasis application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StasisStart {
    pub channel: Channel,
    /// Arguments given to the Stasis dialplan application
    #[serde(default)]
    pub args: Vec<String>,
    pub replace_channel: Option<Channel>,
}

/// A channel left a Stasis application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StasisEnd {
    pub channel: Channel,
}
