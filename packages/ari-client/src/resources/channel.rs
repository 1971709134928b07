use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller identification attached to a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallerId {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub number: String,
}

/// Current dialplan location of a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialplanCep {
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub exten: String,
    #[serde(default)]
    pub priority: i64,
    pub app_name: Option<String>,
    pub app_data: Option<String>,
}

/// A channel (one leg of a call) on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: Option<String>,
    /// e.g. `Down`, `Ring`, `Up`
    pub state: Option<String>,
    pub caller: Option<CallerId>,
    pub connected: Option<CallerId>,
    pub accountcode: Option<String>,
    pub dialplan: Option<DialplanCep>,
    pub creationtime: Option<String>,
    pub language: Option<String>,
    pub channelvars: Option<Map<String, Value>>,
}

impl Channel {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Look up a channel variable included in the snapshot.
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.channelvars
            .as_ref()
            .and_then(|vars| vars.get(name))
            .and_then(Value::as_str)
    }
}
