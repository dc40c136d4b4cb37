//! Adapter status values.
//!
//! The adapter never stores its status. A status only exists as the name
//! of an emitted event, together with a payload identifying the instance.

use serde::{Deserialize, Serialize};

/// Status announced to the host after a healthcheck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdapterStatus {
    /// The last healthcheck reached the instance and got usable data.
    Online,
    /// The last healthcheck failed for any reason.
    Offline,
}

impl AdapterStatus {
    /// Event name as seen by the host.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
        }
    }
}

impl std::fmt::Display for AdapterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a status event: `{id: <adapter instance id>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub id: String,
}
