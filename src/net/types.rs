//! Wire DTOs for the platform REST API.
//!
//! DESIGN
//! ======
//! Field names follow the server's camelCase JSON. Optional fields default so
//! older masters that omit them still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Cluster / platform metadata returned by `GET /info`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformInfo {
    pub cluster_id: String,
    #[serde(default)]
    pub cluster_name: String,
    /// Version the platform expects its web UI to be running.
    pub version: String,
    #[serde(default)]
    pub telemetry: TelemetryInfo,
}

/// Server-supplied analytics settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryInfo {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub segment_key: Option<String>,
}

impl TelemetryInfo {
    /// The analytics key to load with, if telemetry is on and a key is present.
    pub fn active_key(&self) -> Option<&str> {
        if !self.enabled {
            return None;
        }
        self.segment_key.as_deref().filter(|key| !key.is_empty())
    }
}

/// A platform user account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub admin: bool,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

/// A compute agent and its slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    #[serde(default)]
    pub resource_pool: String,
    #[serde(default)]
    pub slots: Vec<Slot>,
}

/// One schedulable device on an agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    #[serde(default)]
    pub enabled: bool,
    /// Container currently occupying the slot, if any.
    #[serde(default)]
    pub container: Option<Container>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    #[serde(default)]
    pub state: String,
}

/// Experiment summary used by list views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experiment {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub state: String,
    #[serde(default)]
    pub archived: bool,
}

/// Notebook, shell, tensorboard, or generic command task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandTask {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub state: String,
    #[serde(default)]
    pub username: String,
}

/// Credentials posted to `POST /login`.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
