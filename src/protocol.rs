//! JSON payloads shared by the HTTP surfaces and the replication client.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body of client writes and leader-to-follower replication calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValuePayload {
    pub value: String,
}

/// Leader response to a quorate write.
#[derive(Debug, Serialize, Deserialize)]
pub struct WriteAck {
    pub status: String,
    /// Acknowledgments observed when the write resolved. Says how many
    /// followers confirmed, never which ones.
    pub replicated_to: usize,
}

impl WriteAck {
    pub fn ok(replicated_to: usize) -> Self {
        Self {
            status: "ok".to_string(),
            replicated_to,
        }
    }
}

/// Follower response to an applied replication call.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyAck {
    pub status: String,
}

impl ApplyAck {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Successful read response.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

/// Error body for every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// `/health` response. Quorum and follower list are leader-only fields.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthReport {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_quorum: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<Vec<String>>,
    pub ok: bool,
}

/// `/debug/store` response: a node's full store contents.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreDump {
    pub role: String,
    pub store: BTreeMap<String, String>,
}
