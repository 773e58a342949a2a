//! Leader-side write path.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use crate::config::ReplicationConfig;
use crate::quorum::{self, WriteOutcome};
use crate::replica::ReplicaClient;
use crate::store::KvStore;

/// Orchestrates one write: local apply, concurrent replication, quorum
/// outcome. Reads are served from the local store without touching the
/// followers.
///
/// The configuration was validated at startup, so the coordinator never
/// re-checks W per request.
pub struct WriteCoordinator {
    store: Arc<KvStore>,
    config: Arc<ReplicationConfig>,
    replicas: ReplicaClient,
}

impl WriteCoordinator {
    pub fn new(store: Arc<KvStore>, config: ReplicationConfig) -> Result<Self> {
        let replicas = ReplicaClient::new(config.replication_timeout)?;
        Ok(Self {
            store,
            config: Arc::new(config),
            replicas,
        })
    }

    pub fn config(&self) -> &ReplicationConfig {
        &self.config
    }

    pub fn store(&self) -> &KvStore {
        &self.store
    }

    /// Applies a write locally, then replicates it to the followers.
    ///
    /// The local apply always happens before any follower is contacted and
    /// is never rolled back: on a quorum failure the leader keeps the value
    /// even though the followers may not have it. The outcome carries an
    /// acknowledgment count, never which followers acknowledged.
    pub async fn write(&self, key: &str, value: &str) -> WriteOutcome {
        self.store.put(key.to_string(), value.to_string());

        let outcome = quorum::replicate_write(&self.config, &self.replicas, key, value).await;
        match outcome {
            WriteOutcome::Quorate { acked } => {
                debug!(key, acked, "write reached quorum");
            }
            WriteOutcome::QuorumNotReached { acked } => {
                warn!(
                    key,
                    acked,
                    required = self.config.write_quorum,
                    "write missed quorum; local value retained"
                );
            }
        }
        outcome
    }

    /// Reads the leader's current value for `key`.
    pub fn read(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }
}
