//! One replication attempt against one follower.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use crate::protocol::ValuePayload;

/// How a single replication attempt ended.
///
/// These are values, not errors: the aggregator only counts them, and the
/// client never sees them individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplicaOutcome {
    /// The follower applied the write and acknowledged in time.
    Acked,
    /// No acknowledgment within the per-call timeout.
    TimedOut,
    /// Connection refused/reset, or the follower answered with a
    /// non-success status.
    Unavailable,
}

/// Thin HTTP client for the follower apply endpoint.
///
/// One attempt per write per replica, never retried: the replication
/// protocol carries no idempotency keys, so a retry could double-apply
/// behind a late first attempt.
#[derive(Clone)]
pub struct ReplicaClient {
    http: reqwest::Client,
    call_timeout: Duration,
}

impl ReplicaClient {
    pub fn new(call_timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("failed to construct replication HTTP client")?;
        Ok(Self { http, call_timeout })
    }

    /// Sends one replicated write to `follower` and classifies the result.
    pub async fn send(&self, follower: &str, key: &str, value: &str) -> ReplicaOutcome {
        let url = format!("{}/replicate/{}", follower.trim_end_matches('/'), key);
        let payload = ValuePayload {
            value: value.to_string(),
        };
        match self
            .http
            .post(&url)
            .timeout(self.call_timeout)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => ReplicaOutcome::Acked,
            Ok(response) => {
                debug!(%url, status = %response.status(), "replica rejected write");
                ReplicaOutcome::Unavailable
            }
            Err(err) if err.is_timeout() => ReplicaOutcome::TimedOut,
            Err(err) => {
                debug!(%url, error = %err, "replica unreachable");
                ReplicaOutcome::Unavailable
            }
        }
    }
}
