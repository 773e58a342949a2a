//! Immutable replication settings for a leader process.
//!
//! Everything here is read once at startup and never changes afterwards; a
//! shape the configuration cannot express (W of zero, W larger than the
//! follower set) is rejected before the process starts serving traffic, so
//! individual writes never have to re-validate it.

use std::time::Duration;

use anyhow::{ensure, Result};

use crate::delay::DelayInjector;

#[derive(Debug, Clone)]
pub struct ReplicationConfig {
    /// Base URLs of every follower, e.g. `http://127.0.0.1:8081`.
    pub followers: Vec<String>,
    /// Acknowledgments required before a write is reported successful.
    pub write_quorum: usize,
    /// Latency injected in front of each replication attempt.
    pub delay: DelayInjector,
    /// Timeout for a single follower call.
    pub replication_timeout: Duration,
    /// Deadline for the whole write, measured from fan-out start.
    pub global_timeout: Duration,
    /// Abort still-running replication tasks once the write has resolved.
    /// Off by default: the surviving stragglers are the experiment.
    pub cancel_on_quorum: bool,
}

impl ReplicationConfig {
    pub fn new(
        followers: Vec<String>,
        write_quorum: usize,
        delay: DelayInjector,
        replication_timeout: Duration,
        global_timeout: Duration,
        cancel_on_quorum: bool,
    ) -> Result<Self> {
        ensure!(!followers.is_empty(), "a leader requires at least one follower");
        ensure!(write_quorum >= 1, "write quorum must be at least 1");
        ensure!(
            write_quorum <= followers.len(),
            "write quorum {} exceeds follower count {}",
            write_quorum,
            followers.len()
        );
        Ok(Self {
            followers,
            write_quorum,
            delay,
            replication_timeout,
            global_timeout,
            cancel_on_quorum,
        })
    }

    pub fn follower_count(&self) -> usize {
        self.followers.len()
    }
}
