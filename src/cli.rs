//! Command-line interface for leader and follower modes.
//!
//! Every knob doubles as an environment variable so containerized clusters
//! can configure nodes without rewriting their command lines.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::ReplicationConfig;
use crate::delay::DelayInjector;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the leader: accept client writes and replicate them to followers.
    Leader(LeaderArgs),
    /// Run a follower: apply writes forwarded by the leader.
    Follower(FollowerArgs),
}

#[derive(Args, Debug, Clone)]
pub struct LeaderArgs {
    /// Socket address to bind. Use port 0 for an ephemeral port.
    #[arg(long, env = "LISTEN_ADDR", default_value = "127.0.0.1:8080")]
    pub listen: SocketAddr,

    /// Follower base URL, e.g. http://127.0.0.1:8081. Repeat the flag or
    /// comma-separate to list the whole replica set.
    #[arg(long = "follower", env = "FOLLOWERS", value_delimiter = ',', required = true)]
    pub followers: Vec<String>,

    /// Acknowledgments required before a write is reported successful.
    #[arg(long, env = "WRITE_QUORUM", default_value_t = 1)]
    pub write_quorum: usize,

    /// Lower bound of the injected replication delay, in milliseconds.
    #[arg(long, env = "MIN_DELAY_MS", default_value_t = 0)]
    pub min_delay_ms: u64,

    /// Upper bound of the injected replication delay, in milliseconds.
    #[arg(long, env = "MAX_DELAY_MS", default_value_t = 1000)]
    pub max_delay_ms: u64,

    /// Timeout for a single follower call, in milliseconds.
    #[arg(long, env = "REPLICATION_TIMEOUT_MS", default_value_t = 2000)]
    pub replication_timeout_ms: u64,

    /// Deadline for the whole write, in milliseconds.
    #[arg(long, env = "GLOBAL_TIMEOUT_MS", default_value_t = 5000)]
    pub global_timeout_ms: u64,

    /// Abort still-running replication tasks once a write has resolved.
    /// Leaving this off preserves the late background applies the W < N
    /// experiment measures.
    #[arg(long, env = "CANCEL_ON_QUORUM")]
    pub cancel_on_quorum: bool,
}

impl LeaderArgs {
    /// Validates the arguments into the immutable replication settings.
    pub fn replication_config(&self) -> Result<ReplicationConfig> {
        let delay = DelayInjector::new(self.min_delay_ms, self.max_delay_ms)?;
        ReplicationConfig::new(
            self.followers.clone(),
            self.write_quorum,
            delay,
            Duration::from_millis(self.replication_timeout_ms),
            Duration::from_millis(self.global_timeout_ms),
            self.cancel_on_quorum,
        )
    }
}

#[derive(Args, Debug, Clone)]
pub struct FollowerArgs {
    /// Socket address to bind. Use port 0 for an ephemeral port.
    #[arg(long, env = "LISTEN_ADDR", default_value = "127.0.0.1:8081")]
    pub listen: SocketAddr,
}
