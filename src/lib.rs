//! Single-leader key-value store with semi-synchronous quorum replication.
//!
//! One binary runs in two modes: a leader that accepts client writes and
//! fans each one out to a fixed set of followers, and a follower that only
//! applies writes forwarded by the leader. The leader answers the client as
//! soon as a configurable number of followers (the write quorum W) have
//! acknowledged, or fails the write when a global deadline passes first.
//! Replication calls that outlive the response are deliberately left
//! running; their late applies are what make the W < N consistency gap
//! observable. Each module focuses on a concrete responsibility:
//!
//! - [`cli`] parses the command-line interface for leader and follower modes.
//! - [`config`] holds the immutable replication settings, validated once at
//!   startup.
//! - [`store`] is the in-memory last-write-wins map both roles share.
//! - [`delay`] injects bounded random latency in front of every replication
//!   attempt.
//! - [`replica`] performs a single HTTP round trip to one follower.
//! - [`quorum`] drives the concurrent fan-out and decides quorate/failed.
//! - [`coordinator`] owns the leader write path: local apply, replicate,
//!   respond.
//! - [`server`] exposes both roles' HTTP surfaces via axum routers.
//! - [`protocol`] defines the JSON payloads shared by client and server.
//!
//! Integration tests use this crate directly to run whole clusters on
//! ephemeral ports inside one process.

pub mod cli;
pub mod config;
pub mod coordinator;
pub mod delay;
pub mod protocol;
pub mod quorum;
pub mod replica;
pub mod server;
pub mod store;
