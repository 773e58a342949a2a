//! Concurrent fan-out and quorum aggregation for one write.
//!
//! All N replication tasks are spawned up front and report into a shared
//! channel. The aggregator reads from that channel until W successes or the
//! global deadline, then stops reading; it never terminates the producers.
//! Tasks that finish after resolution still mutate their follower's store,
//! which is exactly the inconsistency the W < N experiment observes.

use tokio::sync::mpsc;
use tokio::time::{sleep, timeout_at, Instant};
use tracing::debug;

use crate::config::ReplicationConfig;
use crate::replica::{ReplicaClient, ReplicaOutcome};

/// Aggregate result of one replicated write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// At least `write_quorum` followers acknowledged before the deadline.
    Quorate { acked: usize },
    /// The deadline passed, or every follower reported, with too few
    /// acknowledgments.
    QuorumNotReached { acked: usize },
}

/// Fans a write out to every follower and waits for quorum.
///
/// Each task sleeps its injected delay, performs one replication call, and
/// reports the outcome. The deadline is fixed before the first task starts,
/// so slow fan-out does not extend the write's total allowance.
pub async fn replicate_write(
    config: &ReplicationConfig,
    client: &ReplicaClient,
    key: &str,
    value: &str,
) -> WriteOutcome {
    let deadline = Instant::now() + config.global_timeout;
    let (report_tx, report_rx) = mpsc::channel(config.follower_count());

    let mut tasks = Vec::with_capacity(config.follower_count());
    for follower in &config.followers {
        let delay = config.delay.sample();
        let client = client.clone();
        let follower = follower.clone();
        let key = key.to_string();
        let value = value.to_string();
        let report_tx = report_tx.clone();
        tasks.push(tokio::spawn(async move {
            sleep(delay).await;
            let outcome = client.send(&follower, &key, &value).await;
            debug!(%follower, ?outcome, "replication attempt finished");
            // The aggregator may already have resolved and dropped the
            // receiver; the remote apply happened either way.
            let _ = report_tx.send(outcome).await;
        }));
    }
    drop(report_tx);

    let outcome = await_quorum(report_rx, config.write_quorum, deadline).await;

    if config.cancel_on_quorum {
        for task in &tasks {
            task.abort();
        }
    }

    outcome
}

/// Counts successes from `reports` until quorum or the deadline.
///
/// Failure reports are absorbed without effect on the count; they matter
/// only in that a fully drained channel short of quorum resolves the write
/// failed immediately instead of waiting out the deadline.
async fn await_quorum(
    mut reports: mpsc::Receiver<ReplicaOutcome>,
    write_quorum: usize,
    deadline: Instant,
) -> WriteOutcome {
    let mut acked = 0;
    loop {
        match timeout_at(deadline, reports.recv()).await {
            Ok(Some(ReplicaOutcome::Acked)) => {
                acked += 1;
                if acked >= write_quorum {
                    return WriteOutcome::Quorate { acked };
                }
            }
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => return WriteOutcome::QuorumNotReached { acked },
        }
    }
}
