//! HTTP surfaces for both roles.
//!
//! The leader serves client writes and reads; followers serve the apply
//! endpoint the leader replicates through. Both expose `/health` for
//! orchestration probes and `/debug/store` so an external checker can
//! compare node states after an experiment.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::coordinator::WriteCoordinator;
use crate::protocol::{ApplyAck, ErrorBody, HealthReport, KeyValue, StoreDump, ValuePayload, WriteAck};
use crate::quorum::WriteOutcome;
use crate::store::KvStore;

/// Routes served by the leader process.
pub fn leader_router(coordinator: Arc<WriteCoordinator>) -> Router {
    Router::new()
        .route("/kv/:key", put(leader_put).get(leader_get))
        .route("/health", get(leader_health))
        .route("/debug/store", get(leader_debug_store))
        .layer(TraceLayer::new_for_http())
        .with_state(coordinator)
}

/// Routes served by a follower process.
pub fn follower_router(store: Arc<KvStore>) -> Router {
    Router::new()
        .route("/replicate/:key", post(follower_replicate))
        .route("/kv/:key", put(follower_put).get(follower_get))
        .route("/health", get(follower_health))
        .route("/debug/store", get(follower_debug_store))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            detail: "Key not found".to_string(),
        }),
    )
}

async fn leader_put(
    State(coordinator): State<Arc<WriteCoordinator>>,
    Path(key): Path<String>,
    Json(payload): Json<ValuePayload>,
) -> Result<Json<WriteAck>, (StatusCode, Json<ErrorBody>)> {
    match coordinator.write(&key, &payload.value).await {
        WriteOutcome::Quorate { acked } => Ok(Json(WriteAck::ok(acked))),
        WriteOutcome::QuorumNotReached { acked } => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                detail: format!(
                    "Replication quorum not reached (successes={}, required={})",
                    acked,
                    coordinator.config().write_quorum
                ),
            }),
        )),
    }
}

async fn leader_get(
    State(coordinator): State<Arc<WriteCoordinator>>,
    Path(key): Path<String>,
) -> Result<Json<KeyValue>, (StatusCode, Json<ErrorBody>)> {
    match coordinator.read(&key) {
        Some(value) => Ok(Json(KeyValue { key, value })),
        None => Err(not_found()),
    }
}

async fn leader_health(State(coordinator): State<Arc<WriteCoordinator>>) -> Json<HealthReport> {
    let config = coordinator.config();
    Json(HealthReport {
        role: "leader".to_string(),
        write_quorum: Some(config.write_quorum),
        followers: Some(config.followers.clone()),
        ok: true,
    })
}

async fn leader_debug_store(
    State(coordinator): State<Arc<WriteCoordinator>>,
) -> Json<StoreDump> {
    Json(StoreDump {
        role: "leader".to_string(),
        store: coordinator.store().snapshot(),
    })
}

/// Applies one replicated write, unconditionally.
///
/// No check against the stored value and no ordering check against other
/// in-flight applies for the same key: two racing applies resolve by
/// whichever finishes last, regardless of the order the leader sent them.
async fn follower_replicate(
    State(store): State<Arc<KvStore>>,
    Path(key): Path<String>,
    Json(payload): Json<ValuePayload>,
) -> Json<ApplyAck> {
    store.put(key, payload.value);
    Json(ApplyAck::ok())
}

async fn follower_put() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            detail: "Writes allowed only on leader".to_string(),
        }),
    )
}

async fn follower_get(
    State(store): State<Arc<KvStore>>,
    Path(key): Path<String>,
) -> Result<Json<KeyValue>, (StatusCode, Json<ErrorBody>)> {
    match store.get(&key) {
        Some(value) => Ok(Json(KeyValue { key, value })),
        None => Err(not_found()),
    }
}

async fn follower_health() -> Json<HealthReport> {
    Json(HealthReport {
        role: "follower".to_string(),
        write_quorum: None,
        followers: None,
        ok: true,
    })
}

async fn follower_debug_store(State(store): State<Arc<KvStore>>) -> Json<StoreDump> {
    Json(StoreDump {
        role: "follower".to_string(),
        store: store.snapshot(),
    })
}
