use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use semisync_kv::{
    cli::{Cli, Command, FollowerArgs, LeaderArgs},
    coordinator::WriteCoordinator,
    server,
    store::KvStore,
};

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Leader(args) => run_leader(args).await,
        Command::Follower(args) => run_follower(args).await,
    }
}

async fn run_leader(args: LeaderArgs) -> Result<()> {
    let config = args.replication_config()?;
    info!(
        followers = config.follower_count(),
        write_quorum = config.write_quorum,
        "starting leader"
    );

    let store = Arc::new(KvStore::new());
    let coordinator = Arc::new(WriteCoordinator::new(store, config)?);
    let app = server::leader_router(coordinator);

    let listener = TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("failed to bind {}", args.listen))?;
    info!("leader listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await.context("leader server exited")
}

async fn run_follower(args: FollowerArgs) -> Result<()> {
    let store = Arc::new(KvStore::new());
    let app = server::follower_router(store);

    let listener = TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("failed to bind {}", args.listen))?;
    info!("follower listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await.context("follower server exited")
}
