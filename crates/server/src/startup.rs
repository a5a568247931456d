use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use configs::AppConfig;
use service::{
    jobs::{repo::seaorm::SeaOrmJobRepository, JobService},
    runtime,
    storage::UploadStore,
};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Wire the SeaORM-backed job service and the upload store into router state.
pub fn build_state(cfg: &AppConfig, db: sea_orm::DatabaseConnection) -> ServerState {
    let repo = Arc::new(SeaOrmJobRepository::new(db));
    ServerState {
        jobs: Arc::new(JobService::new(repo, cfg.uploads.max_files)),
        uploads: Arc::new(UploadStore::new(&cfg.uploads.dir, cfg.uploads.max_file_bytes)),
        body_limit: cfg.uploads.body_limit(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C; shutdown only on process kill");
        std::future::pending::<()>().await;
    }
    info!(service = "server", event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: serve a loaded configuration until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    serve(cfg, shutdown_signal()).await
}

/// Prepare storage and database, then serve until `shutdown` resolves.
pub async fn serve<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    runtime::ensure_env(&cfg.uploads.dir)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!(service = "server", event = "migrations_applied", "database schema up to date");
    }

    let app: Router = routes::build_router(build_state(&cfg, db), build_cors());

    let listener = TcpListener::bind(cfg.server.bind_addr())
        .await
        .map_err(|e| StartupError::Runtime(format!("bind {}: {e}", cfg.server.bind_addr())))?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, upload_dir = %cfg.uploads.dir, "job board listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!(service = "server", event = "stopped", "server stopped");
    Ok(())
}
