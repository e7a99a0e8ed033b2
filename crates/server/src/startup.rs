use std::future::Future;

use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;

/// Any origin, any method, any header (`Access-Control-Allow-Origin: *`).
pub fn build_cors() -> CorsLayer {
    CorsLayer::permissive()
}

/// Wait for Ctrl+C.
pub async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // no signal handler available: run until the process is killed
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: bootstrap the store and serve until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    run_until(cfg, shutdown_signal()).await
}

/// Open the pool, bootstrap the schema, serve until `shutdown` resolves,
/// then drain in-flight requests and close the pool.
pub async fn run_until<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    common::env::ensure_static_dir(&cfg.server.static_dir).await;

    let db = models::db::connect(&cfg.database).await?;
    service::bootstrap::init_schema(&db).await?;

    let app = routes::build_router(AppState::new(db.clone()), &cfg.server.static_dir, build_cors());

    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, static_dir = %cfg.server.static_dir, "server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    db.close().await?;
    info!("database pool closed");
    Ok(())
}
