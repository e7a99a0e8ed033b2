use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

/// Open the bounded connection pool described by `cfg`.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    // every SQLite memory connection is its own empty database
    let max = if cfg.is_sqlite_memory() { 1 } else { cfg.max_connections };
    let mut opts = ConnectOptions::new(cfg.connection_url());
    opts.max_connections(max)
        .min_connections(cfg.min_connections.min(max))
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);

    let db = Database::connect(opts).await?;
    info!(backend = ?db.get_database_backend(), max_connections = max, "database pool ready");
    Ok(db)
}

/// Throwaway SQLite database living in memory; used by tests and quick local runs.
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    connect(&cfg).await
}
