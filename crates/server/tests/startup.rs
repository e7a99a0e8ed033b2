use std::time::Duration;

use configs::AppConfig;
use tokio::sync::oneshot;

fn test_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.server.host = "127.0.0.1".into();
    cfg.server.port = 0;
    cfg.server.static_dir = "target/no-static-dir".into();
    cfg.database.url = "sqlite::memory:".into();
    cfg
}

#[tokio::test]
async fn stops_cleanly_when_shutdown_is_already_signalled() -> anyhow::Result<()> {
    let res = tokio::time::timeout(Duration::from_secs(10), server::run_until(test_config(), async {})).await?;
    assert!(res.is_ok(), "run_until failed: {:?}", res.err());
    Ok(())
}

#[tokio::test]
async fn serves_until_shutdown_signal_then_returns() -> anyhow::Result<()> {
    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server::run_until(test_config(), async move {
        let _ = rx.await;
    }));

    // bootstrap and bind happen before the signal is awaited
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!handle.is_finished());

    let _ = tx.send(());
    let res = tokio::time::timeout(Duration::from_secs(10), handle).await??;
    assert!(res.is_ok(), "run_until failed: {:?}", res.err());
    Ok(())
}

#[tokio::test]
async fn bad_database_url_fails_before_serving() -> anyhow::Result<()> {
    let mut cfg = test_config();
    cfg.database.url = "sqlite:///definitely/not/here/app.db".into();
    let res = tokio::time::timeout(Duration::from_secs(10), server::run_until(cfg, async {})).await?;
    assert!(res.is_err());
    Ok(())
}
