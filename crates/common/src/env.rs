//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the listener is bound.

use tracing::warn;

/// Warn when the static client directory is missing. The API still works
/// without it, only the browser client will 404.
pub async fn ensure_static_dir(static_dir: &str) -> bool {
    let present = match tokio::fs::metadata(static_dir).await {
        Ok(meta) => meta.is_dir(),
        Err(_) => false,
    };
    if !present {
        warn!(%static_dir, "static client directory not found; browser client will 404");
    }
    present
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_missing_directory() {
        assert!(!ensure_static_dir("definitely/not/here").await);
    }

    #[tokio::test]
    async fn accepts_existing_directory() {
        let dir = std::env::temp_dir();
        assert!(ensure_static_dir(dir.to_str().unwrap()).await);
    }
}
