//! Environment/runtime helpers
//!
//! Sanity checks run once at startup before the listener is bound.

use tracing::{info, warn};

/// Warn when no config file is present; the server then runs on env vars.
pub async fn ensure_env(config_path: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(config_path).await.is_err() {
        warn!(%config_path, "config file not found; falling back to environment variables");
        return Ok(());
    }
    info!(%config_path, "using config file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_config_is_not_an_error() {
        assert!(ensure_env("/nonexistent/inventory-config.toml").await.is_ok());
    }
}
