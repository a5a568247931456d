//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::{info, warn};

/// Create the upload directory if missing and make sure it is a directory.
pub async fn ensure_upload_dir(dir: &str) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {dir}: {e}"))?;
    let meta = tokio::fs::metadata(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot stat {dir}: {e}"))?;
    if !meta.is_dir() {
        return Err(anyhow::anyhow!("{dir} exists but is not a directory"));
    }
    if meta.permissions().readonly() {
        warn!(%dir, "upload directory is read-only; job creation will fail");
    }
    info!(%dir, "upload directory ready");
    Ok(())
}
