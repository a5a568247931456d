//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so binaries can prepare the upload
//! directory through the service crate.

/// Ensure the upload directory exists before the server accepts requests.
pub async fn ensure_env(upload_dir: &str) -> anyhow::Result<()> {
    common::env::ensure_upload_dir(upload_dir).await
}
