use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::io::AsyncWriteExt;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::ServiceError;

const MAX_EXT_LEN: usize = 10;

/// An uploaded file buffered in memory, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub original_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// Writes uploaded images into a single directory under server-assigned names.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    max_file_bytes: usize,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>, max_file_bytes: usize) -> Self {
        Self { dir: dir.into(), max_file_bytes }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    pub fn max_file_bytes(&self) -> usize { self.max_file_bytes }

    pub fn check_size(&self, len: usize) -> Result<(), ServiceError> {
        if len > self.max_file_bytes {
            return Err(ServiceError::Validation(format!(
                "file exceeds {} bytes",
                self.max_file_bytes
            )));
        }
        Ok(())
    }

    /// `<unix-millis>-<uuid>` plus the client's extension when it is short and alphanumeric.
    /// The result never contains a path separator or a comma.
    pub fn assign_name(original: Option<&str>) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let id = Uuid::new_v4().simple();
        match original.and_then(extension_of) {
            Some(ext) => format!("{millis}-{id}.{ext}"),
            None => format!("{millis}-{id}"),
        }
    }

    /// Write one file and return its stored name.
    pub async fn save(&self, file: &PendingFile) -> Result<String, ServiceError> {
        self.check_size(file.bytes.len())?;
        let name = Self::assign_name(file.original_name.as_deref());
        let path = self.dir.join(&name);
        let storage_err = |e: std::io::Error| {
            error!(path = %path.display(), error = %e, "upload write failed");
            ServiceError::Storage(e.to_string())
        };
        let mut f = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(storage_err)?;
        f.write_all(&file.bytes).await.map_err(storage_err)?;
        f.sync_all().await.map_err(storage_err)?;
        Ok(name)
    }

    /// Write every file in order. Stops at the first failure; files already
    /// written stay on disk.
    pub async fn save_all(&self, files: &[PendingFile]) -> Result<Vec<String>, ServiceError> {
        for f in files {
            self.check_size(f.bytes.len())?;
        }
        let mut names = Vec::with_capacity(files.len());
        for f in files {
            names.push(self.save(f).await?);
        }
        info!(service = "uploads", count = names.len(), "images stored");
        Ok(names)
    }
}

fn extension_of(original: &str) -> Option<String> {
    let ext = Path::new(original).extension()?.to_str()?;
    if ext.is_empty() || ext.len() > MAX_EXT_LEN || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
