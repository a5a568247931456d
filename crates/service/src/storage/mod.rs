//! File storage for uploaded job images.

pub mod uploads;

pub use uploads::{PendingFile, UploadStore};
