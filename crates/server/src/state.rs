use std::sync::Arc;

use service::jobs::JobService;
use service::storage::UploadStore;

#[derive(Clone)]
pub struct ServerState {
    pub jobs: Arc<JobService>,
    pub uploads: Arc<UploadStore>,
    /// Maximum accepted request body, covering every image plus form fields.
    pub body_limit: usize,
}
