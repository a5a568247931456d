use std::sync::Arc;

use models::job::{derive_image_fields, JobQuery, Model};
use tracing::{debug, info, instrument};

use super::domain::{ensure_image_count, parse_job_id, CreateJobInput};
use super::repository::JobRepository;
use crate::errors::ServiceError;

/// Job business service independent of web framework
pub struct JobService {
    repo: Arc<dyn JobRepository>,
    max_images: usize,
}

impl JobService {
    pub fn new(repo: Arc<dyn JobRepository>, max_images: usize) -> Self { Self { repo, max_images } }

    pub fn max_images(&self) -> usize { self.max_images }

    /// Persist a posting whose images are already stored.
    ///
    /// The first image name becomes the thumbnail; the rest are packed
    /// into `additional_images` in upload order.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::jobs::{JobService, domain::{CreateJobInput, JobForm}, repository::mock::MockJobRepository};
    /// let svc = JobService::new(Arc::new(MockJobRepository::default()), 8);
    /// let mut form = JobForm::default();
    /// for (k, v) in [("title", "T"), ("description", "D"), ("publisherPosition", "P"), ("businessName", "B"), ("businessSector", "S")] {
    ///     form.set(k, v.into());
    /// }
    /// let input = CreateJobInput { fields: form.validate().unwrap(), images: vec!["a.png".into(), "b.png".into()] };
    /// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// let job = rt.block_on(svc.create(input)).unwrap();
    /// assert_eq!(job.thumbnail_image, "a.png");
    /// assert_eq!(job.additional_images, "b.png");
    /// ```
    #[instrument(skip(self, input), fields(images = input.images.len()))]
    pub async fn create(&self, input: CreateJobInput) -> Result<Model, ServiceError> {
        ensure_image_count(input.images.len(), self.max_images)?;
        let images = derive_image_fields(&input.images)?;
        let job = self.repo.create(input.fields.into_new_job(images)).await?;
        info!(service = "jobs", event = "job_created", job_id = job.id, "job created");
        Ok(job)
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: &JobQuery) -> Result<Vec<Model>, ServiceError> {
        let jobs = self.repo.list(query).await?;
        debug!(service = "jobs", count = jobs.len(), "jobs listed");
        Ok(jobs)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Model, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Job"))
    }

    /// Lookup by raw path segment; a segment that is not an id is simply not found.
    pub async fn get_by_path(&self, raw: &str) -> Result<Model, ServiceError> {
        match parse_job_id(raw) {
            Some(id) => self.get(id).await,
            None => Err(ServiceError::not_found("Job")),
        }
    }
}
