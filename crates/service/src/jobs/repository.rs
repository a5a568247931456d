use async_trait::async_trait;
use models::job::{JobQuery, Model, NewJob};

use crate::errors::ServiceError;

/// Persistence boundary for job postings.
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, new: NewJob) -> Result<Model, ServiceError>;
    /// Matching jobs, newest first (ties broken by higher id first).
    async fn list(&self, query: &JobQuery) -> Result<Vec<Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError>;
}

/// Simple in-memory mock repository for tests and local runs without a database
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockJobRepository {
        rows: Mutex<Vec<Model>>,
        fail: bool,
    }

    impl MockJobRepository {
        /// Every call returns a database error.
        pub fn failing() -> Self {
            Self { rows: Mutex::new(Vec::new()), fail: true }
        }

        pub fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.fail {
                return Err(ServiceError::Db("mock repository unavailable".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl JobRepository for MockJobRepository {
        async fn create(&self, new: NewJob) -> Result<Model, ServiceError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let model = Model {
                id: rows.len() as i32 + 1,
                title: new.title,
                description: new.description,
                publisher_position: new.publisher_position,
                business_name: new.business_name,
                business_sector: new.business_sector,
                job_type: new.job_type,
                salary: new.salary,
                benefits: new.benefits,
                publisher_name: new.publisher_name,
                contact_info: new.contact_info,
                thumbnail_image: new.thumbnail_image,
                additional_images: new.additional_images,
                created_at: chrono::Utc::now().into(),
            };
            rows.push(model.clone());
            Ok(model)
        }

        async fn list(&self, query: &JobQuery) -> Result<Vec<Model>, ServiceError> {
            self.check()?;
            let rows = self.rows.lock().unwrap();
            let mut out: Vec<Model> = rows.iter().filter(|m| query.matches(m)).cloned().collect();
            out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            Ok(out)
        }

        async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> {
            self.check()?;
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|m| m.id == id).cloned())
        }
    }
}
