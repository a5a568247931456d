use models::errors::ModelError;
use models::job::{self, JobQuery, Model, NewJob};
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::jobs::repository::JobRepository;

pub struct SeaOrmJobRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmJobRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn repo_err(e: ModelError) -> ServiceError {
    match e {
        ModelError::Db(msg) => ServiceError::Db(msg),
        other => ServiceError::Model(other),
    }
}

#[async_trait::async_trait]
impl JobRepository for SeaOrmJobRepository {
    async fn create(&self, new: NewJob) -> Result<Model, ServiceError> {
        job::create(&self.db, new).await.map_err(repo_err)
    }

    async fn list(&self, query: &JobQuery) -> Result<Vec<Model>, ServiceError> {
        job::list(&self.db, query).await.map_err(repo_err)
    }

    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        job::find(&self.db, id).await.map_err(repo_err)
    }
}
