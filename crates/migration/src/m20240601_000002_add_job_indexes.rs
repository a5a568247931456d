use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listing is always ordered newest first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_job_created_at")
                    .table(Job::Table)
                    .col(Job::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Exact-match category filter
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_job_job_type")
                    .table(Job::Table)
                    .col(Job::JobType)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_job_job_type").table(Job::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_job_created_at").table(Job::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Job { Table, JobType, CreatedAt }
