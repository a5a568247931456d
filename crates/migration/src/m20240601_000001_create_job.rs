//! Create `job` table.
//!
//! One row per posting. Image columns hold stored upload filenames;
//! `created_at` is filled by the database on insert.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(pk_auto(Job::Id))
                    .col(string_len(Job::Title, 255).not_null())
                    .col(text(Job::Description).not_null())
                    .col(string_len(Job::PublisherPosition, 255).not_null())
                    .col(string_len(Job::BusinessName, 255).not_null())
                    .col(string_len(Job::BusinessSector, 255).not_null())
                    .col(ColumnDef::new(Job::JobType).string_len(64).null())
                    .col(ColumnDef::new(Job::Salary).text().null())
                    .col(ColumnDef::new(Job::Benefits).text().null())
                    .col(ColumnDef::new(Job::PublisherName).string_len(255).null())
                    .col(ColumnDef::new(Job::ContactInfo).text().null())
                    .col(string_len(Job::ThumbnailImage, 255).not_null())
                    .col(text(Job::AdditionalImages).not_null())
                    .col(
                        timestamp_with_time_zone(Job::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Job::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Job {
    Table,
    Id,
    Title,
    Description,
    PublisherPosition,
    BusinessName,
    BusinessSector,
    JobType,
    Salary,
    Benefits,
    PublisherName,
    ContactInfo,
    ThumbnailImage,
    AdditionalImages,
    CreatedAt,
}
