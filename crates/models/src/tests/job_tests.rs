use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{db::connect, job};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Live database when configured; `None` skips the test.
async fn test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    MIGRATED
        .get_or_try_init(|| async {
            let db = connect().await?;
            Migrator::up(&db, None).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;
    Ok(Some(connect().await?))
}

fn new_job(title: &str, position: &str, job_type: &str, images: &[&str]) -> job::NewJob {
    let names: Vec<String> = images.iter().map(|s| s.to_string()).collect();
    let img = job::derive_image_fields(&names).expect("images");
    job::NewJob {
        title: title.into(),
        description: "Build and run services".into(),
        publisher_position: position.into(),
        business_name: "Acme".into(),
        business_sector: "Software".into(),
        job_type: Some(job_type.into()),
        salary: Some("competitive".into()),
        benefits: None,
        publisher_name: Some("Dana".into()),
        contact_info: Some("jobs@acme.test".into()),
        thumbnail_image: img.thumbnail_image,
        additional_images: img.additional_images,
    }
}

#[tokio::test]
async fn test_create_then_find() -> Result<()> {
    let Some(db) = test_db().await? else { return Ok(()) };
    let kind = format!("kind-{}", Uuid::new_v4());

    let created = job::create(&db, new_job("Backend Engineer", "CTO", &kind, &["a.png", "b.png"])).await?;
    assert!(created.id > 0);
    assert_eq!(created.thumbnail_image, "a.png");
    assert_eq!(created.additional_images, "b.png");

    let found = job::find(&db, created.id).await?.expect("row");
    assert_eq!(found, created);
    assert_eq!(found.benefits, None);

    assert!(job::find(&db, -1).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_list_filters_and_order() -> Result<()> {
    let Some(db) = test_db().await? else { return Ok(()) };
    let full = format!("full-{}", Uuid::new_v4());
    let part = format!("part-{}", Uuid::new_v4());
    let token = Uuid::new_v4().simple().to_string();

    let a = job::create(&db, new_job(&format!("Engineer {token}"), "CTO", &full, &["a.png"])).await?;
    let b = job::create(&db, new_job("Designer", &format!("Head {token}"), &part, &["b.png"])).await?;
    let c = job::create(&db, new_job("Writer", "Editor", &full, &["c.png"])).await?;

    let only_full = job::list(&db, &job::JobQuery { search: None, job_type: Some(full.clone()) }).await?;
    let ids: Vec<i32> = only_full.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![c.id, a.id]);

    let searched = job::list(&db, &job::JobQuery { search: Some(token.clone()), job_type: None }).await?;
    let ids: Vec<i32> = searched.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);

    let both = job::list(&db, &job::JobQuery { search: Some(token.clone()), job_type: Some(part.clone()) }).await?;
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].id, b.id);

    // case-sensitive
    let upper = job::list(&db, &job::JobQuery { search: Some(token.to_uppercase()), job_type: None }).await?;
    assert!(upper.iter().all(|m| m.id != a.id && m.id != b.id));

    let all = job::list(&db, &job::JobQuery::default()).await?;
    assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    Ok(())
}

#[tokio::test]
async fn test_like_wildcards_are_literal() -> Result<()> {
    let Some(db) = test_db().await? else { return Ok(()) };
    let kind = format!("wild-{}", Uuid::new_v4());
    let _ = job::create(&db, new_job("Senior dev", "CTO", &kind, &["a.png"])).await?;

    let res = job::list(&db, &job::JobQuery { search: Some("%".into()), job_type: Some(kind.clone()) }).await?;
    assert!(res.is_empty());
    let res = job::list(&db, &job::JobQuery { search: Some("S_nior".into()), job_type: Some(kind) }).await?;
    assert!(res.is_empty());
    Ok(())
}
