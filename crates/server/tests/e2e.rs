use std::net::SocketAddr;

use migration::MigratorTrait;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::OnceCell;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::{routes, startup};

static MIGRATED: OnceCell<()> = OnceCell::const_new();

struct TestApp {
    base_url: String,
    upload_dir: String,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.upload_dir);
    }
}

async fn start_server() -> anyhow::Result<Option<TestApp>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing or SKIP_DB_TESTS set; skip e2e tests");
        return Ok(None);
    }

    let mut cfg = configs::AppConfig::from_env();
    cfg.uploads.dir = std::env::temp_dir()
        .join(format!("job-board-e2e-{}", Uuid::new_v4()))
        .to_string_lossy()
        .into_owned();
    cfg.normalize_and_validate()?;
    service::runtime::ensure_env(&cfg.uploads.dir).await?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    MIGRATED
        .get_or_try_init(|| async { migration::Migrator::up(&db, None).await })
        .await?;

    let app = routes::build_router(startup::build_state(&cfg, db), CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(Some(TestApp { base_url: format!("http://{}", addr), upload_dir: cfg.uploads.dir }))
}

fn job_form(title: &str, job_type: &str, images: &[(&str, &'static [u8])]) -> Form {
    let mut form = Form::new()
        .text("title", title.to_string())
        .text("description", "End to end posting")
        .text("publisherPosition", "Recruiter")
        .text("businessName", "E2E Corp")
        .text("businessSector", "Testing")
        .text("jobType", job_type.to_string());
    for (name, bytes) in images {
        form = form.part("images", Part::bytes(*bytes).file_name(name.to_string()));
    }
    form
}

#[tokio::test]
async fn e2e_create_list_get() -> anyhow::Result<()> {
    let Some(app) = start_server().await? else { return Ok(()) };
    let client = reqwest::Client::new();
    let marker = Uuid::new_v4().simple().to_string();

    let res = client
        .post(format!("{}/api/jobs", app.base_url))
        .multipart(job_form(&format!("Rust {marker}"), &format!("ft-{marker}"), &[("a.png", b"first".as_slice()), ("b.png", b"second".as_slice())]))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created: Value = res.json().await?;
    assert_eq!(created["message"], "Job created successfully");
    let id = created["id"].as_i64().unwrap();

    let res = client
        .post(format!("{}/api/jobs", app.base_url))
        .multipart(job_form(&format!("Go {marker}"), &format!("pt-{marker}"), &[("c.jpg", b"third".as_slice())]))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let second: Value = res.json().await?;

    let job: Value = client
        .get(format!("{}/api/jobs/{}", app.base_url, id))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(job["title"], format!("Rust {marker}"));
    let thumb = job["thumbnail_image"].as_str().unwrap().to_string();
    assert!(thumb.ends_with(".png"));
    assert_eq!(job["additional_images"].as_str().unwrap().split(',').count(), 1);

    let bytes = client
        .get(format!("{}/uploads/{}", app.base_url, thumb))
        .send()
        .await?
        .bytes()
        .await?;
    assert_eq!(bytes.as_ref(), b"first");

    let listed: Vec<Value> = client
        .get(format!("{}/api/jobs", app.base_url))
        .query(&[("search", marker.as_str())])
        .send()
        .await?
        .json()
        .await?;
    let ids: Vec<i64> = listed.iter().map(|j| j["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![second["id"].as_i64().unwrap(), id]);

    let filtered: Vec<Value> = client
        .get(format!("{}/api/jobs", app.base_url))
        .query(&[("jobType", format!("ft-{marker}"))])
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["id"].as_i64(), Some(id));
    Ok(())
}

#[tokio::test]
async fn e2e_rejects_missing_images_and_unknown_ids() -> anyhow::Result<()> {
    let Some(app) = start_server().await? else { return Ok(()) };
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/jobs", app.base_url))
        .multipart(job_form("No images", "full-time", &[]))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "At least one image is required");

    let res = client.get(format!("{}/api/jobs/{}", app.base_url, i32::MAX)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let res = client.get(format!("{}/api/jobs/not-a-number", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
