use axum::{
    extract::{multipart::MultipartError, rejection::QueryRejection, Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use models::job::{JobQuery, Model};
use serde::Serialize;
use service::jobs::domain::{ensure_image_count, CreateJobInput, JobForm};
use service::storage::PendingFile;
use tracing::{debug, info};

use crate::errors::JsonApiError;
use crate::state::ServerState;

/// Multipart part name carrying image files.
pub const IMAGES_FIELD: &str = "images";

#[derive(Debug, Serialize)]
pub struct CreatedJob {
    pub id: i32,
    pub message: &'static str,
}

fn multipart_err(e: MultipartError) -> JsonApiError {
    JsonApiError::new(e.status(), "Invalid multipart body", Some(e.body_text()))
}

#[utoipa::path(
    post, path = "/api/jobs", tag = "jobs",
    request_body(content = crate::openapi::CreateJobFormDoc, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Job created", body = crate::openapi::CreatedJobDoc),
        (status = 400, description = "Missing field or bad image count"),
        (status = 500, description = "Error creating job")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<CreatedJob>), JsonApiError> {
    let max_images = state.jobs.max_images();
    let mut form = JobForm::default();
    let mut files: Vec<PendingFile> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_err)? {
        let name = field.name().unwrap_or_default().to_string();
        if name == IMAGES_FIELD {
            let original_name = field.file_name().map(str::to_string);
            let bytes = field.bytes().await.map_err(multipart_err)?;
            // an untouched file input posts a nameless, empty part
            if original_name.as_deref().unwrap_or_default().is_empty() && bytes.is_empty() {
                debug!("skipping empty image part");
                continue;
            }
            if files.len() >= max_images {
                return Err(JsonApiError::bad_request(format!("Too many images (max {max_images})")));
            }
            state
                .uploads
                .check_size(bytes.len())
                .map_err(|e| JsonApiError::from_service(e, "Error creating job"))?;
            files.push(PendingFile { original_name, bytes: bytes.to_vec() });
        } else if field.file_name().is_some() {
            return Err(JsonApiError::bad_request(format!("Unexpected file field: {name}")));
        } else {
            let value = field.text().await.map_err(multipart_err)?;
            if !form.set(&name, value) {
                debug!(field = %name, "ignoring unknown form field");
            }
        }
    }

    ensure_image_count(files.len(), max_images)
        .map_err(|e| JsonApiError::from_service(e, "Error creating job"))?;
    let fields = form
        .validate()
        .map_err(|e| JsonApiError::from_service(e, "Error creating job"))?;

    let images = state
        .uploads
        .save_all(&files)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error creating job"))?;
    let job = state
        .jobs
        .create(CreateJobInput { fields, images })
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error creating job"))?;

    Ok((StatusCode::CREATED, Json(CreatedJob { id: job.id, message: "Job created successfully" })))
}

#[utoipa::path(
    get, path = "/api/jobs", tag = "jobs",
    params(crate::openapi::JobListParams),
    responses(
        (status = 200, description = "Jobs, newest first", body = [crate::openapi::JobDoc]),
        (status = 400, description = "Malformed query string"),
        (status = 500, description = "Error fetching jobs")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<JobQuery>, QueryRejection>,
) -> Result<Json<Vec<Model>>, JsonApiError> {
    let Query(query) = query.map_err(|e| JsonApiError::bad_request(e.body_text()))?;
    let jobs = state
        .jobs
        .list(&query)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error fetching jobs"))?;
    info!(count = jobs.len(), "list jobs");
    Ok(Json(jobs))
}

#[utoipa::path(
    get, path = "/api/jobs/{id}", tag = "jobs",
    params(("id" = i32, Path, description = "Job identifier")),
    responses(
        (status = 200, description = "The job", body = crate::openapi::JobDoc),
        (status = 404, description = "Job not found"),
        (status = 500, description = "Error fetching job")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Model>, JsonApiError> {
    state
        .jobs
        .get_by_path(&id)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Error fetching job"))
}
