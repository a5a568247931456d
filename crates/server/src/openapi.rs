use utoipa::{IntoParams, OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String }

/// Multipart form accepted by `POST /api/jobs`.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateJobFormDoc {
    pub title: String,
    pub description: String,
    pub publisher_position: String,
    pub business_name: String,
    pub business_sector: String,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub benefits: Option<String>,
    pub publisher_name: Option<String>,
    pub contact_info: Option<String>,
    /// 1 to 8 image files; the first becomes the thumbnail.
    #[schema(value_type = Vec<String>, format = Binary)]
    pub images: Vec<Vec<u8>>,
}

#[derive(ToSchema)]
pub struct CreatedJobDoc { pub id: i32, pub message: String }

/// A stored job, keyed by column name.
#[derive(ToSchema)]
pub struct JobDoc {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub publisher_position: String,
    pub business_name: String,
    pub business_sector: String,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub benefits: Option<String>,
    pub publisher_name: Option<String>,
    pub contact_info: Option<String>,
    pub thumbnail_image: String,
    /// Comma-separated stored filenames, empty when there is only a thumbnail.
    pub additional_images: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

#[derive(IntoParams)]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct JobListParams {
    /// Substring of title, description or publisher position (case-sensitive).
    pub search: Option<String>,
    /// Exact job type.
    pub job_type: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::jobs::create,
        crate::routes::jobs::list,
        crate::routes::jobs::get,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            CreateJobFormDoc,
            CreatedJobDoc,
            JobDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "jobs")
    )
)]
pub struct ApiDoc;
