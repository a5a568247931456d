//! Service layer for job postings on top of `models`.
//! - Keeps request-shape checks and image rules out of the HTTP crate.
//! - Hides persistence behind [`jobs::repository::JobRepository`].
//! - Owns upload storage so files are on disk before a row references them.

pub mod errors;
pub mod jobs;
pub mod storage;
pub mod runtime;
