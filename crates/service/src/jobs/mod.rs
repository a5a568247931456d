//! Job postings: domain inputs, repository abstraction and the business service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::JobService;
