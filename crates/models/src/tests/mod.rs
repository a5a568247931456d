/// Job table round-trips against a live Postgres
pub mod job_tests;
