pub mod errors;
pub mod db;
pub mod job;

#[cfg(test)]
mod tests;
