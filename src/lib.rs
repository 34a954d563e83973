pub mod aggregate;
pub mod config;
pub mod db;
pub mod error;
pub mod file_reader;
pub mod ingest;
pub mod logger;
pub mod model;
pub mod route;
pub mod shutdown;

#[allow(clippy::wildcard_imports)]
pub mod schema;
