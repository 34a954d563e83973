use std::io;

use thiserror::Error;

/// The input file could not be opened or decoded as a table.
#[derive(Debug, Error)]
pub enum SourceReadError {
    #[error("unable to open source file: {0}")]
    Io(#[from] io::Error),
    #[error("unable to decode CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unable to decode workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("workbook contains no worksheet")]
    EmptyWorkbook,
    #[error("unsupported source format: {0:?}")]
    UnsupportedFormat(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("required columns missing from source: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// A single malformed cell. `row` is the 1-based spreadsheet row, header included.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("row {row}, column {column:?}: {reason}")]
pub struct RecordError {
    pub row: usize,
    pub column: &'static str,
    pub reason: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("sum overflow for well {well:?}")]
    Overflow { well: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unable to build connection pool: {0}")]
    PoolBuild(#[from] deadpool_diesel::sqlite::BuildError),
    #[error("unable to acquire connection: {0}")]
    Pool(#[from] deadpool_diesel::sqlite::PoolError),
    #[error("database task aborted")]
    Interact,
    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
    #[error("migration failed: {0}")]
    Migration(String),
}

impl From<deadpool_diesel::InteractError> for StoreError {
    fn from(_: deadpool_diesel::InteractError) -> Self {
        Self::Interact
    }
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    SourceRead(#[from] SourceReadError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("invalid record at {0}")]
    Record(#[from] RecordError),
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}
