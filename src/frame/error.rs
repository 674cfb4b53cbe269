use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error("Failed to serialize envelope to JSON")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write data file '{0}'")]
    FileWrite(PathBuf, #[source] std::io::Error),
}
