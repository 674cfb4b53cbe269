use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read data file '{0}'")]
    FileRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse response as JSON")]
    Json(#[from] serde_json::Error),

    #[error("Envelope contains no location entry ('plaatsnaam')")]
    MissingLocation,
}
