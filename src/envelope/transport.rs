use crate::envelope::error::EnvelopeError;
use log::{info, warn};
use reqwest::blocking::Client;
use std::fs;
use std::path::Path;

/// Performs a blocking GET against a Meteoserver endpoint and returns the
/// response body as text. The location name and API key are passed as the
/// `locatie` and `key` query parameters.
pub(crate) fn fetch(
    client: &Client,
    endpoint: &str,
    location: &str,
    key: &str,
) -> Result<String, EnvelopeError> {
    info!("Fetching {} for location '{}'", endpoint, location);

    let response = client
        .get(endpoint)
        .query(&[("locatie", location), ("key", key)])
        .send()
        .map_err(|e| EnvelopeError::NetworkRequest(endpoint.to_string(), e))?;

    let response = match response.error_for_status() {
        Ok(resp) => resp,
        Err(e) => {
            warn!("HTTP error for {}: {:?}", endpoint, e);
            return Err(if let Some(status) = e.status() {
                EnvelopeError::HttpStatus {
                    url: endpoint.to_string(),
                    status,
                    source: e,
                }
            } else {
                EnvelopeError::NetworkRequest(endpoint.to_string(), e)
            });
        }
    };

    response
        .text()
        .map_err(|e| EnvelopeError::NetworkRequest(endpoint.to_string(), e))
}

/// Reads a previously downloaded envelope from disc.
pub(crate) fn read_file(path: &Path) -> Result<String, EnvelopeError> {
    fs::read_to_string(path).map_err(|e| EnvelopeError::FileRead(path.to_path_buf(), e))
}
