//! This module provides the main entry point for interacting with the
//! Meteoserver.nl API. Requests are synchronous and blocking; every call
//! returns fresh data, no state is shared between calls.

use crate::clients::hourly_client::HourlyClient;
use crate::clients::legacy_sun_client::LegacySunClient;
use crate::clients::sun_client::SunClient;
use reqwest::blocking::Client;

/// The main client struct for accessing Meteoserver data.
///
/// Holds the API key and the HTTP client shared by all per-endpoint clients.
///
/// # Examples
///
/// ```no_run
/// # use meteoserver::{Meteoserver, MeteoserverError};
/// # fn main() -> Result<(), MeteoserverError> {
/// let client = Meteoserver::new("my-api-key");
/// let sun = client.sun().location("De Bilt").call()?;
/// let forecast = client.hourly().location("De Bilt").call()?;
/// # Ok(())
/// # }
/// ```
pub struct Meteoserver {
    http: Client,
    api_key: String,
}

impl Meteoserver {
    /// Creates a new client for the given Meteoserver API key.
    ///
    /// The key is only used for network fetches; file reads work with any
    /// key, including an empty one.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// A client for the "Zon Actueel" solar data.
    pub fn sun(&self) -> SunClient<'_> {
        SunClient::new(self)
    }

    /// A client for the "Uurverwachting" hourly weather forecasts.
    pub fn hourly(&self) -> HourlyClient<'_> {
        HourlyClient::new(self)
    }

    /// The older solar-data client: raw strings, no location extraction.
    pub fn legacy_sun(&self) -> LegacySunClient<'_> {
        LegacySunClient::new(self)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}
