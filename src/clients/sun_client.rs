//! Provides the `SunClient` for reading "Zon Actueel" solar data.

use crate::envelope::decode::SunEnvelope;
use crate::envelope::transport;
use crate::frame::coerce::coerce_frame;
use crate::frame::error::FrameError;
use crate::frame::project::records_to_frame;
use crate::types::schema::SUN_COERCIONS;
use crate::types::sun_data::SunData;
use crate::{Meteoserver, MeteoserverError};
use bon::bon;
use std::path::Path;

pub(crate) const SOLAR_ENDPOINT: &str = "https://data.meteoserver.nl/api/solar.php";

/// A client for the "Zon Actueel" endpoint: current conditions from a nearby
/// station plus a four-day solar forecast.
///
/// Instances are created by calling [`Meteoserver::sun()`]. Start the request
/// with `.location()` (network fetch) or `.file()` (read a downloaded
/// envelope from disc), then finish with `.call()`.
///
/// # Example
///
/// ```no_run
/// # use meteoserver::{Meteoserver, MeteoserverError};
/// # fn main() -> Result<(), MeteoserverError> {
/// let client = Meteoserver::new("my-api-key");
/// let sun = client.sun().location("De Bilt").call()?;
/// println!("{} rows of forecast for {}", sun.forecast.height(), sun.location);
/// # Ok(())
/// # }
/// ```
pub struct SunClient<'a> {
    client: &'a Meteoserver,
}

#[bon]
impl<'a> SunClient<'a> {
    pub(crate) fn new(client: &'a Meteoserver) -> Self {
        Self { client }
    }

    /// Fetches solar data for a location (in the Netherlands) from the
    /// Meteoserver server.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.numeric(bool)`: convert the frames from strings to typed
    ///   numeric/timestamp columns (default `true`). Pass `false` if you
    ///   intend to write a JSON file that is nearly identical to the
    ///   original download.
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub fn build_location(
        &self,
        #[builder(start_fn)] location: &str,
        numeric: Option<bool>,
    ) -> Result<SunData, MeteoserverError> {
        let text = transport::fetch(
            self.client.http(),
            SOLAR_ENDPOINT,
            location,
            self.client.api_key(),
        )?;
        sun_data_from_text(&text, numeric.unwrap_or(true))
    }

    /// Reads a solar-data JSON file from disc instead of fetching it.
    /// Takes the same optional `.numeric(bool)` as `.location()`.
    #[builder(start_fn = file)]
    #[doc(hidden)]
    pub fn build_file(
        &self,
        #[builder(start_fn)] path: &Path,
        numeric: Option<bool>,
    ) -> Result<SunData, MeteoserverError> {
        let text = transport::read_file(path)?;
        sun_data_from_text(&text, numeric.unwrap_or(true))
    }
}

fn sun_data_from_text(text: &str, numeric: bool) -> Result<SunData, MeteoserverError> {
    let envelope = SunEnvelope::parse(text)?;
    let location = envelope.location()?.to_string();

    let mut current = records_to_frame(&envelope.current).map_err(FrameError::from)?;
    let mut forecast = records_to_frame(&envelope.forecast).map_err(FrameError::from)?;
    if numeric {
        coerce_frame(&mut current, SUN_COERCIONS).map_err(FrameError::from)?;
        coerce_frame(&mut forecast, SUN_COERCIONS).map_err(FrameError::from)?;
    }

    Ok(SunData {
        location,
        current,
        forecast,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_envelope(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("sun.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_file_with_coercion() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_envelope(
            &dir,
            r#"{"plaatsnaam":[{"plaats":"De Bilt"}],
                "current":[{"station":"De Bilt","time":"1609459200"}],
                "forecast":[]}"#,
        );

        let client = Meteoserver::new("unused");
        let sun = client.sun().file(&path).call().unwrap();

        assert_eq!(sun.location, "De Bilt");
        assert_eq!(sun.current.height(), 1);
        assert_eq!(
            sun.current.column("time").unwrap().i64().unwrap().get(0),
            Some(1609459200)
        );
        assert_eq!(sun.forecast.height(), 0);
    }

    #[test]
    fn numeric_false_keeps_raw_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_envelope(
            &dir,
            r#"{"plaatsnaam":[{"plaats":"De Bilt"}],
                "current":[{"time":"1609459200","temp":"4.1"}],
                "forecast":[]}"#,
        );

        let client = Meteoserver::new("unused");
        let sun = client.sun().file(&path).numeric(false).call().unwrap();
        let time = sun.current.column("time").unwrap();
        assert_eq!(time.str().unwrap().get(0), Some("1609459200"));
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_envelope(
            &dir,
            r#"{"plaatsnaam":[{"plaats":"De Bilt"}],
                "current":[{"station":"De Bilt","time":"1609459200","temp":"4.1"}],
                "forecast":[{"time":"1609462800","gr":"0"},{"time":"1609466400","gr":"12"}]}"#,
        );

        let client = Meteoserver::new("unused");
        let first = client.sun().file(&path).numeric(false).call().unwrap();

        let out = dir.path().join("rewritten.json");
        first.write(&out).unwrap();
        let second = client.sun().file(&out).numeric(false).call().unwrap();

        assert_eq!(second.location, first.location);
        assert_eq!(second.current, first.current);
        assert_eq!(second.forecast, first.forecast);
    }

    #[test]
    fn malformed_file_propagates_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_envelope(&dir, "{definitely not json");

        let client = Meteoserver::new("unused");
        let err = client.sun().file(&path).call().unwrap_err();
        assert!(matches!(
            err,
            MeteoserverError::Envelope(crate::EnvelopeError::Json(_))
        ));
    }
}
