use crate::frame::write::write_sun_envelope;
use crate::MeteoserverError;
use polars::prelude::DataFrame;
use std::path::Path;

/// Solar ("Zon Actueel") data for one location: current conditions measured
/// at a nearby KNMI station plus a four-day hourly solar forecast.
#[derive(Debug, Clone)]
pub struct SunData {
    /// Name of the location the data pertain to.
    pub location: String,
    /// Current-weather measurements, one row per sample.
    pub current: DataFrame,
    /// Forecast rows, time-ordered.
    pub forecast: DataFrame,
}

impl SunData {
    /// Writes the data back to disc in the vendor's JSON file format, so the
    /// result can be read again with [`SunClient::file`].
    ///
    /// Typed cells produced by coercion are rendered as strings; writing a
    /// frame read with `numeric(false)` reproduces a downloaded file barring
    /// spacing.
    ///
    /// [`SunClient::file`]: crate::SunClient::file
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), MeteoserverError> {
        write_sun_envelope(path.as_ref(), &self.location, &self.current, &self.forecast)?;
        Ok(())
    }
}

/// Solar data as returned by the older "zon actueel" reader: raw string
/// frames, no location. Retained for compatibility with existing callers.
#[derive(Debug, Clone)]
pub struct LegacySunData {
    pub current: DataFrame,
    pub forecast: DataFrame,
}
