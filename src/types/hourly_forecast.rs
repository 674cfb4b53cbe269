use crate::frame::write::write_forecast_envelope;
use crate::MeteoserverError;
use polars::prelude::DataFrame;
use std::path::Path;

/// Hourly weather-forecast ("Uurverwachting") data for one location.
#[derive(Debug, Clone)]
pub struct HourlyForecast {
    /// Name of the location the data pertain to.
    pub location: String,
    /// Forecast rows, time-ordered, one per hour (or per three hours in the
    /// far GFS range).
    pub data: DataFrame,
}

impl HourlyForecast {
    /// Writes the forecast back to disc in the vendor's JSON file format, so
    /// the result can be read again with [`HourlyClient::file`].
    ///
    /// [`HourlyClient::file`]: crate::HourlyClient::file
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), MeteoserverError> {
        write_forecast_envelope(path.as_ref(), &self.location, &self.data)?;
        Ok(())
    }
}
