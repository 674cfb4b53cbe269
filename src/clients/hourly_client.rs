//! Provides the `HourlyClient` for reading "Uurverwachting" hourly forecasts.

use crate::envelope::decode::ForecastEnvelope;
use crate::envelope::transport;
use crate::frame::coerce::coerce_frame;
use crate::frame::error::FrameError;
use crate::frame::project::records_to_frame;
use crate::frame::prune::prune_columns;
use crate::types::hourly_forecast::HourlyForecast;
use crate::types::model::Model;
use crate::types::schema::{HOURLY_COERCIONS, HOURLY_PRUNED};
use crate::{Meteoserver, MeteoserverError};
use bon::bon;
use std::path::Path;

/// A client for the hourly weather-forecast endpoints.
///
/// Instances are created by calling [`Meteoserver::hourly()`]. Start with
/// `.location()` or `.file()`, set options, then finish with `.call()`.
///
/// # Example
///
/// ```no_run
/// # use meteoserver::{Meteoserver, MeteoserverError, Model};
/// # fn main() -> Result<(), MeteoserverError> {
/// let client = Meteoserver::new("my-api-key");
/// let forecast = client
///     .hourly()
///     .location("De Bilt")
///     .model(Model::Harmonie)
///     .call()?;
/// println!("{} hours of forecast for {}", forecast.data.height(), forecast.location);
/// # Ok(())
/// # }
/// ```
pub struct HourlyClient<'a> {
    client: &'a Meteoserver,
}

#[bon]
impl<'a> HourlyClient<'a> {
    pub(crate) fn new(client: &'a Meteoserver) -> Self {
        Self { client }
    }

    /// Fetches an hourly forecast for a location (in the Netherlands) from
    /// the Meteoserver server.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.model(Model)`: the upstream weather model, [`Model::Gfs`] (the
    ///   default) or [`Model::Harmonie`]. A model name arriving as a string
    ///   should be parsed up front with `str::parse::<Model>()`, which
    ///   rejects anything else with [`MeteoserverError::UnknownModel`].
    /// * `.full(bool)`: keep the full set of columns (currently 31 for GFS).
    ///   When `false` (the default) obsolescent and duplicate non-SI-unit
    ///   columns are removed, leaving 22 for GFS and 21 for HARMONIE data.
    /// * `.numeric(bool)`: convert the frame from strings to typed
    ///   numeric/timestamp columns (default `true`).
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub fn build_location(
        &self,
        #[builder(start_fn)] location: &str,
        model: Option<Model>,
        full: Option<bool>,
        numeric: Option<bool>,
    ) -> Result<HourlyForecast, MeteoserverError> {
        let model = model.unwrap_or_default();
        let text = transport::fetch(
            self.client.http(),
            model.endpoint(),
            location,
            self.client.api_key(),
        )?;
        forecast_from_text(&text, full.unwrap_or(false), numeric.unwrap_or(true))
    }

    /// Reads an hourly-forecast JSON file from disc instead of fetching it.
    /// Takes the same optional `.full(bool)` and `.numeric(bool)` as
    /// `.location()`; the model selector does not apply here.
    #[builder(start_fn = file)]
    #[doc(hidden)]
    pub fn build_file(
        &self,
        #[builder(start_fn)] path: &Path,
        full: Option<bool>,
        numeric: Option<bool>,
    ) -> Result<HourlyForecast, MeteoserverError> {
        let text = transport::read_file(path)?;
        forecast_from_text(&text, full.unwrap_or(false), numeric.unwrap_or(true))
    }
}

fn forecast_from_text(
    text: &str,
    full: bool,
    numeric: bool,
) -> Result<HourlyForecast, MeteoserverError> {
    let envelope = ForecastEnvelope::parse(text)?;
    let location = envelope.location()?.to_string();

    let mut data = records_to_frame(&envelope.data).map_err(FrameError::from)?;
    if numeric {
        coerce_frame(&mut data, HOURLY_COERCIONS).map_err(FrameError::from)?;
    }
    if !full {
        data = prune_columns(data, HOURLY_PRUNED);
    }

    Ok(HourlyForecast { location, data })
}
