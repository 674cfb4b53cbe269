//! Provides the `LegacySunClient`, the older solar-data reader.

use crate::envelope::decode::SunEnvelope;
use crate::envelope::transport;
use crate::frame::error::FrameError;
use crate::frame::project::records_to_frame;
use crate::types::sun_data::LegacySunData;
use crate::{Meteoserver, MeteoserverError};
use bon::bon;
use std::path::Path;

/// The older "zon actueel" solar-data client, retained for compatibility.
///
/// Unlike [`SunClient`](crate::SunClient) it performs no type coercion and
/// does not extract the location name: the frames carry the vendor's raw
/// strings. Obtained via [`Meteoserver::legacy_sun()`].
pub struct LegacySunClient<'a> {
    client: &'a Meteoserver,
}

#[bon]
impl<'a> LegacySunClient<'a> {
    pub(crate) fn new(client: &'a Meteoserver) -> Self {
        Self { client }
    }

    /// Fetches the current-data and forecast frames for a location from the
    /// Meteoserver server.
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub fn build_location(
        &self,
        #[builder(start_fn)] location: &str,
    ) -> Result<LegacySunData, MeteoserverError> {
        let text = transport::fetch(
            self.client.http(),
            super::sun_client::SOLAR_ENDPOINT,
            location,
            self.client.api_key(),
        )?;
        legacy_sun_data_from_text(&text)
    }

    /// Reads a solar-data JSON file from disc instead of fetching it.
    #[builder(start_fn = file)]
    #[doc(hidden)]
    pub fn build_file(
        &self,
        #[builder(start_fn)] path: &Path,
    ) -> Result<LegacySunData, MeteoserverError> {
        let text = transport::read_file(path)?;
        legacy_sun_data_from_text(&text)
    }
}

fn legacy_sun_data_from_text(text: &str) -> Result<LegacySunData, MeteoserverError> {
    let envelope = SunEnvelope::parse(text)?;
    let current = records_to_frame(&envelope.current).map_err(FrameError::from)?;
    let forecast = records_to_frame(&envelope.forecast).map_err(FrameError::from)?;
    Ok(LegacySunData { current, forecast })
}
