mod clients;
mod envelope;
mod error;
mod frame;
mod meteoserver;
mod types;

pub use error::MeteoserverError;
pub use meteoserver::Meteoserver;

pub use clients::hourly_client::*;
pub use clients::legacy_sun_client::*;
pub use clients::sun_client::*;

pub use types::hourly_forecast::HourlyForecast;
pub use types::model::Model;
pub use types::sun_data::{LegacySunData, SunData};

pub use envelope::error::EnvelopeError;
pub use frame::error::FrameError;
