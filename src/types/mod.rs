pub mod hourly_forecast;
pub mod model;
pub(crate) mod schema;
pub mod sun_data;
