pub mod hourly_client;
pub mod legacy_sun_client;
pub mod sun_client;
