pub mod climate_client;
pub mod elevation_client;
pub mod soil_client;
