pub mod elevation;
pub mod error;
pub mod http;
pub mod open_meteo;
pub mod soilgrids;
