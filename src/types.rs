pub mod climate_normals;
pub mod config;
pub mod daily_observation;
pub mod elevation;
pub mod family;
pub mod lat_lon;
pub mod monthly_mean;
pub mod payload;
pub mod reference_period;
pub mod site_report;
pub mod soil;
