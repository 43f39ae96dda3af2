mod clients;
mod error;
mod geonormals;
pub mod normals;
pub mod providers;
mod types;
mod utils;

pub use error::GeoNormalsError;
pub use geonormals::*;

pub use clients::climate_client::*;
pub use clients::elevation_client::*;
pub use clients::soil_client::*;

pub use normals::aggregator::aggregate_monthly;
pub use normals::error::NormalsError;
pub use normals::parser::{parse_daily_series, MISSING_VALUE_SENTINEL};
pub use normals::propagator::{propagate, resolve_normals, ClimateOutcome, Diagnostic, FamilyReport};
pub use normals::summarizer::{summarize_precipitation, summarize_temperature};

pub use providers::error::ProviderError;
pub use providers::soilgrids::SoilOutcome;

pub use types::climate_normals::*;
pub use types::config::*;
pub use types::daily_observation::DailyObservation;
pub use types::elevation::*;
pub use types::family::Family;
pub use types::lat_lon::LatLon;
pub use types::monthly_mean::*;
pub use types::payload::PayloadOrFailure;
pub use types::reference_period::*;
pub use types::site_report::SiteReport;
pub use types::soil::*;

pub use utils::month_abbreviation;
