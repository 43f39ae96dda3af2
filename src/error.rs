use crate::providers::error::ProviderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoNormalsError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Latitude must be between -90 and 90, got {0}")]
    InvalidLatitude(f64),

    #[error("Longitude must be between -180 and 180, got {0}")]
    InvalidLongitude(f64),

    #[error("Failed to serialize site report")]
    ReportSerialization(#[from] serde_json::Error),
}
