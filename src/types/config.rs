//! Explicit configuration handed to the transport layer.

use crate::types::elevation::ElevationProvider;
use crate::types::reference_period::ReferencePeriod;
use bon::Builder;
use std::time::Duration;

pub const DEFAULT_CLIMATE_URL: &str = "https://climate-api.open-meteo.com/v1/climate";
pub const DEFAULT_OPENTOPODATA_URL: &str = "https://api.opentopodata.org/v1";
pub const DEFAULT_OPEN_ELEVATION_URL: &str = "https://api.open-elevation.com/api/v1/lookup";
pub const DEFAULT_SOILGRIDS_URL: &str = "https://rest.isric.org/soilgrids/v2.0/classification/query";
pub const DEFAULT_DATASET: &str = "srtm90m";
pub const FALLBACK_DATASET: &str = "etopo1";

/// Endpoints and request policy for every external provider.
///
/// All fields have defaults pointing at the public services, so
/// `ProviderConfig::default()` is a working configuration. Tests and
/// self-hosted deployments override the URLs.
///
/// # Examples
///
/// ```
/// use geonormals::{ElevationProvider, ProviderConfig};
/// use std::time::Duration;
///
/// let config = ProviderConfig::builder()
///     .timeout(Duration::from_secs(30))
///     .elevation_provider(ElevationProvider::OpenTopoData)
///     .dataset("etopo1")
///     .build();
///
/// assert_eq!(config.dataset, "etopo1");
/// assert!(config.fallback);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ProviderConfig {
    /// Open-Meteo climate API endpoint.
    #[builder(into, default = DEFAULT_CLIMATE_URL.to_string())]
    pub climate_url: String,
    /// OpenTopoData base URL; the dataset is appended as a path segment.
    #[builder(into, default = DEFAULT_OPENTOPODATA_URL.to_string())]
    pub opentopodata_url: String,
    #[builder(into, default = DEFAULT_OPEN_ELEVATION_URL.to_string())]
    pub open_elevation_url: String,
    #[builder(into, default = DEFAULT_SOILGRIDS_URL.to_string())]
    pub soilgrids_url: String,
    /// Per-request timeout.
    #[builder(default = Duration::from_secs(10))]
    pub timeout: Duration,
    #[builder(default)]
    pub reference_period: ReferencePeriod,
    /// OpenTopoData dataset, e.g. `srtm90m` (~90 m, 56°S-60°N) or `etopo1` (~1 km, global).
    #[builder(into, default = DEFAULT_DATASET.to_string())]
    pub dataset: String,
    #[builder(default)]
    pub elevation_provider: ElevationProvider,
    /// Whether `ElevationProvider::Auto` may try alternatives after the first failure.
    #[builder(default = true)]
    pub fallback: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProviderConfig::default();
        assert_eq!(config.climate_url, DEFAULT_CLIMATE_URL);
        assert_eq!(config.dataset, "srtm90m");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.elevation_provider, ElevationProvider::Auto);
        assert!(config.fallback);
        assert_eq!(config.reference_period, ReferencePeriod::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ProviderConfig::builder()
            .climate_url("http://127.0.0.1:9999/climate")
            .fallback(false)
            .build();
        assert_eq!(config.climate_url, "http://127.0.0.1:9999/climate");
        assert!(!config.fallback);
        assert_eq!(config.opentopodata_url, DEFAULT_OPENTOPODATA_URL);
    }
}
