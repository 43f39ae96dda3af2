//! This module provides the main entry point of the crate: a client that resolves a
//! coordinate to its elevation, climate normals and soil classification.

use crate::clients::climate_client::ClimateClient;
use crate::clients::elevation_client::ElevationClient;
use crate::clients::soil_client::SoilClient;
use crate::error::GeoNormalsError;
use crate::normals::propagator::ClimateOutcome;
use crate::providers::http::HttpFetcher;
use crate::providers::soilgrids::SoilOutcome;
use crate::types::config::ProviderConfig;
use crate::types::lat_lon::LatLon;
use crate::types::site_report::SiteReport;
use bon::bon;

/// A [`SiteReport`] together with the diagnostics of whatever part of it degraded.
#[derive(Debug, Clone)]
pub struct SiteLookup {
    pub report: SiteReport,
    pub climate: ClimateOutcome,
    pub soil: SoilOutcome,
}

/// The main client struct.
///
/// It owns the [`ProviderConfig`] and a shared HTTP client. Sub-clients for the
/// individual lookups are obtained with [`GeoNormals::elevation()`],
/// [`GeoNormals::climate()`] and [`GeoNormals::soil()`].
///
/// # Examples
///
/// ```no_run
/// use geonormals::{GeoNormals, GeoNormalsError, LatLon};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), GeoNormalsError> {
/// let client = GeoNormals::new()?;
/// let lookup = client.site_report().location(LatLon(-33.45, -70.66)).call().await?;
/// println!("{}", lookup.report.render_table());
/// # Ok(())
/// # }
/// ```
pub struct GeoNormals {
    config: ProviderConfig,
    fetcher: HttpFetcher,
}

#[bon]
impl GeoNormals {
    /// Creates a client against the public services with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`GeoNormalsError::Provider`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, GeoNormalsError> {
        Self::with_config(ProviderConfig::default())
    }

    /// Creates a client with explicit endpoints, timeout and defaults.
    pub fn with_config(config: ProviderConfig) -> Result<Self, GeoNormalsError> {
        let fetcher = HttpFetcher::new(config.timeout)?;
        Ok(Self { config, fetcher })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub(crate) fn fetcher(&self) -> &HttpFetcher {
        &self.fetcher
    }

    pub fn elevation(&self) -> ElevationClient<'_> {
        ElevationClient::new(self)
    }

    pub fn climate(&self) -> ClimateClient<'_> {
        ClimateClient::new(self)
    }

    pub fn soil(&self) -> SoilClient<'_> {
        SoilClient::new(self)
    }

    /// Runs the elevation, climate and soil lookups concurrently and combines them.
    ///
    /// Climate families and soil degrade to nulls on failure; only an unresolvable
    /// elevation fails the whole lookup.
    ///
    /// # Errors
    ///
    /// Returns [`GeoNormalsError::Provider`] when no elevation provider succeeded.
    #[builder]
    pub async fn site_report(&self, location: LatLon) -> Result<SiteLookup, GeoNormalsError> {
        let (elevation_client, climate_client, soil_client) =
            (self.elevation(), self.climate(), self.soil());
        let (elevation, climate, soil) = tokio::join!(
            elevation_client.location(location).call(),
            climate_client.location(location).call(),
            soil_client.location(location).call(),
        );

        let report = SiteReport {
            lat: location.lat(),
            lon: location.lon(),
            elevation: elevation?,
            normals: climate.normals.clone(),
            soil: soil.classification.clone(),
        };
        Ok(SiteLookup {
            report,
            climate,
            soil,
        })
    }
}
