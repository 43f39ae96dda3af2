//! Provides the `ElevationClient` for resolving the ground elevation of a coordinate.
//!
//! Obtained via [`GeoNormals::elevation()`]. Provider, dataset and fallback
//! default to the values in the client's [`ProviderConfig`](crate::ProviderConfig)
//! and can be overridden per request.

use crate::providers::elevation::resolve_elevation;
use crate::{Elevation, ElevationProvider, GeoNormals, GeoNormalsError, LatLon};
use bon::bon;

/// A client builder for elevation lookups.
///
/// Calling `.location(coordinate).call().await` executes the lookup and returns a
/// [`Result<Elevation, GeoNormalsError>`].
pub struct ElevationClient<'a> {
    client: &'a GeoNormals,
}

#[bon]
impl<'a> ElevationClient<'a> {
    pub(crate) fn new(client: &'a GeoNormals) -> Self {
        Self { client }
    }

    /// Resolves the elevation of a location.
    ///
    /// This method starts a builder. Unset options fall back to the client's
    /// [`ProviderConfig`](crate::ProviderConfig). Call `.call().await` to run the lookup.
    ///
    /// # Arguments (Initial Builder Method)
    ///
    /// * `coordinate` - The [`LatLon`] to look up, passed to `.location()`.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.provider(ElevationProvider)`: which service to ask. `Auto` tries OpenTopoData
    ///   with the dataset, then `etopo1`, then Open-Elevation.
    /// * `.dataset(&str)`: OpenTopoData dataset, e.g. `srtm90m` or `etopo1`.
    /// * `.fallback(bool)`: whether `Auto` may try alternatives after the first failure.
    ///
    /// # Returns
    ///
    /// An [`Elevation`] naming the provider and dataset that answered.
    ///
    /// # Errors
    ///
    /// Returns [`GeoNormalsError::Provider`] when no provider produced an elevation:
    /// the provider's own error for an explicit provider, or
    /// [`ProviderError::AllProvidersFailed`](crate::ProviderError::AllProvidersFailed) for `Auto`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use geonormals::{ElevationProvider, GeoNormals, GeoNormalsError, LatLon};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), GeoNormalsError> {
    /// let client = GeoNormals::new()?;
    /// let elevation = client
    ///     .elevation()
    ///     .location(LatLon(46.5197, 6.6323))
    ///     .provider(ElevationProvider::OpenTopoData)
    ///     .call()
    ///     .await?;
    /// println!("{} m ({})", elevation.elevation_m, elevation.provider);
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub async fn build_location(
        &self,
        #[builder(start_fn)] coordinate: LatLon,
        provider: Option<ElevationProvider>,
        #[builder(into)] dataset: Option<String>,
        fallback: Option<bool>,
    ) -> Result<Elevation, GeoNormalsError> {
        let config = self.client.config();
        let elevation = resolve_elevation(
            self.client.fetcher(),
            config,
            coordinate,
            provider.unwrap_or(config.elevation_provider),
            dataset.as_deref().unwrap_or(&config.dataset),
            fallback.unwrap_or(config.fallback),
        )
        .await?;
        Ok(elevation)
    }
}
