//! Provides the `ClimateClient` for computing temperature and precipitation normals.
//!
//! Both families are requested concurrently and aggregated locally. A family whose
//! request or payload fails is reported as all-null with a diagnostic; the other
//! family is unaffected.

use crate::normals::propagator::{resolve_normals, ClimateOutcome};
use crate::providers::open_meteo::{fetch_daily_series, PROVIDER_NAME};
use crate::{Family, GeoNormals, LatLon, ReferencePeriod};
use bon::bon;

/// A client builder for climate normals.
///
/// Calling `.location(coordinate).call().await` returns a [`ClimateOutcome`]. This
/// never fails as a whole.
pub struct ClimateClient<'a> {
    client: &'a GeoNormals,
}

#[bon]
impl<'a> ClimateClient<'a> {
    pub(crate) fn new(client: &'a GeoNormals) -> Self {
        Self { client }
    }

    /// Computes monthly normals for a location over a reference period.
    ///
    /// Daily mean temperature and daily precipitation sums are requested concurrently,
    /// pooled per calendar month and summarized.
    ///
    /// # Arguments (Initial Builder Method)
    ///
    /// * `coordinate` - The [`LatLon`] to compute normals for, passed to `.location()`.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.period(ReferencePeriod)`: overrides the configured period (1991-2020 by default).
    ///
    /// # Returns
    ///
    /// A [`ClimateOutcome`]. A family that could not be computed has all of its
    /// fields and its provider set to `None`, and a [`Diagnostic`](crate::Diagnostic)
    /// saying why (provider unavailable, malformed payload or insufficient data).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use geonormals::{GeoNormals, GeoNormalsError, LatLon};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), GeoNormalsError> {
    /// let client = GeoNormals::new()?;
    /// let outcome = client.climate().location(LatLon(52.52, 13.40)).call().await;
    /// println!("{:?}", outcome.normals.annual_precip_mm);
    /// for diagnostic in outcome.diagnostics() {
    ///     eprintln!("{}: {}", diagnostic.family, diagnostic.error);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub async fn build_location(
        &self,
        #[builder(start_fn)] coordinate: LatLon,
        period: Option<ReferencePeriod>,
    ) -> ClimateOutcome {
        let config = self.client.config();
        let period = period.unwrap_or(config.reference_period);
        let fetcher = self.client.fetcher();
        let url = config.climate_url.as_str();

        let (temperature, precipitation) = tokio::join!(
            fetch_daily_series(fetcher, url, coordinate, Family::Temperature, &period),
            fetch_daily_series(fetcher, url, coordinate, Family::Precipitation, &period),
        );

        resolve_normals(temperature, precipitation, &period, PROVIDER_NAME)
    }
}
