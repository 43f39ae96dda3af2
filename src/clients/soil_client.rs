//! Provides the `SoilClient` for the WRB soil classification at a coordinate.

use crate::providers::soilgrids::{fetch_soil_classification, SoilOutcome, DEFAULT_NUMBER_CLASSES};
use crate::{GeoNormals, LatLon};
use bon::bon;

/// A client builder for SoilGrids lookups. Failures are reported inside the
/// returned [`SoilOutcome`], never as an error.
pub struct SoilClient<'a> {
    client: &'a GeoNormals,
}

#[bon]
impl<'a> SoilClient<'a> {
    pub(crate) fn new(client: &'a GeoNormals) -> Self {
        Self { client }
    }

    /// Classifies the soil at a location.
    ///
    /// # Arguments (Initial Builder Method)
    ///
    /// * `coordinate` - The [`LatLon`] to classify, passed to `.location()`.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.number_classes(u32)`: how many ranked classes SoilGrids returns (default 5).
    ///
    /// # Returns
    ///
    /// A [`SoilOutcome`]. On a failed request or an unrecognized response its
    /// classification is empty and `error` (plus `raw_payload`, when a body arrived)
    /// describes the miss.
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub async fn build_location(
        &self,
        #[builder(start_fn)] coordinate: LatLon,
        number_classes: Option<u32>,
    ) -> SoilOutcome {
        fetch_soil_classification(
            self.client.fetcher(),
            &self.client.config().soilgrids_url,
            coordinate,
            number_classes.unwrap_or(DEFAULT_NUMBER_CLASSES),
        )
        .await
    }
}
