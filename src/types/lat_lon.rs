//! Geographic coordinate type shared by every provider request.

use crate::error::GeoNormalsError;
use serde::Serialize;

/// Represents a geographical coordinate using latitude and longitude (WGS84 degrees).
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// The tuple fields are public for ergonomic construction; use [`LatLon::new`] when the
/// values come from user input and must be range-checked.
///
/// # Examples
///
/// ```
/// use geonormals::LatLon;
///
/// let quito = LatLon(-0.1807, -78.4678);
/// assert_eq!(quito.lat(), -0.1807);
/// assert_eq!(quito.lon(), -78.4678);
///
/// assert!(LatLon::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    /// Creates a coordinate, rejecting latitudes outside [-90, 90] and longitudes
    /// outside [-180, 180]. NaN is rejected on either axis.
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeoNormalsError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoNormalsError::InvalidLatitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GeoNormalsError::InvalidLongitude(lon));
        }
        Ok(Self(lat, lon))
    }

    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lon(self) -> f64 {
        self.1
    }

    /// `lat,lon` as expected by the `locations` parameter of the elevation APIs.
    pub(crate) fn locations_param(self) -> String {
        format!("{},{}", self.0, self.1)
    }
}
