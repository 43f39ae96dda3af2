//! Defines the elevation result and the provider selection policy.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Ground elevation above mean sea level for one coordinate.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Elevation {
    pub elevation_m: f64,
    /// Service that answered, e.g. `opentopodata` or `open-elevation`.
    pub provider: String,
    /// Dataset the elevation was sampled from (`default` for Open-Elevation).
    pub dataset: String,
}

/// Which elevation service to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElevationProvider {
    /// OpenTopoData with the configured dataset, then (if fallback is enabled)
    /// OpenTopoData `etopo1`, then Open-Elevation.
    #[default]
    Auto,
    /// OpenTopoData with the configured dataset only.
    OpenTopoData,
    /// Open-Elevation only.
    OpenElevation,
}

impl ElevationProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElevationProvider::Auto => "auto",
            ElevationProvider::OpenTopoData => "opentopodata",
            ElevationProvider::OpenElevation => "open-elevation",
        }
    }
}

impl fmt::Display for ElevationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ElevationProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ElevationProvider::Auto),
            "opentopodata" => Ok(ElevationProvider::OpenTopoData),
            "open-elevation" => Ok(ElevationProvider::OpenElevation),
            other => Err(format!(
                "unknown elevation provider '{other}' (expected auto, opentopodata or open-elevation)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_round_trips_through_str() {
        for provider in [
            ElevationProvider::Auto,
            ElevationProvider::OpenTopoData,
            ElevationProvider::OpenElevation,
        ] {
            assert_eq!(provider.to_string().parse::<ElevationProvider>(), Ok(provider));
        }
        assert!("srtm".parse::<ElevationProvider>().is_err());
    }
}
