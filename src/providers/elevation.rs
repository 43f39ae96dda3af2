//! Elevation lookup against OpenTopoData and Open-Elevation, with an ordered
//! fallback chain for [`ElevationProvider::Auto`].

use crate::providers::error::ProviderError;
use crate::providers::http::HttpFetcher;
use crate::types::config::{ProviderConfig, FALLBACK_DATASET};
use crate::types::elevation::{Elevation, ElevationProvider};
use crate::types::lat_lon::LatLon;
use log::{debug, info, warn};
use serde::Deserialize;

pub const OPENTOPODATA: &str = "opentopodata";
pub const OPEN_ELEVATION: &str = "open-elevation";
const OPEN_ELEVATION_DATASET: &str = "default";

#[derive(Debug, Deserialize)]
struct OpenTopoDataResponse {
    status: Option<String>,
    results: Option<Vec<ElevationSample>>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenElevationResponse {
    results: Option<Vec<ElevationSample>>,
}

#[derive(Debug, Deserialize)]
struct ElevationSample {
    elevation: Option<f64>,
}

/// One step of an elevation lookup plan.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Attempt {
    OpenTopoData(String),
    OpenElevation,
}

fn plan(provider: ElevationProvider, dataset: &str, fallback: bool) -> Vec<Attempt> {
    match provider {
        ElevationProvider::OpenTopoData => vec![Attempt::OpenTopoData(dataset.to_string())],
        ElevationProvider::OpenElevation => vec![Attempt::OpenElevation],
        ElevationProvider::Auto if fallback => vec![
            Attempt::OpenTopoData(dataset.to_string()),
            Attempt::OpenTopoData(FALLBACK_DATASET.to_string()),
            Attempt::OpenElevation,
        ],
        ElevationProvider::Auto => vec![Attempt::OpenTopoData(dataset.to_string())],
    }
}

/// Resolves the elevation of `location`.
///
/// An explicit provider is tried once and its error returned as is.
/// [`ElevationProvider::Auto`] walks the plan and returns the first success, or
/// [`ProviderError::AllProvidersFailed`] with the last error.
pub async fn resolve_elevation(
    fetcher: &HttpFetcher,
    config: &ProviderConfig,
    location: LatLon,
    provider: ElevationProvider,
    dataset: &str,
    fallback: bool,
) -> Result<Elevation, ProviderError> {
    let attempts = plan(provider, dataset, fallback);
    debug!(
        "Resolving elevation with provider {} ({} attempt(s))",
        provider,
        attempts.len()
    );

    let mut last_error = None;
    for attempt in &attempts {
        match run_attempt(fetcher, config, location, attempt).await {
            Ok(elevation) => return Ok(elevation),
            Err(e) => {
                warn!("Elevation attempt {:?} failed: {}", attempt, e);
                last_error = Some(e);
            }
        }
    }

    let last_error = last_error.unwrap_or(ProviderError::NoElevation {
        provider: OPENTOPODATA,
        reason: "no attempt was made".to_string(),
    });
    if provider != ElevationProvider::Auto {
        return Err(last_error);
    }
    Err(ProviderError::AllProvidersFailed {
        attempts: attempts.len(),
        last_error: Box::new(last_error),
    })
}

async fn run_attempt(
    fetcher: &HttpFetcher,
    config: &ProviderConfig,
    location: LatLon,
    attempt: &Attempt,
) -> Result<Elevation, ProviderError> {
    match attempt {
        Attempt::OpenTopoData(dataset) => {
            fetch_opentopodata(fetcher, &config.opentopodata_url, dataset, location).await
        }
        Attempt::OpenElevation => {
            fetch_open_elevation(fetcher, &config.open_elevation_url, location).await
        }
    }
}

pub async fn fetch_opentopodata(
    fetcher: &HttpFetcher,
    base_url: &str,
    dataset: &str,
    location: LatLon,
) -> Result<Elevation, ProviderError> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), dataset);
    let response: OpenTopoDataResponse = fetcher
        .get_json(&url, &[("locations", location.locations_param())])
        .await?;

    if response.status.as_deref() != Some("OK") {
        return Err(ProviderError::NoElevation {
            provider: OPENTOPODATA,
            reason: format!(
                "status {} for dataset {}{}",
                response.status.as_deref().unwrap_or("missing"),
                dataset,
                response.error.map(|e| format!(" ({e})")).unwrap_or_default()
            ),
        });
    }
    let elevation_m = first_elevation(response.results, OPENTOPODATA)?;
    info!("OpenTopoData {} elevation: {} m", dataset, elevation_m);
    Ok(Elevation {
        elevation_m,
        provider: OPENTOPODATA.to_string(),
        dataset: dataset.to_string(),
    })
}

pub async fn fetch_open_elevation(
    fetcher: &HttpFetcher,
    url: &str,
    location: LatLon,
) -> Result<Elevation, ProviderError> {
    let response: OpenElevationResponse = fetcher
        .get_json(url, &[("locations", location.locations_param())])
        .await?;
    let elevation_m = first_elevation(response.results, OPEN_ELEVATION)?;
    info!("Open-Elevation elevation: {} m", elevation_m);
    Ok(Elevation {
        elevation_m,
        provider: OPEN_ELEVATION.to_string(),
        dataset: OPEN_ELEVATION_DATASET.to_string(),
    })
}

fn first_elevation(
    results: Option<Vec<ElevationSample>>,
    provider: &'static str,
) -> Result<f64, ProviderError> {
    results
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::NoElevation {
            provider,
            reason: "empty results".to_string(),
        })?
        .elevation
        .ok_or_else(|| ProviderError::NoElevation {
            provider,
            reason: "null elevation".to_string(),
        })
}
