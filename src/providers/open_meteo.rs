//! Open-Meteo climate API transport.
//!
//! Issues one daily-series request per [`Family`] and hands the result to the
//! aggregation core as a [`PayloadOrFailure`]. Transport errors never escape
//! this module.

use crate::providers::http::HttpFetcher;
use crate::types::family::Family;
use crate::types::lat_lon::LatLon;
use crate::types::payload::PayloadOrFailure;
use crate::types::reference_period::ReferencePeriod;
use log::warn;
use serde_json::Value;

pub const PROVIDER_NAME: &str = "open-meteo-climate";

pub async fn fetch_daily_series(
    fetcher: &HttpFetcher,
    url: &str,
    location: LatLon,
    family: Family,
    period: &ReferencePeriod,
) -> PayloadOrFailure {
    let query = [
        ("latitude", location.lat().to_string()),
        ("longitude", location.lon().to_string()),
        ("start_date", period.start_date()),
        ("end_date", period.end_date()),
        ("daily", family.daily_parameter().to_string()),
    ];
    match fetcher.get_json::<Value>(url, &query).await {
        Ok(payload) => PayloadOrFailure::Payload(payload),
        Err(e) => {
            warn!("Climate request for {} failed: {}", family, e);
            PayloadOrFailure::Failure(e.to_string())
        }
    }
}
