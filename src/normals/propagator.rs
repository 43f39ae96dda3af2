//! Per-family null-fallback policy around the parse → aggregate → summarize pipeline.

use crate::normals::aggregator::aggregate_monthly;
use crate::normals::error::NormalsError;
use crate::normals::parser::parse_daily_series;
use crate::normals::summarizer::{summarize_precipitation, summarize_temperature};
use crate::types::climate_normals::{ClimateNormals, PrecipitationNormals, TemperatureNormals};
use crate::types::family::Family;
use crate::types::monthly_mean::MonthlyMeans;
use crate::types::payload::PayloadOrFailure;
use crate::types::reference_period::ReferencePeriod;
use log::{debug, warn};
use serde_json::Value;

/// Why a family was degraded, kept for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub family: Family,
    pub error: NormalsError,
    /// The raw body, when the provider returned one.
    pub raw_payload: Option<Value>,
}

/// The outcome for one family: either a summary attributed to a provider, or
/// nothing plus the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyReport<T> {
    pub summary: Option<T>,
    pub provider: Option<String>,
    pub diagnostic: Option<Diagnostic>,
}

impl<T> FamilyReport<T> {
    fn into_parts(self) -> (Option<(T, String)>, Option<Diagnostic>) {
        (self.summary.zip(self.provider), self.diagnostic)
    }
}

/// [`ClimateNormals`] together with the diagnostics of any degraded family.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateOutcome {
    pub normals: ClimateNormals,
    pub temperature: Option<Diagnostic>,
    pub precipitation: Option<Diagnostic>,
}

impl ClimateOutcome {
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.temperature.iter().chain(self.precipitation.iter())
    }
}

/// Runs one family through the pipeline.
///
/// A provider failure, a malformed payload or a payload without a single usable
/// month yields a report with no summary and no provider. Otherwise the summary
/// is attributed to `provider`.
pub fn propagate<T>(
    family: Family,
    input: PayloadOrFailure,
    period: &ReferencePeriod,
    provider: &str,
    summarize: impl Fn(&MonthlyMeans) -> Option<T>,
) -> FamilyReport<T> {
    match summarize_family(family, &input, period, summarize) {
        Ok(summary) => FamilyReport {
            summary: Some(summary),
            provider: Some(provider.to_string()),
            diagnostic: None,
        },
        Err(error) => {
            warn!("{} normals unavailable: {}", family, error);
            FamilyReport {
                summary: None,
                provider: None,
                diagnostic: Some(Diagnostic {
                    family,
                    error,
                    raw_payload: input.into_payload(),
                }),
            }
        }
    }
}

fn summarize_family<T>(
    family: Family,
    input: &PayloadOrFailure,
    period: &ReferencePeriod,
    summarize: impl Fn(&MonthlyMeans) -> Option<T>,
) -> Result<T, NormalsError> {
    let payload = match input {
        PayloadOrFailure::Payload(payload) => payload,
        PayloadOrFailure::Failure(reason) => {
            return Err(NormalsError::ProviderUnavailable(reason.clone()))
        }
    };
    let observations = parse_daily_series(payload, &[family], period)?;
    let means = aggregate_monthly(&observations, family);
    debug!(
        "{} daily observations pooled into {} months with {} data",
        observations.len(),
        means.present_count(),
        family
    );
    summarize(&means).ok_or(NormalsError::InsufficientData {
        family,
        observations: observations.len(),
    })
}

/// Resolves both families independently and combines them into [`ClimateNormals`].
pub fn resolve_normals(
    temperature: PayloadOrFailure,
    precipitation: PayloadOrFailure,
    period: &ReferencePeriod,
    provider: &str,
) -> ClimateOutcome {
    let temperature: FamilyReport<TemperatureNormals> = propagate(
        Family::Temperature,
        temperature,
        period,
        provider,
        summarize_temperature,
    );
    let precipitation: FamilyReport<PrecipitationNormals> = propagate(
        Family::Precipitation,
        precipitation,
        period,
        provider,
        summarize_precipitation,
    );

    let (temperature, temperature_diagnostic) = temperature.into_parts();
    let (precipitation, precipitation_diagnostic) = precipitation.into_parts();
    ClimateOutcome {
        normals: ClimateNormals::from_summaries(temperature, precipitation),
        temperature: temperature_diagnostic,
        precipitation: precipitation_diagnostic,
    }
}
