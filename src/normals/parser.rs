//! Daily series parser: raw provider JSON to [`DailyObservation`]s.

use crate::normals::error::NormalsError;
use crate::types::daily_observation::DailyObservation;
use crate::types::family::Family;
use crate::types::reference_period::ReferencePeriod;
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use serde_json::{Map, Value};

/// Values at or below this are the provider's "no data" placeholder.
pub const MISSING_VALUE_SENTINEL: f64 = -9999.0;

const DAILY_KEY: &str = "daily";
const TIME_KEY: &str = "time";

/// Parses a `{"daily": {"time": [...], "<variable>": [...]}}` payload.
///
/// Only the variable arrays of `families` are read; the other fields of the
/// returned observations are `None`. Records are returned sorted by date
/// (stable, so duplicate dates keep their payload order).
///
/// Records are dropped silently when their date does not parse or falls outside
/// `period`. A value is absent when it is `null` or not a number, is non-finite,
/// is at or below [`MISSING_VALUE_SENTINEL`], is a negative precipitation, or when
/// the variable array has no entry at the record's index.
///
/// # Errors
///
/// [`NormalsError::MalformedPayload`] when there is no `daily` object, no `time`
/// array, or none of the requested variable arrays.
pub fn parse_daily_series(
    payload: &Value,
    families: &[Family],
    period: &ReferencePeriod,
) -> Result<Vec<DailyObservation>, NormalsError> {
    let daily = payload
        .get(DAILY_KEY)
        .and_then(Value::as_object)
        .ok_or_else(|| NormalsError::MalformedPayload(format!("missing `{DAILY_KEY}` object")))?;
    let times = daily
        .get(TIME_KEY)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            NormalsError::MalformedPayload(format!("missing `{DAILY_KEY}.{TIME_KEY}` array"))
        })?;

    let temperatures = families
        .contains(&Family::Temperature)
        .then(|| variable_array(daily, Family::Temperature))
        .flatten();
    let precipitations = families
        .contains(&Family::Precipitation)
        .then(|| variable_array(daily, Family::Precipitation))
        .flatten();

    if temperatures.is_none() && precipitations.is_none() {
        let expected: Vec<&str> = families
            .iter()
            .flat_map(|family| family.field_aliases().iter().copied())
            .collect();
        return Err(NormalsError::MalformedPayload(format!(
            "no variable array among [{}]",
            expected.join(", ")
        )));
    }

    let mut dropped = 0usize;
    let mut observations = Vec::with_capacity(times.len());
    for (index, time) in times.iter().enumerate() {
        let Some(date) = time.as_str().and_then(parse_date) else {
            dropped += 1;
            continue;
        };
        if !period.contains(date) {
            dropped += 1;
            continue;
        }
        observations.push(DailyObservation {
            date,
            temperature: value_at(temperatures, index, Family::Temperature),
            precipitation: value_at(precipitations, index, Family::Precipitation),
        });
    }

    if dropped > 0 {
        debug!(
            "Dropped {} of {} daily records with unparsable or out-of-period dates",
            dropped,
            times.len()
        );
    }

    observations.sort_by_key(|obs| obs.date);
    Ok(observations)
}

fn variable_array(daily: &Map<String, Value>, family: Family) -> Option<&Vec<Value>> {
    family
        .field_aliases()
        .iter()
        .find_map(|key| daily.get(*key).and_then(Value::as_array))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").map(|dt| dt.date()))
        .ok()
}

fn value_at(values: Option<&Vec<Value>>, index: usize, family: Family) -> Option<f64> {
    let value = values?.get(index)?.as_f64()?;
    if !value.is_finite() || value <= MISSING_VALUE_SENTINEL {
        return None;
    }
    if family == Family::Precipitation && value < 0.0 {
        return None;
    }
    Some(value)
}
