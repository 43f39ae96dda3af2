use crate::types::family::Family;
use chrono::NaiveDate;

/// One parsed day of a provider's daily series.
///
/// A value the provider reported as missing is `None`, never `0.0`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub temperature: Option<f64>,   // °C
    pub precipitation: Option<f64>, // mm, never negative
}

impl DailyObservation {
    pub fn value(&self, family: Family) -> Option<f64> {
        match family {
            Family::Temperature => self.temperature,
            Family::Precipitation => self.precipitation,
        }
    }
}
