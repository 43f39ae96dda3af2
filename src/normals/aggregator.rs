//! Pools daily observations into twelve calendar-month means.

use crate::types::daily_observation::DailyObservation;
use crate::types::family::Family;
use crate::types::monthly_mean::{MonthlyMean, MonthlyMeans};
use chrono::Datelike;

/// Running sum and count for one calendar month.
#[derive(Debug, Clone, Copy, Default)]
struct MonthAccumulator {
    sum: f64,
    count: usize,
}

impl MonthAccumulator {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn finish(self, month: u32) -> MonthlyMean {
        if self.count == 0 {
            return MonthlyMean::absent(month);
        }
        MonthlyMean {
            month,
            value: Some(self.sum / self.count as f64),
            sample_count: self.count,
        }
    }
}

/// Buckets `observations` by calendar month, ignoring the year, and averages
/// the present values of `family` in each bucket.
///
/// Always returns twelve entries (January first), even for an empty input.
/// The mean is pooled over every day of every year: thirty Januaries of ~31
/// days give one average over ~930 values, not an average of yearly averages.
/// No rounding is applied.
pub fn aggregate_monthly(observations: &[DailyObservation], family: Family) -> MonthlyMeans {
    let mut buckets = [MonthAccumulator::default(); 12];
    for observation in observations {
        if let Some(value) = observation.value(family) {
            buckets[observation.date.month0() as usize].add(value);
        }
    }
    MonthlyMeans::new(std::array::from_fn(|i| buckets[i].finish(i as u32 + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn temp(y: i32, m: u32, d: u32, value: Option<f64>) -> DailyObservation {
        DailyObservation {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            temperature: value,
            precipitation: None,
        }
    }

    #[test]
    fn test_empty_input_yields_twelve_absent_months() {
        let means = aggregate_monthly(&[], Family::Temperature);

        let months: Vec<u32> = means.iter().map(|m| m.month).collect();
        assert_eq!(months, (1..=12).collect::<Vec<u32>>());
        assert!(means
            .iter()
            .all(|m| m.value.is_none() && m.sample_count == 0));
    }

    #[test]
    fn test_pooled_mean_across_years() {
        let observations = [
            temp(1991, 1, 1, Some(0.0)),
            temp(1991, 1, 2, Some(10.0)),
            temp(1992, 1, 1, Some(20.0)),
            temp(1992, 1, 2, Some(30.0)),
        ];
        let january = *aggregate_monthly(&observations, Family::Temperature)
            .get(1)
            .unwrap();

        assert_eq!(january.value, Some(15.0));
        assert_eq!(january.sample_count, 4);
    }

    #[test]
    fn test_pooled_mean_is_not_mean_of_yearly_means() {
        // 1991 contributes three days, 1992 only one
        let observations = [
            temp(1991, 3, 1, Some(0.0)),
            temp(1991, 3, 2, Some(0.0)),
            temp(1991, 3, 3, Some(0.0)),
            temp(1992, 3, 1, Some(8.0)),
        ];
        let march = *aggregate_monthly(&observations, Family::Temperature)
            .get(3)
            .unwrap();

        assert_eq!(march.value, Some(2.0));
        assert_ne!(march.value, Some(4.0));
    }

    #[test]
    fn test_absent_values_do_not_count() {
        let observations = [
            temp(1991, 2, 1, None),
            temp(1991, 2, 2, Some(6.0)),
            temp(1991, 4, 1, None),
        ];
        let means = aggregate_monthly(&observations, Family::Temperature);

        assert_eq!(means.get(2).unwrap().value, Some(6.0));
        assert_eq!(means.get(2).unwrap().sample_count, 1);
        assert_eq!(*means.get(4).unwrap(), MonthlyMean::absent(4));
    }

    #[test]
    fn test_family_selects_field() {
        let observations = [DailyObservation {
            date: NaiveDate::from_ymd_opt(1991, 7, 1).unwrap(),
            temperature: Some(25.0),
            precipitation: Some(1.5),
        }];

        assert_eq!(
            aggregate_monthly(&observations, Family::Precipitation)
                .get(7)
                .unwrap()
                .value,
            Some(1.5)
        );
        assert_eq!(
            aggregate_monthly(&observations, Family::Temperature)
                .get(7)
                .unwrap()
                .value,
            Some(25.0)
        );
    }

    #[test]
    fn test_partial_coverage_leaves_other_months_absent() {
        let observations: Vec<DailyObservation> =
            (1..=6).map(|m| temp(1991, m, 15, Some(m as f64))).collect();
        let means = aggregate_monthly(&observations, Family::Temperature);

        assert_eq!(means.present_count(), 6);
        for month in 7..=12 {
            assert_eq!(*means.get(month).unwrap(), MonthlyMean::absent(month));
        }
    }
}
