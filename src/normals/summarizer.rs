//! Derives the reported statistics from twelve monthly means.

use crate::types::climate_normals::{PrecipitationNormals, TemperatureNormals};
use crate::types::monthly_mean::MonthlyMeans;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Min, max and mean of the present monthly temperature means.
///
/// The mean is a mean of monthly means, so every month with data weighs the
/// same regardless of how many days it pooled. Returns `None` when no month
/// has a value.
pub fn summarize_temperature(means: &MonthlyMeans) -> Option<TemperatureNormals> {
    let values: Vec<OrderedFloat<f64>> = means.present().map(|(_, v)| OrderedFloat(v)).collect();
    let min_c = values.iter().min()?.into_inner();
    let max_c = values.iter().max()?.into_inner();
    let mean_c = values.iter().map(|v| v.into_inner()).sum::<f64>() / values.len() as f64;
    Some(TemperatureNormals {
        min_c,
        max_c,
        mean_c,
    })
}

/// Annual total plus wettest and driest month of the present monthly
/// precipitation means.
///
/// Months without data contribute nothing to the annual total. When several
/// months share the extreme value the lowest month number wins. Returns `None`
/// when no month has a value.
pub fn summarize_precipitation(means: &MonthlyMeans) -> Option<PrecipitationNormals> {
    let (wettest_month, wettest_month_mm) = means
        .present()
        .max_by_key(|&(month, value)| (OrderedFloat(value), Reverse(month)))?;
    let (driest_month, driest_month_mm) = means
        .present()
        .min_by_key(|&(month, value)| (OrderedFloat(value), month))?;
    let annual_mm = means.present().map(|(_, value)| value).sum();
    Some(PrecipitationNormals {
        annual_mm,
        wettest_month,
        wettest_month_mm,
        driest_month,
        driest_month_mm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_YEAR: [f64; 12] = [
        10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 150.0, 120.0, 80.0, 50.0, 35.0, 5.0,
    ];

    fn all_present(values: [f64; 12]) -> MonthlyMeans {
        MonthlyMeans::from_values(values.map(Some))
    }

    #[test]
    fn test_temperature_summary() {
        let means = all_present([
            5.0, 7.0, 12.0, 15.0, 20.0, 24.0, 25.0, 24.0, 19.0, 14.0, 9.0, 6.0,
        ]);
        let summary = summarize_temperature(&means).unwrap();

        assert_eq!(summary.min_c, 5.0);
        assert_eq!(summary.max_c, 25.0);
        assert_eq!(summary.mean_c, 15.0);
    }

    #[test]
    fn test_temperature_summary_uses_present_months_only() {
        let mut values = [None; 12];
        values[0] = Some(-4.0);
        values[5] = Some(16.0);
        values[6] = Some(18.0);
        let summary = summarize_temperature(&MonthlyMeans::from_values(values)).unwrap();

        assert_eq!(summary.min_c, -4.0);
        assert_eq!(summary.max_c, 18.0);
        assert_eq!(summary.mean_c, 10.0);
    }

    #[test]
    fn test_no_present_months_yields_none() {
        let empty = MonthlyMeans::from_values([None; 12]);
        assert!(summarize_temperature(&empty).is_none());
        assert!(summarize_precipitation(&empty).is_none());
    }

    #[test]
    fn test_annual_total_is_exact_sum() {
        let summary = summarize_precipitation(&all_present(FULL_YEAR)).unwrap();

        assert_eq!(summary.annual_mm, 650.0);
        assert_eq!(summary.wettest_month, 7);
        assert_eq!(summary.wettest_month_mm, 150.0);
        assert_eq!(summary.driest_month, 12);
        assert_eq!(summary.driest_month_mm, 5.0);
    }

    #[test]
    fn test_wettest_tie_resolves_to_lowest_month() {
        let summary = summarize_precipitation(&all_present([
            10.0, 20.0, 20.0, 5.0, 6.0, 7.0, 8.0, 9.0, 11.0, 12.0, 13.0, 14.0,
        ]))
        .unwrap();

        assert_eq!(summary.wettest_month, 2);
        assert_eq!(summary.wettest_month_mm, 20.0);
    }

    #[test]
    fn test_driest_tie_resolves_to_lowest_month() {
        let mut values = FULL_YEAR;
        values[2] = 5.0; // March ties December
        let summary = summarize_precipitation(&all_present(values)).unwrap();

        assert_eq!(summary.driest_month, 3);
        assert_eq!(summary.driest_month_mm, 5.0);
    }

    #[test]
    fn test_uniform_year_picks_january_for_both_extremes() {
        let summary = summarize_precipitation(&all_present([2.0; 12])).unwrap();
        assert_eq!(summary.wettest_month, 1);
        assert_eq!(summary.driest_month, 1);
    }

    #[test]
    fn test_annual_total_skips_absent_months() {
        let mut values = [None; 12];
        values[3] = Some(12.5);
        values[9] = Some(0.0);
        let summary = summarize_precipitation(&MonthlyMeans::from_values(values)).unwrap();

        assert_eq!(summary.annual_mm, 12.5);
        assert_eq!(summary.wettest_month, 4);
        assert_eq!(summary.driest_month, 10);
        assert_eq!(summary.driest_month_mm, 0.0);
    }
}
