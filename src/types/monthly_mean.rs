//! Per-month aggregates of one variable family.

/// The pooled mean of one calendar month's daily values for one family.
///
/// `value` is `Some` exactly when `sample_count > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyMean {
    /// Calendar month, 1 (January) to 12 (December).
    pub month: u32,
    pub value: Option<f64>,
    /// Number of present daily values that contributed to `value`.
    pub sample_count: usize,
}

impl MonthlyMean {
    pub fn absent(month: u32) -> Self {
        Self {
            month,
            value: None,
            sample_count: 0,
        }
    }
}

/// Exactly twelve [`MonthlyMean`]s, ordered January to December.
///
/// Only the monthly aggregator builds these, so the ordering holds for every instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyMeans([MonthlyMean; 12]);

impl MonthlyMeans {
    pub(crate) fn new(means: [MonthlyMean; 12]) -> Self {
        debug_assert!(means
            .iter()
            .enumerate()
            .all(|(i, mean)| mean.month == i as u32 + 1));
        Self(means)
    }

    /// Returns the mean for `month` (1-12), or `None` for any other index.
    pub fn get(&self, month: u32) -> Option<&MonthlyMean> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonthlyMean> {
        self.0.iter()
    }

    /// `(month, value)` for every month that has a value, in month order.
    pub fn present(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.0
            .iter()
            .filter_map(|mean| mean.value.map(|value| (mean.month, value)))
    }

    pub fn present_count(&self) -> usize {
        self.present().count()
    }

    /// Builds a set where every present month counts as a single sample.
    #[cfg(test)]
    pub(crate) fn from_values(values: [Option<f64>; 12]) -> Self {
        Self::new(std::array::from_fn(|i| MonthlyMean {
            month: i as u32 + 1,
            value: values[i],
            sample_count: usize::from(values[i].is_some()),
        }))
    }
}
