use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Year(pub i32);
impl Year {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// The multi-year window (inclusive on both ends) over which daily observations
/// are pooled into monthly normals.
///
/// Defaults to the WMO 1991-2020 standard normal period.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ReferencePeriod {
    pub start: Year,
    pub end: Year,
}

impl ReferencePeriod {
    pub fn new(start: Year, end: Year) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start.get()..=self.end.get()).contains(&date.year())
    }

    /// First day of the period as `YYYY-MM-DD`.
    pub fn start_date(&self) -> String {
        format!("{}-01-01", self.start)
    }

    /// Last day of the period as `YYYY-MM-DD`.
    pub fn end_date(&self) -> String {
        format!("{}-12-31", self.end)
    }
}

impl Default for ReferencePeriod {
    fn default() -> Self {
        Self::new(Year(1991), Year(2020))
    }
}

impl Display for ReferencePeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_period_bounds() {
        let period = ReferencePeriod::default();
        assert_eq!(period.start_date(), "1991-01-01");
        assert_eq!(period.end_date(), "2020-12-31");
        assert_eq!(period.to_string(), "1991-2020");
    }

    #[test]
    fn test_contains() {
        let period = ReferencePeriod::default();
        let inside = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        let before = NaiveDate::from_ymd_opt(1990, 12, 31).unwrap();
        let after = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        assert!(period.contains(inside));
        assert!(!period.contains(before));
        assert!(!period.contains(after));
    }
}
