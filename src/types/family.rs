//! Defines the two independent variable families of a climate normals lookup.

use std::fmt;

/// A variable family that is fetched, aggregated and reported independently.
///
/// A failure in one family (unreachable provider, unreadable payload, no data)
/// never affects the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Daily mean air temperature at 2 m, in °C.
    Temperature,
    /// Daily precipitation sum, in mm.
    Precipitation,
}

impl Family {
    pub const ALL: [Family; 2] = [Family::Temperature, Family::Precipitation];

    /// Name of the daily variable requested from the climate API.
    pub fn daily_parameter(&self) -> &'static str {
        match self {
            Family::Temperature => "temperature_2m_mean",
            Family::Precipitation => "precipitation_sum",
        }
    }

    /// Keys under `daily` that may hold this family's values, in lookup order.
    pub(crate) fn field_aliases(&self) -> &'static [&'static str] {
        match self {
            Family::Temperature => &["temperature_2m_mean", "temperature"],
            Family::Precipitation => &["precipitation_sum", "precipitation"],
        }
    }
}

/// Formats a `Family` with its lowercase name.
///
/// # Examples
///
/// ```
/// use geonormals::Family;
///
/// assert_eq!(Family::Temperature.to_string(), "temperature");
/// assert_eq!(format!("{}", Family::Precipitation), "precipitation");
/// ```
impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Temperature => write!(f, "temperature"),
            Family::Precipitation => write!(f, "precipitation"),
        }
    }
}
