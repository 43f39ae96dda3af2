use serde::Serialize;

/// Temperature statistics derived from the twelve monthly means.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct TemperatureNormals {
    pub min_c: f64,  // coldest monthly mean
    pub max_c: f64,  // warmest monthly mean
    pub mean_c: f64, // mean of the monthly means
}

/// Precipitation statistics derived from the twelve monthly means.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct PrecipitationNormals {
    pub annual_mm: f64, // sum of present monthly means
    pub wettest_month: u32,
    pub wettest_month_mm: f64,
    pub driest_month: u32,
    pub driest_month_mm: f64,
}

/// The terminal result of a climate normals lookup.
///
/// Every field is independently nullable. The temperature fields and
/// `temp_provider` are either all populated or all `None`; likewise for the
/// precipitation fields and `precip_provider`.
#[derive(Debug, PartialEq, Clone, Default, Serialize)]
pub struct ClimateNormals {
    pub temp_min_c: Option<f64>,
    pub temp_max_c: Option<f64>,
    pub temp_mean_c: Option<f64>,
    pub temp_provider: Option<String>,
    pub annual_precip_mm: Option<f64>,
    pub wettest_month: Option<u32>,
    pub wettest_month_mm: Option<f64>,
    pub driest_month: Option<u32>,
    pub driest_month_mm: Option<f64>,
    pub precip_provider: Option<String>,
}

impl ClimateNormals {
    /// Flattens the per-family summaries. A family's provider is only kept
    /// when that family produced a summary.
    pub fn from_summaries(
        temperature: Option<(TemperatureNormals, String)>,
        precipitation: Option<(PrecipitationNormals, String)>,
    ) -> Self {
        let (temperature, temp_provider) = temperature.unzip();
        let (precipitation, precip_provider) = precipitation.unzip();
        Self {
            temp_min_c: temperature.map(|t| t.min_c),
            temp_max_c: temperature.map(|t| t.max_c),
            temp_mean_c: temperature.map(|t| t.mean_c),
            temp_provider,
            annual_precip_mm: precipitation.map(|p| p.annual_mm),
            wettest_month: precipitation.map(|p| p.wettest_month),
            wettest_month_mm: precipitation.map(|p| p.wettest_month_mm),
            driest_month: precipitation.map(|p| p.driest_month),
            driest_month_mm: precipitation.map(|p| p.driest_month_mm),
            precip_provider,
        }
    }

    pub fn has_temperature(&self) -> bool {
        self.temp_provider.is_some()
    }

    pub fn has_precipitation(&self) -> bool {
        self.precip_provider.is_some()
    }
}
