//! The combined per-coordinate result printed by the CLI.

use crate::error::GeoNormalsError;
use crate::types::climate_normals::ClimateNormals;
use crate::types::elevation::Elevation;
use crate::types::soil::SoilClassification;
use crate::utils::{format_value, month_abbreviation};
use serde::Serialize;

/// Everything known about one coordinate.
///
/// Serializes to a single flat JSON object:
/// `lat`, `lon`, `elevation_m`, `provider`, `dataset`, the [`ClimateNormals`] fields
/// and the [`SoilClassification`] fields.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct SiteReport {
    pub lat: f64,
    pub lon: f64,
    #[serde(flatten)]
    pub elevation: Elevation,
    #[serde(flatten)]
    pub normals: ClimateNormals,
    #[serde(flatten)]
    pub soil: SoilClassification,
}

impl SiteReport {
    /// The flat JSON object, compact or indented.
    pub fn to_json(&self, pretty: bool) -> Result<String, GeoNormalsError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Two-column `(metric, value)` rows for the human readable table.
    pub fn table_rows(&self) -> Vec<(String, String)> {
        let normals = &self.normals;
        vec![
            ("Latitude".into(), format_value(Some(self.lat), 6)),
            ("Longitude".into(), format_value(Some(self.lon), 6)),
            (
                "Elevation (m)".into(),
                format!(
                    "{} ({})",
                    format_value(Some(self.elevation.elevation_m), 3),
                    self.elevation.provider
                ),
            ),
            ("Temp min (°C)".into(), format_value(normals.temp_min_c, 3)),
            ("Temp max (°C)".into(), format_value(normals.temp_max_c, 3)),
            ("Temp mean (°C)".into(), format_value(normals.temp_mean_c, 3)),
            (
                "Annual precip (mm)".into(),
                format_value(normals.annual_precip_mm, 3),
            ),
            (
                "Wettest month".into(),
                month_cell(normals.wettest_month, normals.wettest_month_mm),
            ),
            (
                "Driest month".into(),
                month_cell(normals.driest_month, normals.driest_month_mm),
            ),
            (
                "Soil (most probable)".into(),
                format!(
                    "{} ({}%)",
                    self.soil.soil_most_probable.as_deref().unwrap_or("-"),
                    format_value(self.soil.soil_most_probable_pct, 3)
                ),
            ),
        ]
    }

    /// Renders [`Self::table_rows`] as an aligned table, followed by the soil
    /// class list when SoilGrids returned one.
    pub fn render_table(&self) -> String {
        let rows = self.table_rows();
        let col1 = rows
            .iter()
            .map(|(metric, _)| metric.chars().count())
            .max()
            .unwrap_or(10);
        let col2 = rows
            .iter()
            .map(|(_, value)| value.chars().count())
            .max()
            .unwrap_or(10);

        let mut out = format!("{:<col1$} | {:<col2$}\n", "Metric", "Value");
        out.push_str(&format!("{}-+-{}\n", "-".repeat(col1), "-".repeat(col2)));
        for (metric, value) in &rows {
            out.push_str(&format!("{metric:<col1$} | {value:<col2$}\n"));
        }

        if let Some(classes) = self.soil.soil_classes.as_ref().filter(|c| !c.is_empty()) {
            out.push_str("\nSoil classes (class : pct)\n");
            for class in classes {
                out.push_str(&format!(
                    " - {} : {}\n",
                    class.class.as_deref().unwrap_or("-"),
                    format_value(class.pct, 3)
                ));
            }
        }
        out
    }
}

fn month_cell(month: Option<u32>, mm: Option<f64>) -> String {
    match month.and_then(|m| month_abbreviation(m).map(|name| (m, name))) {
        Some((m, name)) => format!("{name} ({m}) — {} mm", format_value(mm, 3)),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::soil::SoilClass;
    use serde_json::json;

    fn report() -> SiteReport {
        SiteReport {
            lat: 40.4168,
            lon: -3.7038,
            elevation: Elevation {
                elevation_m: 657.0,
                provider: "opentopodata".into(),
                dataset: "srtm90m".into(),
            },
            normals: ClimateNormals {
                temp_min_c: Some(5.5),
                temp_max_c: Some(25.25),
                temp_mean_c: Some(14.75),
                temp_provider: Some("open-meteo-climate".into()),
                ..Default::default()
            },
            soil: SoilClassification {
                soil_provider: Some("isric-soilgrids".into()),
                soil_most_probable: Some("Calcisols".into()),
                soil_most_probable_pct: Some(31.0),
                soil_classes: Some(vec![SoilClass {
                    class: Some("Calcisols".into()),
                    pct: Some(31.0),
                }]),
            },
        }
    }

    #[test]
    fn test_serializes_flat() {
        let value = serde_json::to_value(report()).unwrap();
        assert_eq!(value["lat"], json!(40.4168));
        assert_eq!(value["elevation_m"], json!(657.0));
        assert_eq!(value["provider"], json!("opentopodata"));
        assert_eq!(value["dataset"], json!("srtm90m"));
        assert_eq!(value["temp_mean_c"], json!(14.75));
        assert_eq!(value["annual_precip_mm"], json!(null));
        assert_eq!(value["precip_provider"], json!(null));
        assert_eq!(value["soil_most_probable"], json!("Calcisols"));
        assert_eq!(value["soil_classes"][0]["class"], json!("Calcisols"));
        assert!(value.get("elevation").is_none());
    }

    #[test]
    fn test_to_json_compact_and_pretty() -> Result<(), GeoNormalsError> {
        let compact = report().to_json(false)?;
        let pretty = report().to_json(true)?;

        assert!(!compact.contains('\n'));
        assert!(compact.starts_with(r#"{"lat":40.4168,"lon":-3.7038,"elevation_m":657.0"#));
        assert!(pretty.contains("\n  \"elevation_m\": 657.0,\n"));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&compact)?,
            serde_json::from_str::<serde_json::Value>(&pretty)?
        );
        Ok(())
    }

    #[test]
    fn test_table_rows_format_nulls_and_months() {
        let mut report = report();
        report.normals.wettest_month = Some(11);
        report.normals.wettest_month_mm = Some(3.14159);

        let rows = report.table_rows();
        let lookup = |metric: &str| {
            rows.iter()
                .find(|(m, _)| m == metric)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        assert_eq!(lookup("Latitude"), "40.416800");
        assert_eq!(lookup("Elevation (m)"), "657.000 (opentopodata)");
        assert_eq!(lookup("Temp min (°C)"), "5.500");
        assert_eq!(lookup("Annual precip (mm)"), "-");
        assert_eq!(lookup("Wettest month"), "Nov (11) — 3.142 mm");
        assert_eq!(lookup("Driest month"), "-");
        assert_eq!(lookup("Soil (most probable)"), "Calcisols (31.000%)");
    }

    #[test]
    fn test_render_table_lists_soil_classes() {
        let table = report().render_table();
        let mut lines = table.lines();
        assert!(lines.next().unwrap().starts_with("Metric"));
        assert!(lines.next().unwrap().contains("-+-"));
        assert!(table.contains("Soil classes (class : pct)"));
        assert!(table.contains(" - Calcisols : 31.000"));
    }
}
