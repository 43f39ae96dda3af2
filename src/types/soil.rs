use serde::Serialize;

/// One WRB soil class with its probability, as reported by SoilGrids.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct SoilClass {
    pub class: Option<String>,
    pub pct: Option<f64>,
}

/// WRB soil classification at a point. All fields are `None` when the
/// lookup failed or the response shape was not recognized.
#[derive(Debug, PartialEq, Clone, Default, Serialize)]
pub struct SoilClassification {
    pub soil_provider: Option<String>,
    pub soil_most_probable: Option<String>,
    pub soil_most_probable_pct: Option<f64>,
    pub soil_classes: Option<Vec<SoilClass>>,
}
