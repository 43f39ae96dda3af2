//! ISRIC SoilGrids WRB classification lookup.
//!
//! The endpoint has answered in several shapes over time; [`classify`] accepts
//! all of them. A failed or unrecognized lookup is never fatal.

use crate::providers::http::HttpFetcher;
use crate::types::lat_lon::LatLon;
use crate::types::soil::{SoilClass, SoilClassification};
use log::warn;
use serde_json::{Map, Value};

pub const PROVIDER_NAME: &str = "isric-soilgrids";
pub const DEFAULT_NUMBER_CLASSES: u32 = 5;

const NAME_KEYS: &[&str] = &["class_name", "name", "wrb", "label"];
const PROBABILITY_KEYS: &[&str] = &["probability", "prob", "percentage"];

/// Result of a soil lookup plus what is needed to diagnose a miss.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SoilOutcome {
    pub classification: SoilClassification,
    /// Why the lookup produced nothing, if it did.
    pub error: Option<String>,
    /// The body that could not be classified.
    pub raw_payload: Option<Value>,
}

pub async fn fetch_soil_classification(
    fetcher: &HttpFetcher,
    url: &str,
    location: LatLon,
    number_classes: u32,
) -> SoilOutcome {
    let query = [
        ("lat", location.lat().to_string()),
        ("lon", location.lon().to_string()),
        ("number_classes", number_classes.to_string()),
    ];
    let payload = match fetcher.get_json::<Value>(url, &query).await {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Soil classification request failed: {}", e);
            return SoilOutcome {
                error: Some(e.to_string()),
                ..Default::default()
            };
        }
    };

    match classify(&payload) {
        Some(classification) => SoilOutcome {
            classification,
            ..Default::default()
        },
        None => {
            warn!("Soil classification response has no recognizable class");
            SoilOutcome {
                classification: SoilClassification::default(),
                error: Some("unrecognized response shape".to_string()),
                raw_payload: Some(payload),
            }
        }
    }
}

/// Extracts the most probable class and the class list from a SoilGrids body.
///
/// Shapes are tried in order: a `most_probable` object, a `classes` list (its
/// first entry stands in for a missing `most_probable`), then the
/// `wrb_class_name` / `wrb_class_probability` pair. Returns `None` when no
/// shape yields a class name.
pub fn classify(payload: &Value) -> Option<SoilClassification> {
    let object = payload.as_object()?;

    let mut classes: Vec<SoilClass> = object
        .get("classes")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_object)
                .map(|entry| SoilClass {
                    class: first_string(entry, NAME_KEYS),
                    pct: first_number(entry, PROBABILITY_KEYS),
                })
                .collect()
        })
        .unwrap_or_default();

    let mut most = object
        .get("most_probable")
        .and_then(Value::as_object)
        .and_then(|entry| {
            let name = first_string(entry, NAME_KEYS)?;
            Some((name, first_number(entry, PROBABILITY_KEYS)))
        });

    if most.is_none() {
        most = classes
            .first()
            .and_then(|first| first.class.clone().map(|name| (name, first.pct)));
    }

    if most.is_none() {
        if let Some(name) = object.get("wrb_class_name").and_then(Value::as_str) {
            classes = object
                .get("wrb_class_probability")
                .and_then(Value::as_array)
                .map(|pairs| pairs.iter().filter_map(wrb_pair).collect())
                .unwrap_or_default();
            let pct = classes
                .iter()
                .find(|class| class.class.as_deref() == Some(name))
                .or(classes.first())
                .and_then(|class| class.pct);
            most = Some((name.to_string(), pct));
        }
    }

    let (name, pct) = most?;
    Some(SoilClassification {
        soil_provider: Some(PROVIDER_NAME.to_string()),
        soil_most_probable: Some(name),
        soil_most_probable_pct: pct,
        soil_classes: (!classes.is_empty()).then_some(classes),
    })
}

fn wrb_pair(pair: &Value) -> Option<SoilClass> {
    match pair.as_array()?.as_slice() {
        [name, pct, ..] => Some(SoilClass {
            class: name.as_str().map(str::to_string),
            pct: as_number(pct),
        }),
        _ => None,
    }
}

fn first_string(entry: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| entry.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn first_number(entry: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|key| entry.get(*key).and_then(as_number))
}

fn as_number(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::error::ProviderError;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_most_probable_shape() {
        let classification = classify(&json!({
            "most_probable": {"class_name": "Vertisol", "probability": 0.65},
            "classes": [
                {"class_name": "Vertisol", "probability": 0.65},
                {"class_name": "Luvisol", "probability": 0.2}
            ]
        }))
        .unwrap();

        assert_eq!(classification.soil_provider.as_deref(), Some(PROVIDER_NAME));
        assert_eq!(classification.soil_most_probable.as_deref(), Some("Vertisol"));
        assert_eq!(classification.soil_most_probable_pct, Some(0.65));
        assert_eq!(classification.soil_classes.map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_classes_only_shape_uses_first_class() {
        let classification = classify(&json!({
            "classes": [
                {"name": "Cambisols", "prob": "41"},
                {"label": "Regosols", "percentage": 12}
            ]
        }))
        .unwrap();

        assert_eq!(classification.soil_most_probable.as_deref(), Some("Cambisols"));
        assert_eq!(classification.soil_most_probable_pct, Some(41.0));
        let classes = classification.soil_classes.unwrap();
        assert_eq!(classes[1].class.as_deref(), Some("Regosols"));
        assert_eq!(classes[1].pct, Some(12.0));
    }

    #[test]
    fn test_wrb_shape() {
        let classification = classify(&json!({
            "wrb_class_name": "Phaeozems",
            "wrb_class_value": 20,
            "wrb_class_probability": [["Luvisols", 15], ["Phaeozems", 27], "junk"]
        }))
        .unwrap();

        assert_eq!(classification.soil_most_probable.as_deref(), Some("Phaeozems"));
        assert_eq!(classification.soil_most_probable_pct, Some(27.0));
        assert_eq!(classification.soil_classes.map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_wrb_shape_without_match_uses_first_probability() {
        let classification = classify(&json!({
            "wrb_class_name": "Leptosols",
            "wrb_class_probability": [["Calcisols", 33]]
        }))
        .unwrap();

        assert_eq!(classification.soil_most_probable.as_deref(), Some("Leptosols"));
        assert_eq!(classification.soil_most_probable_pct, Some(33.0));
    }

    #[test]
    fn test_unrecognized_shapes() {
        assert!(classify(&json!({"detail": "Not found"})).is_none());
        assert!(classify(&json!([1, 2, 3])).is_none());
        assert!(classify(&json!({"classes": []})).is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_not_fatal() -> Result<(), ProviderError> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/classification/query")
            .match_query(Matcher::Any)
            .with_status(502)
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5))?;
        let outcome = fetch_soil_classification(
            &fetcher,
            &format!("{}/classification/query", server.url()),
            LatLon(0.0, 0.0),
            DEFAULT_NUMBER_CLASSES,
        )
        .await;

        assert_eq!(outcome.classification, SoilClassification::default());
        assert!(outcome.error.is_some());
        assert!(outcome.raw_payload.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_unrecognized_body_keeps_payload() -> Result<(), ProviderError> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/classification/query")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("lat".into(), "1.5".into()),
                Matcher::UrlEncoded("lon".into(), "-2".into()),
                Matcher::UrlEncoded("number_classes".into(), "5".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"type": "Point"}"#)
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5))?;
        let outcome = fetch_soil_classification(
            &fetcher,
            &format!("{}/classification/query", server.url()),
            LatLon(1.5, -2.0),
            DEFAULT_NUMBER_CLASSES,
        )
        .await;

        assert_eq!(outcome.classification, SoilClassification::default());
        assert_eq!(outcome.raw_payload, Some(json!({"type": "Point"})));
        mock.assert_async().await;
        Ok(())
    }
}
