//! Semantic links - observations tying narrative elements to metrics

use crate::id::{ElementId, SemanticLinkId};
use crate::value::{null_as_default, ObservedValue};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// An observation connecting a narrative element to a measured metric
///
/// `confidence` is meant to lie in [0.0, 1.0] but is stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticLink {
    /// Unique identifier
    pub id: SemanticLinkId,

    /// Weak reference to the entity, driver or relationship being observed
    pub narrative_element_id: ElementId,

    /// Name of the metric ("StockPrice", "AnalystRating", ...)
    pub metric_observed: String,

    /// Value observed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_value: Option<ObservedValue>,

    /// When the observation was made
    ///
    /// Written as RFC 3339. Timestamps without an offset are read as UTC.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "observation_time_from_text"
    )]
    pub observation_time: Option<DateTime<Utc>>,

    /// Provenance of the observation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_of_observation: Option<String>,

    /// Confidence, nominally [0.0, 1.0]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// Why the observation is relevant
    #[serde(default)]
    pub explanation: String,

    /// Labels
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl SemanticLink {
    /// Create a new semantic link
    pub fn new(
        id: impl Into<SemanticLinkId>,
        narrative_element_id: impl Into<ElementId>,
        metric_observed: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            narrative_element_id: narrative_element_id.into(),
            metric_observed: metric_observed.into(),
            observed_value: None,
            observation_time: None,
            source_of_observation: None,
            confidence: None,
            explanation: explanation.into(),
            tags: Vec::new(),
        }
    }

    /// Set the observed value
    pub fn with_value(mut self, value: impl Into<ObservedValue>) -> Self {
        self.observed_value = Some(value.into());
        self
    }

    /// Set the observation time
    pub fn observed_at(mut self, time: DateTime<Utc>) -> Self {
        self.observation_time = Some(time);
        self
    }

    /// Set the provenance
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source_of_observation = Some(source.into());
        self
    }

    /// Set the confidence (not range-checked)
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

/// Parse an observation timestamp
///
/// Accepts RFC 3339, and ISO 8601 date-times or bare dates without an
/// offset, which are taken to be UTC.
pub fn parse_observation_time(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(time) = DateTime::parse_from_rfc3339(text) {
        return Some(time.with_timezone(&Utc));
    }
    if let Ok(naive) = text.parse::<NaiveDateTime>() {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    text.parse::<NaiveDate>()
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn observation_time_from_text<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_observation_time(&text)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid observation time '{}'", text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueRange;
    use chrono::TimeZone;

    #[test]
    fn test_link_fields_round_trip() {
        let when = Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap();
        let link = SemanticLink::new(
            "sl1",
            "rel_001",
            "StockPriceOutlook",
            "Strong AI adoption is expected to boost earnings.",
        )
        .with_value("Positive")
        .observed_at(when)
        .with_source("analyst_note")
        .with_confidence(0.85);

        assert_eq!(link.narrative_element_id.as_str(), "rel_001");
        assert_eq!(link.observed_value, Some(ObservedValue::Text("Positive".to_string())));
        assert_eq!(link.observation_time, Some(when));
        assert_eq!(link.source_of_observation.as_deref(), Some("analyst_note"));
        assert_eq!(link.confidence, Some(0.85));
    }

    #[test]
    fn test_confidence_is_not_range_checked() {
        let link = SemanticLink::new("sl2", "c1", "Rating", "").with_confidence(3.0);
        assert_eq!(link.confidence, Some(3.0));
    }

    #[test]
    fn test_json_shape() {
        let link: SemanticLink = serde_json::from_str(
            r#"{
                "id": "sl3",
                "narrative_element_id": "comp_alpha",
                "metric_observed": "PriceTarget",
                "observed_value": [120.0, 140.0],
                "observation_time": "2024-05-02T09:00:00Z",
                "explanation": "Consensus range"
            }"#,
        )
        .unwrap();

        assert_eq!(
            link.observed_value,
            Some(ObservedValue::Range(ValueRange::new(120.0, 140.0)))
        );
        assert_eq!(
            link.observation_time,
            Some(Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap())
        );
        assert!(link.tags.is_empty());
    }

    #[test]
    fn test_naive_timestamps_are_utc() {
        let link: SemanticLink = serde_json::from_str(
            r#"{
                "id": "sl4",
                "narrative_element_id": "comp_alpha",
                "metric_observed": "StockPrice",
                "observation_time": "2024-04-15T16:00:00"
            }"#,
        )
        .unwrap();
        assert_eq!(
            link.observation_time,
            Some(Utc.with_ymd_and_hms(2024, 4, 15, 16, 0, 0).unwrap())
        );

        // Written back with an explicit offset
        let json = serde_json::to_string(&link).unwrap();
        assert!(json.contains("2024-04-15T16:00:00Z"));
    }

    #[test]
    fn test_timestamp_forms() {
        let expected = Utc.with_ymd_and_hms(2024, 4, 15, 14, 0, 0).unwrap();
        assert_eq!(parse_observation_time("2024-04-15T16:00:00+02:00"), Some(expected));
        assert_eq!(parse_observation_time("2024-04-15 14:00:00"), Some(expected));
        assert_eq!(
            parse_observation_time("2024-04-15"),
            Some(Utc.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_observation_time("last tuesday"), None);
    }

    #[test]
    fn test_null_and_invalid_timestamps() {
        let link: SemanticLink = serde_json::from_str(
            r#"{"id": "sl5", "narrative_element_id": "c1", "metric_observed": "M", "observation_time": null}"#,
        )
        .unwrap();
        assert_eq!(link.observation_time, None);

        let bad = serde_json::from_str::<SemanticLink>(
            r#"{"id": "sl6", "narrative_element_id": "c1", "metric_observed": "M", "observation_time": "soon"}"#,
        );
        assert!(bad.is_err());
    }
}
