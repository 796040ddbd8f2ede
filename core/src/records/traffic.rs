use serde::{Deserialize, Serialize};

/// Per-day traffic aggregate: hourly mean volume with confidence bounds.
///
/// The four sequences are index-aligned and `mean_x` values lie in
/// `[0, 24)`. One record exists per weekday, Monday first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayAggregate {
    pub mean_x: Vec<f64>,
    pub mean_y: Vec<f64>,
    pub ci_upper: Vec<f64>,
    pub ci_lower: Vec<f64>,
}

/// One sample column from the regression dump.
///
/// The upstream export stores each scalar as a one-element array, and rows
/// can be null or ragged; the type admits that so the series builders own
/// the lenient-versus-strict policy instead of the deserializer.
pub type Sample = Option<Vec<f64>>;

/// Observed samples plus a model-predicted curve over the hour-of-day axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegressionSet {
    #[serde(default)]
    pub x: Vec<Sample>,
    #[serde(default)]
    pub y: Vec<Sample>,
    #[serde(default)]
    pub x_predict: Vec<Sample>,
    #[serde(default)]
    pub y_predict: Vec<Sample>,
}

/// A monitored road section with weekday and weekend regression sets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Empty on the placeholder record used before any selection exists;
    /// the series builders yield nothing for such a record.
    #[serde(default)]
    pub section_id: String,
    /// `[lat, lng]` of the monitoring station.
    #[serde(default)]
    pub location: [f64; 2],
    #[serde(default)]
    pub weekday: RegressionSet,
    #[serde(default)]
    pub weekend: RegressionSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_record_reads_regression_dump() {
        let json = r#"{
            "section_id": "Xinyi Rd",
            "location": [25.032, 121.565],
            "weekday": {
                "x": [[7.25], null, [9.0]],
                "y": [[120.0], [88.5], [95.0]],
                "x_predict": [[0.0], [0.5]],
                "y_predict": [[40.0], [42.5]]
            },
            "weekend": {}
        }"#;
        let record: LocationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.section_id, "Xinyi Rd");
        assert_eq!(record.location, [25.032, 121.565]);
        assert_eq!(record.weekday.x.len(), 3);
        assert!(record.weekday.x[1].is_none());
        assert!(record.weekend.x_predict.is_empty());
    }

    #[test]
    fn missing_section_id_defaults_to_empty() {
        let record: LocationRecord = serde_json::from_str(r#"{"location": [0.0, 0.0]}"#).unwrap();
        assert!(record.section_id.is_empty());
    }

    #[test]
    fn day_aggregate_reads_weekly_dump() {
        let json = r#"{
            "mean_x": [0.0, 6.0, 12.0],
            "mean_y": [50.1, 120.7, 95.2],
            "ci_upper": [60.0, 130.0, 105.0],
            "ci_lower": [40.0, 110.0, 85.0]
        }"#;
        let day: DayAggregate = serde_json::from_str(json).unwrap();
        assert_eq!(day.mean_x.len(), 3);
        assert_eq!(day.ci_lower[2], 85.0);
    }
}
