use crate::numeric::round_to;
use crate::prelude::{TransformError, TransformResult};
use crate::records::{LocationRecord, RegressionSet, Sample};
use serde::{Deserialize, Serialize};

/// Selects which regression set of a location feeds a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Weekday,
    Weekend,
}

impl SeriesKind {
    fn select<'a>(&self, loc: &'a LocationRecord) -> &'a RegressionSet {
        match self {
            SeriesKind::Weekday => &loc.weekday,
            SeriesKind::Weekend => &loc.weekend,
        }
    }
}

/// Observed sample for the scatter overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub hour: f64,
    pub traffic: f64,
    pub location: String,
}

/// Predicted sample for the regression line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub hour: f64,
    pub traffic: f64,
    pub location: String,
}

/// Weekday-versus-weekend predicted pair for the small-multiples grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    pub hour: f64,
    pub weekday: f64,
    pub weekend: f64,
}

fn sample_value(samples: &[Sample], index: usize) -> Option<f64> {
    samples
        .get(index)
        .and_then(|sample| sample.as_ref())
        .and_then(|values| values.first())
        .copied()
}

/// Observed scatter points for one location.
///
/// The observed dump is sparse: null rows and ragged companion sequences
/// coerce to `0.0`. A record without a `section_id` (the unselected
/// placeholder) yields nothing.
pub fn observed_series(loc: &LocationRecord, kind: SeriesKind) -> Vec<ScatterPoint> {
    if loc.section_id.is_empty() {
        return Vec::new();
    }
    let set = kind.select(loc);
    set.x
        .iter()
        .enumerate()
        .map(|(i, sample)| ScatterPoint {
            hour: round_to(
                sample.as_ref().and_then(|v| v.first()).copied().unwrap_or(0.0),
                3,
            ),
            traffic: round_to(sample_value(&set.y, i).unwrap_or(0.0), 3),
            location: loc.section_id.clone(),
        })
        .collect()
}

/// Predicted line points for one location.
///
/// Unlike the observed series, the predicted curve is sampled on a regular
/// grid and must be fully present: a null or empty sample is a contract
/// violation and errors out instead of plotting `NaN` into the chart.
pub fn predicted_series(
    loc: &LocationRecord,
    kind: SeriesKind,
) -> TransformResult<Vec<LinePoint>> {
    if loc.section_id.is_empty() {
        return Ok(Vec::new());
    }
    let set = kind.select(loc);
    set.x_predict
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let hour = sample.as_ref().and_then(|v| v.first()).copied();
            let traffic = sample_value(&set.y_predict, i);
            match (hour, traffic) {
                (Some(hour), Some(traffic)) => Ok(LinePoint {
                    hour: round_to(hour, 3),
                    traffic: round_to(traffic, 3),
                    location: loc.section_id.clone(),
                }),
                _ => Err(TransformError::MalformedPrediction {
                    section: loc.section_id.clone(),
                    index: i,
                }),
            }
        })
        .collect()
}

/// Weekday and weekend predicted curves zipped on the weekday prediction
/// grid, for the per-location grid charts.
///
/// Null `x` entries are skipped, as in the source dump; a malformed `y`
/// curve is a contract violation like in [`predicted_series`].
pub fn comparison_series(loc: &LocationRecord) -> TransformResult<Vec<ComparisonPoint>> {
    let mut points = Vec::new();
    for (i, sample) in loc.weekday.x_predict.iter().enumerate() {
        let hour = match sample.as_ref().and_then(|v| v.first()).copied() {
            Some(hour) => hour,
            None => continue,
        };
        let weekday = sample_value(&loc.weekday.y_predict, i);
        let weekend = sample_value(&loc.weekend.y_predict, i);
        match (weekday, weekend) {
            (Some(weekday), Some(weekend)) => points.push(ComparisonPoint {
                hour: round_to(hour, 3),
                weekday: round_to(weekday, 3),
                weekend: round_to(weekend, 3),
            }),
            _ => {
                return Err(TransformError::MalformedPrediction {
                    section: loc.section_id.clone(),
                    index: i,
                })
            }
        }
    }
    Ok(points)
}
