use parkcore::cost::CostEstimate;
use parkcore::series::{ComparisonPoint, LinePoint, ScatterPoint, WeeklyPoint};
use serde::{Deserialize, Serialize};

/// Chart-ready snapshot served to the page views.
///
/// Everything in here is derived; the model is rebuilt wholesale from the
/// assets on disk and swapped atomically, never edited in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteModel {
    pub weekly: Vec<WeeklyPoint>,
    pub locations: Vec<LocationView>,
    pub grid: Vec<GridView>,
    pub markers: Vec<MarkerView>,
    pub lots: Vec<LotOption>,
    /// Trip origin `[lat, lng]`; `None` until the parking feed loads.
    pub start: Option<[f64; 2]>,
    /// Costs for the default panel state: first lot, one hour.
    pub default_estimate: CostEstimate,
}

/// Per-section chart data for the daily-traffic view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationView {
    pub section_id: String,
    pub location: [f64; 2],
    pub weekday_observed: Vec<ScatterPoint>,
    pub weekend_observed: Vec<ScatterPoint>,
    pub weekday_predicted: Vec<LinePoint>,
    pub weekend_predicted: Vec<LinePoint>,
}

/// One small-multiples chart in the per-location grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridView {
    pub section_id: String,
    pub points: Vec<ComparisonPoint>,
}

/// Map marker for one parking lot, sized by availability and colored on
/// the cost ramp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkerView {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub payex: f64,
    pub available_cars: Option<f64>,
    pub radius: f64,
    pub fill: String,
}

/// Selectable parking option in the estimator panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LotOption {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub cost_per_hour: f64,
    /// Driving route as `[lat, lng]` pairs; empty when the feed carried
    /// no polyline for this lot.
    pub route: Vec<[f64; 2]>,
}
