pub mod label;
pub mod location;
pub mod weekly;

pub use label::{day_hour_label, format_hour, Weekday, DAYS};
pub use location::{
    comparison_series, observed_series, predicted_series, ComparisonPoint, LinePoint,
    ScatterPoint, SeriesKind,
};
pub use weekly::{build_weekly_series, WeeklyPoint};
