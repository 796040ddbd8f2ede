/// Common error type for the transform pipeline.
///
/// The pipeline is deliberately lenient at the ingestion edge (malformed
/// rows are dropped, missing observed samples coerce to zero), so the only
/// hard failure is a predicted curve that violates its input contract.
#[derive(thiserror::Error, Debug)]
pub enum TransformError {
    #[error("malformed predicted point for section {section} at index {index}")]
    MalformedPrediction { section: String, index: usize },
}

pub type TransformResult<T> = Result<T, TransformError>;

pub use crate::cost::{estimate_costs, CostEstimate};
pub use crate::records::{DayAggregate, LocationRecord, ParkingFeed, ParkingLot, RegressionSet};
pub use crate::series::{SeriesKind, Weekday};
