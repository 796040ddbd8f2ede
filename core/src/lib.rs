//! Data-transform core for the park-or-drive urban mobility site.
//!
//! The modules turn the raw traffic and parking records shipped as static
//! assets into normalized, chart-ready sequences: the weekly volume curve,
//! per-location regression series, parking map markers, and cost estimates.
//! Everything here is pure and synchronous; loading and serving live in the
//! dashboard crate.

pub mod cost;
pub mod ingest;
pub mod numeric;
pub mod prelude;
pub mod records;
pub mod series;
pub mod telemetry;

pub use prelude::{TransformError, TransformResult};
