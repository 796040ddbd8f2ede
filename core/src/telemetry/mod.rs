pub mod log;
pub mod metrics;

pub use log::SourceLog;
pub use metrics::SourceMetrics;
