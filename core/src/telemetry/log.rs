use log::{info, warn};
use std::fmt::Display;

/// Records data-source lifecycle events at the loading boundary.
pub struct SourceLog;

impl SourceLog {
    pub fn new() -> Self {
        Self
    }

    pub fn loaded(&self, source: &str, records: usize) {
        info!("{} loaded ({} records)", source, records);
    }

    /// A failed source degrades to an empty dataset; the failure is logged
    /// and never fatal.
    pub fn degraded(&self, source: &str, reason: &dyn Display) {
        warn!("{} degraded to empty: {}", source, reason);
    }

    pub fn summary(&self, loaded: usize, degraded: usize) {
        info!("data sources ready: {} loaded, {} degraded", loaded, degraded);
    }
}

impl Default for SourceLog {
    fn default() -> Self {
        Self::new()
    }
}
