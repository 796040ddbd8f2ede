use std::sync::Mutex;

/// Counts data-source outcomes for one load pass.
pub struct SourceMetrics {
    inner: Mutex<Counters>,
}

struct Counters {
    loaded: usize,
    degraded: usize,
}

impl SourceMetrics {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters {
                loaded: 0,
                degraded: 0,
            }),
        }
    }

    pub fn record_loaded(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.loaded += 1;
        }
    }

    pub fn record_degraded(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.degraded += 1;
        }
    }

    /// `(loaded, degraded)` counts so far.
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(counters) = self.inner.lock() {
            (counters.loaded, counters.degraded)
        } else {
            (0, 0)
        }
    }
}

impl Default for SourceMetrics {
    fn default() -> Self {
        Self::new()
    }
}
