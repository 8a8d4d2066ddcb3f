use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Metrics observer for filter and search passes.
///
/// `scanned` is the catalog size, `matched` the number of records returned.
pub trait CellarMetrics: Send + Sync {
    fn record_filter(&self, latency: Duration, scanned: usize, matched: usize);
    fn record_search(&self, latency: Duration, scanned: usize, matched: usize);
}

/// Install or clear the global cellar metrics recorder.
pub fn set_cellar_metrics(recorder: Option<Arc<dyn CellarMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn CellarMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn CellarMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn CellarMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

pub(crate) struct MetricsSpan {
    recorder: Arc<dyn CellarMetrics>,
    start: Instant,
}

impl MetricsSpan {
    pub(crate) fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    pub(crate) fn record_filter(self, scanned: usize, matched: usize) {
        self.recorder
            .record_filter(self.start.elapsed(), scanned, matched);
    }

    pub(crate) fn record_search(self, scanned: usize, matched: usize) {
        self.recorder
            .record_search(self.start.elapsed(), scanned, matched);
    }
}
