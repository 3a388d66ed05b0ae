use tokio::time::Instant;
use tracing::debug;

/// Times one administrative call and emits a structured event on drop, so a
/// stalled discovery or stats call shows up in the test log with its cost.
pub(crate) struct ScopedTimer {
    start: Instant,
    op: &'static str,
}

impl ScopedTimer {
    pub(crate) fn new(op: &'static str) -> Self {
        Self {
            start: Instant::now(),
            op,
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        debug!(op = self.op, elapsed_ms, "administrative call finished");
    }
}
