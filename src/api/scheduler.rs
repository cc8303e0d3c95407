use tracing::{debug, warn};

use crate::error::ChartResult;

/// Deferred render job. Fire-and-forget: once queued it runs to completion at
/// the next flush, with no cancellation or retry.
pub type RenderJob = Box<dyn FnOnce() -> ChartResult<()>>;

/// Explicit deferred-render queue.
///
/// Hosts construct one scheduler, pass it to each chart-processing call, and
/// drain it once layout has settled. Making the queue an owned object keeps
/// the batching behavior of a global render registry without the hidden
/// process-wide state.
#[derive(Default)]
pub struct RenderScheduler {
    queue: Vec<RenderJob>,
}

impl RenderScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Queues a render job. Jobs run in the order they were deferred.
    pub fn defer(&mut self, job: RenderJob) {
        self.queue.push(job);
    }

    /// The documented flush point: drains the queue FIFO and runs every job.
    ///
    /// A failing job is reported as a diagnostic and never stops the
    /// remaining queue; one bad chart must not prevent others from
    /// rendering. Returns the number of jobs that completed without error.
    pub fn flush(&mut self) -> usize {
        let jobs = std::mem::take(&mut self.queue);
        let total = jobs.len();
        let mut rendered = 0;
        for job in jobs {
            match job() {
                Ok(()) => rendered += 1,
                Err(err) => warn!(error = %err, "deferred render failed"),
            }
        }
        debug!(rendered, total, "flushed render queue");
        rendered
    }
}

impl std::fmt::Debug for RenderScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderScheduler")
            .field("pending", &self.queue.len())
            .finish()
    }
}
