//! Scroll resynchronization.
//!
//! After a user-driven scroll (touch, trackpad, scrollbar) the list may rest
//! anywhere. Once scroll notifications go quiet, the item whose leading edge
//! sits closest to the list's leading edge becomes the current position.

use std::time::Duration;

use tokio::{runtime::Handle, sync::mpsc::UnboundedSender, task::JoinHandle};
use tracing::trace;

use crate::{
    error::{Result, SliderError},
    events::SliderEvent,
};

/// Quiet period a scroll burst must observe before it is evaluated.
pub const RESYNC_QUIET_WINDOW: Duration = Duration::from_millis(50);

/// Index of the offset closest to `leading_edge`. Ties go to the lowest
/// index; non-finite offsets are skipped.
pub fn nearest_index(offsets: &[f32], leading_edge: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, offset) in offsets.iter().enumerate() {
        let distance = (offset - leading_edge).abs();
        if !distance.is_finite() {
            continue;
        }
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

/// Cancel-and-reschedule debouncer for resync evaluations.
#[derive(Debug)]
pub struct ResyncDebouncer {
    quiet: Duration,
    pending: Option<JoinHandle<()>>,
    generation: u64,
}

impl Default for ResyncDebouncer {
    fn default() -> Self {
        Self::new(RESYNC_QUIET_WINDOW)
    }
}

impl ResyncDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            generation: 0,
        }
    }

    /// Replace any pending evaluation with one for `offsets`, due after the
    /// quiet window.
    pub fn schedule(
        &mut self,
        offsets: Vec<f32>,
        leading_edge: f32,
        events: UnboundedSender<SliderEvent>,
    ) -> Result<()> {
        let runtime = Handle::try_current()
            .map_err(|_| SliderError::RuntimeUnavailable { task: "scroll resync" })?;

        self.cancel();
        let generation = self.generation;
        let quiet = self.quiet;

        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(quiet).await;
            if let Some(index) = nearest_index(&offsets, leading_edge) {
                let _ = events.send(SliderEvent::ResyncDue { generation, index });
            }
        }));
        trace!(generation, "resync scheduled");
        Ok(())
    }

    /// Drop the pending evaluation, including one whose result is already
    /// queued.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
        self.generation += 1;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Consume a due evaluation. Returns `false` for superseded ones.
    pub fn accept(&mut self, generation: u64) -> bool {
        if self.pending.is_some() && generation == self.generation {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

impl Drop for ResyncDebouncer {
    fn drop(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}
