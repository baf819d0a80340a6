//! Autoplay driver: a single repeating timer per slider.

use std::time::Duration;

use tokio::{
    runtime::Handle,
    sync::mpsc::UnboundedSender,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};
use tracing::debug;

use crate::{
    error::{Result, SliderError},
    events::SliderEvent,
};

/// Owns at most one live timer task. Starting while running replaces the
/// old timer; stopping is idempotent; dropping the driver stops the timer.
#[derive(Debug, Default)]
pub struct AutoplayDriver {
    task: Option<JoinHandle<()>>,
    generation: u64,
}

impl AutoplayDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking every `period`. The first tick fires one full period
    /// after the call.
    pub fn start(
        &mut self,
        period: Duration,
        events: UnboundedSender<SliderEvent>,
    ) -> Result<()> {
        let runtime = Handle::try_current()
            .map_err(|_| SliderError::RuntimeUnavailable { task: "autoplay" })?;

        self.stop();
        self.generation += 1;
        let generation = self.generation;

        self.task = Some(runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if events.send(SliderEvent::AutoplayTick { generation }).is_err() {
                    break;
                }
            }
        }));
        debug!(generation, period_ms = period.as_millis() as u64, "autoplay started");
        Ok(())
    }

    /// Cancel the timer. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                // Ticks already queued by the cancelled task go stale.
                self.generation += 1;
                debug!("autoplay stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Whether a tick stamped with `generation` came from the live timer.
    pub fn accepts(&self, generation: u64) -> bool {
        self.task.is_some() && generation == self.generation
    }
}

impl Drop for AutoplayDriver {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
