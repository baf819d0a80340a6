//! Background events delivered to a slider's owner.

/// Produced by the autoplay timer and the resync debouncer, consumed by
/// [`Slider::handle_event`](crate::Slider::handle_event) on the owner's
/// thread of control.
///
/// Each event carries the generation of the task that produced it; events
/// from a task that has since been cancelled or replaced are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderEvent {
    AutoplayTick { generation: u64 },
    ResyncDue { generation: u64, index: usize },
}

/// Emitted whenever a slider rebuilds its configuration.
#[derive(Debug, Clone)]
pub struct ConfigChange {
    pub previous: std::sync::Arc<slidekit_model::ResolvedConfig>,
    pub current: std::sync::Arc<slidekit_model::ResolvedConfig>,
}

impl ConfigChange {
    /// `Some(play)` when `autoplay.play` flipped, `None` otherwise.
    pub fn autoplay_toggled(&self) -> Option<bool> {
        let play = self.current.autoplay.play;
        (self.previous.autoplay.play != play).then_some(play)
    }
}
