//! The slider instance: configuration, measurement, position, and the two
//! background triggers, all owned by one value and mutated from one thread
//! of control.

use std::sync::Arc;

use slidekit_model::{ResolvedConfig, SliderOptions, SliderStyle, SlotPresence};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, warn};

use crate::{
    autoplay::AutoplayDriver,
    config,
    error::{Result, SliderError},
    events::{ConfigChange, SliderEvent},
    layout::{Layout, WidthState},
    navigation::NavigationState,
    position::{PositionState, max_position},
    resync::{self, ResyncDebouncer},
    scroll::{ScrollRequest, ScrollSink},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created but not yet measured.
    Detached,
    Mounted,
    /// Terminal. Background tasks are cancelled and every operation is a
    /// no-op.
    TornDown,
}

/// A responsive slider over `item_count` caller items.
///
/// The owner forwards external notifications (resize, clicks, scroll) to
/// the matching methods and drives background events with
/// [`next_event`](Self::next_event) + [`handle_event`](Self::handle_event).
#[derive(Debug)]
pub struct Slider<S: ScrollSink> {
    options: SliderOptions,
    config: Arc<ResolvedConfig>,
    item_count: usize,
    slots: SlotPresence,
    width: WidthState,
    layout: Layout,
    position: PositionState,
    lifecycle: Lifecycle,
    sink: S,
    autoplay: AutoplayDriver,
    resync: ResyncDebouncer,
    events_tx: UnboundedSender<SliderEvent>,
    events_rx: UnboundedReceiver<SliderEvent>,
}

impl<S: ScrollSink> Slider<S> {
    pub fn new(
        options: SliderOptions,
        item_count: usize,
        slots: SlotPresence,
        sink: S,
    ) -> Result<Self> {
        let config = Arc::new(config::build(&options, item_count));
        let width = WidthState::UNMEASURED;
        let layout = Layout::compute(width, &config, item_count)?;
        let (events_tx, events_rx) = unbounded_channel();

        Ok(Self {
            options,
            config,
            item_count,
            slots,
            width,
            layout,
            position: PositionState::new(),
            lifecycle: Lifecycle::Detached,
            sink,
            autoplay: AutoplayDriver::new(),
            resync: ResyncDebouncer::default(),
            events_tx,
            events_rx,
        })
    }

    /// Attach to a display surface: take the first measurement, apply the
    /// configured start position, and start autoplay if configured.
    pub fn mount(&mut self, width: WidthState) -> Result<()> {
        match self.lifecycle {
            Lifecycle::Detached => {}
            Lifecycle::Mounted => return Ok(()),
            Lifecycle::TornDown => return Err(SliderError::TornDown),
        }

        self.relayout(width, Arc::clone(&self.config))?;

        let start = self.config.position.start;
        if start != 0 {
            self.go_to(start);
        }

        // Stays Detached on failure so a later mount can retry.
        if self.config.autoplay.play && !self.autoplay.is_running() {
            self.start_autoplay()?;
        }

        self.lifecycle = Lifecycle::Mounted;
        debug!(
            window = width.window,
            container = width.container,
            visible = self.layout.visible_count,
            "slider mounted"
        );
        Ok(())
    }

    /// Cancel every background registration. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        self.autoplay.stop();
        self.resync.cancel();
        self.events_rx.close();
        self.lifecycle = Lifecycle::TornDown;
        debug!("slider torn down");
    }

    /// Viewport or container resize notification.
    pub fn on_resize(&mut self, width: WidthState) -> Result<()> {
        self.ensure_live()?;
        self.relayout(width, Arc::clone(&self.config))
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.position.prev_target(self.layout.visible_count))
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.position.next_target(self.layout.visible_count))
    }

    /// Move to `target` (clamped) and smooth-scroll the list there.
    pub fn go_to(&mut self, target: isize) -> usize {
        if self.lifecycle == Lifecycle::TornDown {
            warn!(target, "go_to on a torn down slider ignored");
            return self.position.get();
        }

        let position = self.position.go_to(target, self.max_position());
        let left = self.layout.scroll_offset(position);
        debug!(target, position, left, "slider go_to");
        self.sink.smooth_scroll_to(ScrollRequest::horizontal(left));
        position
    }

    /// Scroll notification carrying the current leading-edge offset of every
    /// display-sequence element and of the list itself. Evaluated once the
    /// notifications have been quiet for the resync window.
    pub fn on_scroll(&mut self, item_offsets: Vec<f32>, list_leading_edge: f32) -> Result<()> {
        self.ensure_live()?;
        self.resync
            .schedule(item_offsets, list_leading_edge, self.events_tx.clone())
    }

    pub fn enable_autoplay(&mut self) -> Result<()> {
        self.ensure_live()?;
        self.start_autoplay()
    }

    pub fn disable_autoplay(&mut self) {
        self.autoplay.stop();
    }

    /// Replace the raw options. Autoplay follows the `autoplay.play` delta.
    pub fn set_options(&mut self, options: SliderOptions) -> Result<ConfigChange> {
        self.ensure_live()?;
        self.options = options;
        self.rebuild_config()
    }

    /// The item collection or slot presence changed.
    pub fn set_items(&mut self, item_count: usize, slots: SlotPresence) -> Result<ConfigChange> {
        self.ensure_live()?;
        self.item_count = item_count;
        self.slots = slots;
        self.rebuild_config()
    }

    /// Wait for the next background event. Returns `None` once torn down.
    pub async fn next_event(&mut self) -> Option<SliderEvent> {
        if self.lifecycle == Lifecycle::TornDown {
            return None;
        }
        self.events_rx.recv().await
    }

    pub fn handle_event(&mut self, event: SliderEvent) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        match event {
            SliderEvent::AutoplayTick { generation } => {
                if self.autoplay.accepts(generation) {
                    self.autoplay_step();
                }
            }
            SliderEvent::ResyncDue { generation, index } => {
                if !self.resync.accept(generation) {
                    return;
                }
                let position = self.position.set_observed(index, self.max_position());
                debug!(index, position, "position resynced from scroll");
            }
        }
    }

    /// Advance exactly as one autoplay tick would, without a timer.
    pub fn autoplay_step(&mut self) -> usize {
        let target = self
            .position
            .autoplay_target(self.max_position(), self.config.autoplay.repeat);
        self.go_to(target)
    }

    /// Resync from `item_offsets` immediately, discarding any pending
    /// debounced evaluation. Returns the adopted (clamped) position.
    pub fn resync_now(&mut self, item_offsets: &[f32], list_leading_edge: f32) -> Option<usize> {
        if self.lifecycle == Lifecycle::TornDown {
            return None;
        }
        self.resync.cancel();
        let index = resync::nearest_index(item_offsets, list_leading_edge)?;
        let position = self.position.set_observed(index, self.max_position());
        debug!(index, position, "position resynced from scroll");
        Some(position)
    }

    pub fn position(&self) -> usize {
        self.position.get()
    }

    pub fn max_position(&self) -> usize {
        max_position(self.item_count, self.layout.visible_count)
    }

    pub fn visible_count(&self) -> usize {
        self.layout.visible_count
    }

    pub fn item_width(&self) -> f32 {
        self.layout.item_width
    }

    /// Scroll offset of the current position.
    pub fn scroll_offset(&self) -> f32 {
        self.layout.scroll_offset(self.position.get())
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn style(&self) -> SliderStyle {
        self.layout.style(&self.config)
    }

    pub fn navigation(&self) -> NavigationState {
        NavigationState::compute(
            &self.config,
            self.width.window,
            self.position.get(),
            self.layout.visible_count,
            self.item_count,
        )
    }

    pub fn config(&self) -> &Arc<ResolvedConfig> {
        &self.config
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn width(&self) -> WidthState {
        self.width
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn slots(&self) -> SlotPresence {
        self.slots
    }

    pub fn display_len(&self) -> usize {
        self.slots.display_len(self.item_count)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn ensure_live(&self) -> Result<()> {
        match self.lifecycle {
            Lifecycle::TornDown => Err(SliderError::TornDown),
            Lifecycle::Detached | Lifecycle::Mounted => Ok(()),
        }
    }

    fn start_autoplay(&mut self) -> Result<()> {
        self.autoplay
            .start(self.config.autoplay.interval(), self.events_tx.clone())
    }

    fn rebuild_config(&mut self) -> Result<ConfigChange> {
        let current = Arc::new(config::build(&self.options, self.item_count));
        let previous = Arc::clone(&self.config);
        self.relayout(self.width, Arc::clone(&current))?;

        let change = ConfigChange { previous, current };
        match change.autoplay_toggled() {
            Some(true) => self.start_autoplay()?,
            Some(false) => {
                self.autoplay.stop();
            }
            None => {}
        }
        Ok(change)
    }

    /// Recompute the layout for new widths or a new configuration, pulling
    /// the position back inside the new bounds when it fell outside them.
    fn relayout(&mut self, width: WidthState, config: Arc<ResolvedConfig>) -> Result<()> {
        let layout = Layout::compute(width, &config, self.item_count)?;
        if layout.visible_count != self.layout.visible_count {
            debug!(
                from = self.layout.visible_count,
                to = layout.visible_count,
                working_width = layout.working_width,
                "visible count changed"
            );
        }
        self.width = width;
        self.config = config;
        self.layout = layout;

        let position = self.position.get();
        if position > self.max_position() {
            self.go_to(position as isize);
        }
        Ok(())
    }
}
