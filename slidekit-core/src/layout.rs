//! Layout calculator.
//!
//! Derives the working width, visible count, and per-item width from the
//! current [`WidthState`], and the inline styles that realise "show N items
//! separated by gaps" in either of the two layout modes.

use serde::Serialize;
use slidekit_model::{ElementStyle, Px, ResolvedConfig, SliderStyle};

use crate::{breakpoint, error::Result};

/// Last measured widths. Zero until the first real measurement arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WidthState {
    /// Viewport width (px).
    pub window: f32,
    /// Client width of the slider's own container (px).
    pub container: f32,
}

impl WidthState {
    pub const UNMEASURED: WidthState = WidthState {
        window: 0.0,
        container: 0.0,
    };

    pub const fn new(window: f32, container: f32) -> Self {
        Self { window, container }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// Window narrower than `list.windowed`: the list cancels its
    /// container's padding and runs edge to edge.
    FullBleed,
    /// The list stays inside its container's box.
    Windowed,
}

impl LayoutMode {
    /// `window == windowed` is already windowed.
    pub fn for_window(window: f32, windowed: f32) -> Self {
        if window < windowed {
            LayoutMode::FullBleed
        } else {
            LayoutMode::Windowed
        }
    }
}

/// Derived geometry for one (width, configuration, item count) triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layout {
    pub mode: LayoutMode,
    pub working_width: f32,
    pub visible_count: usize,
    pub item_width: f32,
    /// Gap between adjacent items, i.e. `item.padding`.
    pub item_gap: f32,
}

impl Layout {
    pub fn compute(
        width: WidthState,
        config: &ResolvedConfig,
        item_count: usize,
    ) -> Result<Self> {
        let mode = LayoutMode::for_window(width.window, config.list.windowed);
        let working_width = match mode {
            LayoutMode::FullBleed => width.window - 2.0 * config.list.padding,
            LayoutMode::Windowed => width.container,
        }
        .max(0.0);

        let visible_count = breakpoint::resolve(&config.responsive, working_width)?;
        let item_gap = config.item.padding;

        let item_width = if item_count == 0 || visible_count == 0 {
            0.0
        } else {
            let gaps = (visible_count - 1) as f32 * item_gap;
            ((working_width - gaps) / visible_count as f32).max(0.0)
        };

        Ok(Self {
            mode,
            working_width,
            visible_count,
            item_width,
            item_gap,
        })
    }

    /// Horizontal distance between the leading edges of adjacent items.
    #[inline]
    pub fn stride(&self) -> f32 {
        self.item_width + self.item_gap
    }

    /// Scroll offset that brings item `position` to the list's leading edge.
    #[inline]
    pub fn scroll_offset(&self, position: usize) -> f32 {
        position as f32 * self.item_width + position as f32 * self.item_gap
    }

    pub fn style(&self, config: &ResolvedConfig) -> SliderStyle {
        let item_padding = config.item.padding;
        let list_padding = config.list.padding;
        let width = Some(Px(self.item_width));

        match self.mode {
            LayoutMode::FullBleed => SliderStyle {
                container: ElementStyle {
                    margin_left: Some(-Px(list_padding)),
                    margin_right: Some(-Px(list_padding)),
                    ..Default::default()
                },
                item: ElementStyle {
                    width,
                    padding_left: Some(Px(list_padding)),
                    padding_right: Some(Px(item_padding)),
                    margin_right: Some(-Px(list_padding)),
                    ..Default::default()
                },
                ..Default::default()
            },
            LayoutMode::Windowed => {
                let half = Px(item_padding / 2.0);
                SliderStyle {
                    container: ElementStyle {
                        margin_left: Some(-half),
                        margin_right: Some(-half),
                        ..Default::default()
                    },
                    item: ElementStyle {
                        width,
                        padding_left: Some(half),
                        padding_right: Some(half),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            }
        }
    }
}
