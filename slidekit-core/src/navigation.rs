//! Prev/next button affordances.

use serde::Serialize;
use slidekit_model::ResolvedConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationState {
    /// Buttons render only when the window is strictly wider than
    /// `navigation.start`.
    pub visible: bool,
    pub has_prev: bool,
    pub has_next: bool,
    pub color: String,
}

impl NavigationState {
    pub fn compute(
        config: &ResolvedConfig,
        window_width: f32,
        position: usize,
        visible_count: usize,
        item_count: usize,
    ) -> Self {
        Self {
            visible: window_width > config.navigation.start,
            has_prev: position > 0,
            has_next: item_count > position.saturating_add(visible_count),
            color: config.navigation.color.clone(),
        }
    }

    /// Whether the prev button should actually be drawn.
    pub fn show_prev(&self) -> bool {
        self.visible && self.has_prev
    }

    pub fn show_next(&self) -> bool {
        self.visible && self.has_next
    }
}
