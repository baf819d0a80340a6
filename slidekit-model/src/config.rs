//! Resolved slider configuration.
//!
//! Produced once per options change by the builder in `slidekit-core` and
//! treated as read-only afterwards.

use std::time::Duration;

use crate::breakpoint::BreakpointRule;

pub const DEFAULT_NAVIGATION_START: f32 = 992.0;
pub const DEFAULT_NAVIGATION_COLOR: &str = "#000";
pub const DEFAULT_ITEM_PADDING: f32 = 16.0;
pub const DEFAULT_LIST_WINDOWED: f32 = 1200.0;
pub const DEFAULT_LIST_PADDING: f32 = 24.0;
pub const DEFAULT_AUTOPLAY_SPEED_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationConfig {
    pub start: f32,
    pub color: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_NAVIGATION_START,
            color: DEFAULT_NAVIGATION_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemConfig {
    pub class: String,
    pub padding: f32,
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            class: String::new(),
            padding: DEFAULT_ITEM_PADDING,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListConfig {
    pub class: String,
    pub windowed: f32,
    pub padding: f32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            class: String::new(),
            windowed: DEFAULT_LIST_WINDOWED,
            padding: DEFAULT_LIST_PADDING,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionConfig {
    /// Initial position applied once after the first measurement. Zero means
    /// "leave the slider at the first item".
    pub start: isize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoplayConfig {
    pub play: bool,
    pub speed_ms: u64,
    pub repeat: bool,
}

impl AutoplayConfig {
    /// Tick period. A zero speed is raised to one millisecond; a repeating
    /// timer needs a non-zero period.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms.max(1))
    }
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            play: false,
            speed_ms: DEFAULT_AUTOPLAY_SPEED_MS,
            repeat: false,
        }
    }
}

/// Fully defaulted slider configuration.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedConfig {
    pub navigation: NavigationConfig,
    pub item: ItemConfig,
    pub list: ListConfig,
    /// User rules first, then the fallback table. The first match wins.
    pub responsive: Vec<BreakpointRule>,
    pub position: PositionConfig,
    pub autoplay: AutoplayConfig,
}
