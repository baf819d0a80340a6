//! Data model definitions shared across slidekit crates.
//!
//! Everything in here is plain data: the raw option tree a caller hands to a
//! slider, the resolved configuration derived from it, breakpoint rules,
//! style attributes produced by the layout engine, and the display sequence
//! the renderer iterates. Behavior lives in `slidekit-core`.
#![allow(missing_docs)]

pub mod breakpoint;
pub mod config;
pub mod display;
#[cfg(feature = "serde")]
pub mod lenient;
pub mod options;
pub mod style;

// Intentionally curated re-exports for downstream consumers.
pub use breakpoint::BreakpointRule;
pub use config::{
    AutoplayConfig, ItemConfig, ListConfig, NavigationConfig, PositionConfig,
    ResolvedConfig,
};
pub use display::{DisplaySlot, SlotPresence, display_sequence};
pub use options::{
    AutoplayOptions, ItemOptions, ListOptions, NavigationOptions,
    PositionOptions, RawBreakpointRule, SliderOptions,
};
pub use style::{ElementStyle, Px, SliderStyle};
