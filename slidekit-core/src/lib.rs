//! # slidekit core
//!
//! Responsive layout engine and navigation state machine for a horizontal
//! slider (carousel).
//!
//! Given a caller's raw [`SliderOptions`](slidekit_model::SliderOptions),
//! the item count, and the measured viewport/container widths, a [`Slider`]
//! works out how many items are visible, how wide each one is, which inline
//! styles realise that layout, and where the list must scroll for
//! prev/next/go-to navigation, autoplay ticks, and scroll read-back.
//!
//! Rendering is left to the caller: the slider emits [`ScrollRequest`]s to a
//! [`ScrollSink`] and exposes [`SliderStyle`](slidekit_model::SliderStyle)
//! and [`NavigationState`] for the markup layer.
//!
//! ## Architecture
//!
//! - [`config`]: option defaulting, fallback breakpoints, JSON/TOML loading
//! - [`breakpoint`]: width to visible count
//! - [`layout`]: working width, item width, full-bleed vs windowed styles
//! - [`position`]: clamped position transitions
//! - [`autoplay`]: the repeating timer
//! - [`resync`]: debounced scroll read-back
//! - [`slider`]: the instance that owns all of the above
//!
//! ## Example
//!
//! ```
//! use slidekit_core::{RecordingScrollSink, Slider, WidthState};
//! use slidekit_model::{SliderOptions, SlotPresence};
//!
//! let mut slider = Slider::new(
//!     SliderOptions::default(),
//!     10,
//!     SlotPresence::NONE,
//!     RecordingScrollSink::new(),
//! )?;
//! slider.mount(WidthState::new(1300.0, 1300.0))?;
//! assert_eq!(slider.visible_count(), 5);
//! assert_eq!(slider.next(), 5);
//! assert_eq!(slider.next(), 5);
//! # Ok::<(), slidekit_core::SliderError>(())
//! ```

#![allow(missing_docs)]

pub mod autoplay;
pub mod breakpoint;
pub mod config;
pub mod error;
pub mod events;
pub mod layout;
pub mod navigation;
pub mod position;
pub mod resync;
pub mod scroll;
pub mod slider;

pub use error::{Result, SliderError};
pub use events::{ConfigChange, SliderEvent};
pub use layout::{Layout, LayoutMode, WidthState};
pub use navigation::NavigationState;
pub use scroll::{RecordingScrollSink, ScrollRequest, ScrollSink};
pub use slider::{Lifecycle, Slider};
