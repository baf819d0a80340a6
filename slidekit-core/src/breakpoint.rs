//! Breakpoint resolution: working width to visible item count.

use slidekit_model::BreakpointRule;

use crate::error::{Result, SliderError};

/// Size of the first rule in `table` whose range contains `width`.
///
/// Scanning in order means user rules, which the builder places ahead of
/// the fallback table, win any overlap.
pub fn resolve(table: &[BreakpointRule], width: f32) -> Result<usize> {
    table
        .iter()
        .find(|rule| rule.matches(width))
        .map(|rule| rule.size)
        .ok_or(SliderError::NoMatchingBreakpoint { width })
}
