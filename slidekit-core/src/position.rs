//! Position state machine.
//!
//! The position is the display index of the first visible item. It moves by
//! a full page on prev/next and by one item on autoplay ticks, and is always
//! clamped to `0..=max_position`.

/// Largest position that keeps the trailing edge inside the collection.
#[inline]
pub fn max_position(item_count: usize, visible_count: usize) -> usize {
    item_count.saturating_sub(visible_count)
}

#[inline]
pub fn clamp_target(target: isize, max: usize) -> usize {
    if target <= 0 {
        0
    } else {
        (target as usize).min(max)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionState {
    position: usize,
}

impl PositionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> usize {
        self.position
    }

    /// Clamp `target` to `0..=max` and make it current.
    pub fn go_to(&mut self, target: isize, max: usize) -> usize {
        self.position = clamp_target(target, max);
        self.position
    }

    /// Adopt an index read back from the list, clamped to `0..=max`.
    pub fn set_observed(&mut self, index: usize, max: usize) -> usize {
        self.position = index.min(max);
        self.position
    }

    pub fn prev_target(&self, visible_count: usize) -> isize {
        self.signed().saturating_sub(signed(visible_count))
    }

    pub fn next_target(&self, visible_count: usize) -> isize {
        self.signed().saturating_add(signed(visible_count))
    }

    /// One step forward, or back to the start once the last page is reached
    /// and `repeat` is on.
    pub fn autoplay_target(&self, max: usize, repeat: bool) -> isize {
        if repeat && self.position >= max {
            0
        } else {
            self.signed().saturating_add(1)
        }
    }

    fn signed(&self) -> isize {
        signed(self.position)
    }
}

fn signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_into_bounds() {
        let max = max_position(10, 5);
        assert_eq!(max, 5);
        assert_eq!(clamp_target(-3, max), 0);
        assert_eq!(clamp_target(7, max), 5);
        assert_eq!(clamp_target(2, max), 2);
        assert_eq!(max_position(3, 5), 0);
        assert_eq!(max_position(0, 1), 0);
    }

    #[test]
    fn go_to_is_idempotent() {
        let mut state = PositionState::new();
        assert_eq!(state.go_to(4, 5), 4);
        assert_eq!(state.go_to(4, 5), 4);
        assert_eq!(state.get(), 4);
    }

    #[test]
    fn paging_moves_a_full_page() {
        let mut state = PositionState::new();
        state.go_to(2, 7);
        assert_eq!(state.next_target(3), 5);
        assert_eq!(state.prev_target(3), -1);
    }

    #[test]
    fn autoplay_steps_single_items_and_wraps_when_repeating() {
        let mut state = PositionState::new();
        state.go_to(4, 5);
        assert_eq!(state.autoplay_target(5, true), 5);
        assert_eq!(state.autoplay_target(5, false), 5);

        state.go_to(5, 5);
        assert_eq!(state.autoplay_target(5, true), 0);
        // Without repeat the caller's clamp pins it at max.
        assert_eq!(clamp_target(state.autoplay_target(5, false), 5), 5);
    }

    #[test]
    fn huge_page_sizes_saturate_instead_of_overflowing() {
        let mut state = PositionState::new();
        state.go_to(3, 5);
        assert_eq!(state.next_target(usize::MAX), isize::MAX);
        assert_eq!(state.prev_target(usize::MAX), 3 - isize::MAX);
        assert_eq!(clamp_target(state.prev_target(usize::MAX), 5), 0);
        assert_eq!(clamp_target(state.next_target(usize::MAX), 5), 5);
    }

    #[test]
    fn observed_index_is_clamped() {
        let mut state = PositionState::new();
        assert_eq!(state.set_observed(8, 5), 5);
        assert_eq!(state.set_observed(2, 5), 2);
        assert_eq!(state.set_observed(4, 0), 0);
    }
}
