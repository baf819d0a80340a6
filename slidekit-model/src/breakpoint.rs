//! Width-range rules that decide how many items a slider shows at once.

/// A single sanitized breakpoint rule.
///
/// Both bounds are inclusive. A rule without `start` covers every width up
/// to `end`, a rule without `end` covers every width from `start` upwards,
/// and a rule with neither matches unconditionally.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakpointRule {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub start: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub end: Option<f32>,
    /// Visible item count while this rule applies. Always at least 1.
    pub size: usize,
}

impl BreakpointRule {
    pub const fn new(start: Option<f32>, end: Option<f32>, size: usize) -> Self {
        Self { start, end, size }
    }

    /// Rule covering every width up to and including `end`.
    pub const fn up_to(end: f32, size: usize) -> Self {
        Self::new(None, Some(end), size)
    }

    pub const fn between(start: f32, end: f32, size: usize) -> Self {
        Self::new(Some(start), Some(end), size)
    }

    /// Rule covering every width from `start` upwards.
    pub const fn starting_at(start: f32, size: usize) -> Self {
        Self::new(Some(start), None, size)
    }

    pub const fn always(size: usize) -> Self {
        Self::new(None, None, size)
    }

    /// Whether `width` falls inside this rule's inclusive range.
    #[inline]
    pub fn matches(&self, width: f32) -> bool {
        self.start.is_none_or(|start| start <= width)
            && self.end.is_none_or(|end| end >= width)
    }
}

impl std::fmt::Display for BreakpointRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.start, self.end) {
            (None, None) => write!(f, "any width: {}", self.size),
            (None, Some(end)) => write!(f, "<= {end}px: {}", self.size),
            (Some(start), None) => write!(f, ">= {start}px: {}", self.size),
            (Some(start), Some(end)) => {
                write!(f, "{start}px - {end}px: {}", self.size)
            }
        }
    }
}
