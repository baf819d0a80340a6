//! Raw, caller-supplied slider options.
//!
//! Every field is optional. Absent fields are filled in by the configuration
//! builder in `slidekit-core`; nothing here applies defaults.

/// Top-level option tree accepted by a slider.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderOptions {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub navigation: Option<NavigationOptions>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub item: Option<ItemOptions>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub list: Option<ListOptions>,
    /// User breakpoint rules. These are consulted before the fallback table.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub responsive: Option<Vec<RawBreakpointRule>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub position: Option<PositionOptions>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub autoplay: Option<AutoplayOptions>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigationOptions {
    /// Navigation buttons render only when the window is wider than this (px).
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::lenient::number_f32",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub start: Option<f32>,
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::lenient::text",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemOptions {
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::lenient::text",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub class: Option<String>,
    /// Gap between adjacent items (px).
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::lenient::number_f32",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub padding: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListOptions {
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::lenient::text",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub class: Option<String>,
    /// Window width at which the list stops bleeding to the viewport edges
    /// and respects its container instead (px).
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::lenient::number_f32",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub windowed: Option<f32>,
    /// Horizontal padding of the list in full-bleed mode (px).
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::lenient::number_f32",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub padding: Option<f32>,
}

/// A breakpoint rule as written by the caller. Sanitized into a
/// [`BreakpointRule`](crate::BreakpointRule) by the configuration builder.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawBreakpointRule {
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::lenient::number_f32",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub start: Option<f32>,
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::lenient::number_f32",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub end: Option<f32>,
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::lenient::number_f64",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub size: Option<f64>,
}

impl RawBreakpointRule {
    pub fn new(start: Option<f32>, end: Option<f32>, size: usize) -> Self {
        Self {
            start,
            end,
            size: Some(size as f64),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PositionOptions {
    /// Index to scroll to once the slider has been measured.
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::lenient::number_f64",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub start: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AutoplayOptions {
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::lenient::flag",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub play: Option<bool>,
    /// Delay between autoplay steps in milliseconds.
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::lenient::number_f64",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub speed: Option<f64>,
    /// Wrap back to the first item after the last page.
    #[cfg_attr(
        feature = "serde",
        serde(
            deserialize_with = "crate::lenient::flag",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub repeat: Option<bool>,
}
