//! Inline style attributes emitted by the layout engine.

use std::fmt;

/// A CSS pixel length.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Px(pub f32);

impl Px {
    pub const ZERO: Px = Px(0.0);
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl std::ops::Neg for Px {
    type Output = Px;

    fn neg(self) -> Self::Output {
        Px(-self.0)
    }
}

/// Horizontal box properties the slider sets on one element.
///
/// Unset properties are left to the stylesheet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ElementStyle {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub width: Option<Px>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub padding_left: Option<Px>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub padding_right: Option<Px>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub margin_left: Option<Px>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub margin_right: Option<Px>,
}

impl ElementStyle {
    pub fn is_empty(&self) -> bool {
        self.declarations().next().is_none()
    }

    /// `(property, value)` pairs in a stable order, skipping unset ones.
    pub fn declarations(&self) -> impl Iterator<Item = (&'static str, Px)> {
        [
            ("width", self.width),
            ("padding-left", self.padding_left),
            ("padding-right", self.padding_right),
            ("margin-left", self.margin_left),
            ("margin-right", self.margin_right),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }

    /// Render as an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        self.declarations()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Styles for every region of the slider markup.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderStyle {
    pub container: ElementStyle,
    pub list: ElementStyle,
    pub item: ElementStyle,
    pub tail: ElementStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_formats_like_css() {
        assert_eq!(Px(24.0).to_string(), "24px");
        assert_eq!((-Px(8.0)).to_string(), "-8px");
        assert_eq!(Px(247.2).to_string(), "247.2px");
    }

    #[test]
    fn css_skips_unset_properties() {
        let style = ElementStyle {
            margin_left: Some(Px(-24.0)),
            margin_right: Some(Px(-24.0)),
            ..Default::default()
        };
        assert_eq!(style.to_css(), "margin-left: -24px; margin-right: -24px");
        assert!(ElementStyle::default().is_empty());
        assert_eq!(ElementStyle::default().to_css(), "");
    }
}
