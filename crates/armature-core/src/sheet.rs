//! Sheet formats, orientation, and layout selection.
//!
//! Requests carry these settings as raw strings. The [`FromStr`]
//! implementations are the single place where membership in the supported
//! sets is decided: the validator surfaces their errors verbatim, and
//! [`LayoutType::parse_lenient`] provides the permissive fallback the
//! layout engine promises.

use std::{fmt, str::FromStr};

use log::warn;
use thiserror::Error;

use crate::geometry::Size;

/// Error for configuration strings outside the supported sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported {kind} '{value}'. Supported values: {allowed}")]
pub struct UnsupportedValue {
    kind: &'static str,
    value: String,
    allowed: &'static str,
}

impl UnsupportedValue {
    fn new(kind: &'static str, value: &str, allowed: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            allowed,
        }
    }
}

/// Standard sheet format with fixed millimeter dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageFormat {
    A0,
    A1,
    A2,
    #[default]
    A3,
    A4,
}

impl PageFormat {
    /// Every supported format, largest first.
    pub const ALL: [PageFormat; 5] = [
        PageFormat::A0,
        PageFormat::A1,
        PageFormat::A2,
        PageFormat::A3,
        PageFormat::A4,
    ];

    /// Sheet dimensions in millimeters, long side first.
    pub fn dimensions(self) -> Size {
        match self {
            PageFormat::A0 => Size::new(1189.0, 841.0),
            PageFormat::A1 => Size::new(841.0, 594.0),
            PageFormat::A2 => Size::new(594.0, 420.0),
            PageFormat::A3 => Size::new(420.0, 297.0),
            PageFormat::A4 => Size::new(297.0, 210.0),
        }
    }
}

impl fmt::Display for PageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageFormat::A0 => write!(f, "A0"),
            PageFormat::A1 => write!(f, "A1"),
            PageFormat::A2 => write!(f, "A2"),
            PageFormat::A3 => write!(f, "A3"),
            PageFormat::A4 => write!(f, "A4"),
        }
    }
}

impl FromStr for PageFormat {
    type Err = UnsupportedValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A0" => Ok(PageFormat::A0),
            "A1" => Ok(PageFormat::A1),
            "A2" => Ok(PageFormat::A2),
            "A3" => Ok(PageFormat::A3),
            "A4" => Ok(PageFormat::A4),
            _ => Err(UnsupportedValue::new(
                "page format",
                s,
                "A0, A1, A2, A3, A4",
            )),
        }
    }
}

/// Which way the sheet is turned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

impl Orientation {
    /// Every supported orientation.
    pub const ALL: [Orientation; 2] = [Orientation::Portrait, Orientation::Landscape];

    /// Orients raw sheet dimensions: landscape puts the long side
    /// horizontal, portrait puts it vertical.
    pub fn apply(self, size: Size) -> Size {
        match self {
            Orientation::Landscape => size.long_side_first(),
            Orientation::Portrait => size.short_side_first(),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

impl FromStr for Orientation {
    type Err = UnsupportedValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            _ => Err(UnsupportedValue::new(
                "orientation",
                s,
                "portrait, landscape",
            )),
        }
    }
}

/// Placement strategy for the components of a scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LayoutType {
    /// Levels stacked top to bottom, each level centered and row-wrapped.
    #[default]
    Tree,
    /// A single centered column in input order, hierarchy ignored.
    Vertical,
    /// A single vertically centered row in input order, never wrapped.
    Horizontal,
}

impl LayoutType {
    /// Every supported layout type.
    pub const ALL: [LayoutType; 3] = [
        LayoutType::Tree,
        LayoutType::Vertical,
        LayoutType::Horizontal,
    ];

    /// Resolve a raw layout-type string, degrading to [`LayoutType::Tree`]
    /// when the value is unknown.
    ///
    /// The strict membership check belongs to the validator; this lenient
    /// path mirrors the layout engine's permissive contract and logs the
    /// fallback instead of failing.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            warn!(value; "Unknown layout type, falling back to tree");
            LayoutType::Tree
        })
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutType::Tree => write!(f, "tree"),
            LayoutType::Vertical => write!(f, "vertical"),
            LayoutType::Horizontal => write!(f, "horizontal"),
        }
    }
}

impl FromStr for LayoutType {
    type Err = UnsupportedValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree" => Ok(LayoutType::Tree),
            "vertical" => Ok(LayoutType::Vertical),
            "horizontal" => Ok(LayoutType::Horizontal),
            _ => Err(UnsupportedValue::new(
                "layout type",
                s,
                "tree, vertical, horizontal",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_format_dimensions() {
        assert_eq!(PageFormat::A0.dimensions(), Size::new(1189.0, 841.0));
        assert_eq!(PageFormat::A4.dimensions(), Size::new(297.0, 210.0));
    }

    #[test]
    fn test_page_format_round_trip() {
        for format in PageFormat::ALL {
            let parsed: PageFormat = format.to_string().parse().expect("round trip");
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn test_page_format_rejects_unknown() {
        let err = "B5".parse::<PageFormat>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("B5"));
        assert!(message.contains("A0, A1, A2, A3, A4"));
    }

    #[test]
    fn test_orientation_apply() {
        let a4 = PageFormat::A4.dimensions();

        let landscape = Orientation::Landscape.apply(a4);
        assert_eq!(landscape, Size::new(297.0, 210.0));

        let portrait = Orientation::Portrait.apply(a4);
        assert_eq!(portrait, Size::new(210.0, 297.0));
    }

    #[test]
    fn test_orientation_rejects_unknown() {
        let err = "diagonal".parse::<Orientation>().unwrap_err();
        assert!(err.to_string().contains("portrait, landscape"));
    }

    #[test]
    fn test_layout_type_round_trip() {
        for layout_type in LayoutType::ALL {
            let parsed: LayoutType = layout_type.to_string().parse().expect("round trip");
            assert_eq!(parsed, layout_type);
        }
    }

    #[test]
    fn test_layout_type_rejects_unknown() {
        let err = "radial".parse::<LayoutType>().unwrap_err();
        assert!(err.to_string().contains("tree, vertical, horizontal"));
    }

    #[test]
    fn test_layout_type_parse_lenient_falls_back_to_tree() {
        assert_eq!(LayoutType::parse_lenient("radial"), LayoutType::Tree);
        assert_eq!(LayoutType::parse_lenient("vertical"), LayoutType::Vertical);
    }

    #[test]
    fn test_defaults_match_request_defaults() {
        assert_eq!(PageFormat::default(), PageFormat::A3);
        assert_eq!(Orientation::default(), Orientation::Landscape);
        assert_eq!(LayoutType::default(), LayoutType::Tree);
    }
}
