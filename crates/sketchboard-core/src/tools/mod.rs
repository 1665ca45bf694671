//! Drawing modes.

use crate::shapes::{Circle, Rectangle, Shape, StrokeKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The persistent tool selection governing how a new gesture is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Mode {
    #[default]
    Rectangle,
    Circle,
    Pencil,
    Brush,
    Erase,
}

/// Returned when a mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown mode: {0}")]
pub struct ModeParseError(pub String);

impl Mode {
    /// All modes, in toolbar order.
    pub const ALL: [Mode; 5] = [
        Mode::Rectangle,
        Mode::Circle,
        Mode::Pencil,
        Mode::Brush,
        Mode::Erase,
    ];

    /// Lowercase name used for parsing and display.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Rectangle => "rectangle",
            Mode::Circle => "circle",
            Mode::Pencil => "pencil",
            Mode::Brush => "brush",
            Mode::Erase => "erase",
        }
    }

    /// The stroke kind drawn in this mode, for freehand modes.
    pub fn stroke_kind(self) -> Option<StrokeKind> {
        match self {
            Mode::Pencil => Some(StrokeKind::Pencil),
            Mode::Brush => Some(StrokeKind::Brush),
            Mode::Rectangle | Mode::Circle | Mode::Erase => None,
        }
    }

    /// Build the preview shape for a drag from `anchor` to `current`.
    ///
    /// Returns `None` for modes that do not draft shapes.
    pub fn draft_shape(self, anchor: Point, current: Point) -> Option<Shape> {
        match self {
            Mode::Rectangle => Some(Shape::Rectangle(Rectangle::from_drag(anchor, current))),
            Mode::Circle => Some(Shape::Circle(Circle::from_drag(anchor, current))),
            Mode::Pencil | Mode::Brush | Mode::Erase => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModeParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!("circle".parse::<Mode>(), Ok(Mode::Circle));
        assert_eq!("Brush".parse::<Mode>(), Ok(Mode::Brush));
        assert_eq!(" ERASE ".parse::<Mode>(), Ok(Mode::Erase));
        assert_eq!(
            "lasso".parse::<Mode>(),
            Err(ModeParseError("lasso".to_string()))
        );
    }

    #[test]
    fn test_display_roundtrip() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn test_stroke_kind() {
        assert_eq!(Mode::Pencil.stroke_kind(), Some(StrokeKind::Pencil));
        assert_eq!(Mode::Brush.stroke_kind(), Some(StrokeKind::Brush));
        assert_eq!(Mode::Erase.stroke_kind(), None);
    }

    #[test]
    fn test_draft_shape() {
        let anchor = Point::new(10.0, 10.0);
        let rect = Mode::Rectangle.draft_shape(anchor, Point::new(60.0, 40.0));
        assert_eq!(
            rect,
            Some(Shape::Rectangle(Rectangle::new(anchor, 50.0, 30.0)))
        );

        match Mode::Circle.draft_shape(anchor, Point::new(13.0, 14.0)) {
            Some(Shape::Circle(c)) => {
                assert_eq!(c.center, anchor);
                assert!((c.radius - 5.0).abs() < 1e-9);
            }
            other => panic!("expected circle preview, got {other:?}"),
        }

        assert!(Mode::Pencil.draft_shape(anchor, anchor).is_none());
    }
}
