//! Freehand strokes.

use kurbo::{BezPath, Point, Rect};
use peniko::Color;
use serde::{Deserialize, Deserializer, Serialize};

/// The pen a stroke was drawn with. Width and color follow from the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrokeKind {
    Pencil,
    Brush,
}

impl StrokeKind {
    /// Line width in surface units.
    pub fn width(self) -> f64 {
        match self {
            StrokeKind::Pencil => 2.0,
            StrokeKind::Brush => 10.0,
        }
    }

    /// Paint color.
    pub fn color(self) -> Color {
        match self {
            StrokeKind::Pencil => Color::from_rgba8(0, 0, 0, 255),
            StrokeKind::Brush => Color::from_rgba8(40, 40, 40, 200),
        }
    }
}

/// A freehand polyline. Always holds at least one point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub kind: StrokeKind,
    points: Vec<Point>,
}

impl Stroke {
    /// Start a stroke at `start`.
    pub fn new(kind: StrokeKind, start: Point) -> Self {
        Self {
            kind,
            points: vec![start],
        }
    }

    /// Build a stroke from existing points. Returns `None` for an empty list.
    pub fn from_points(kind: StrokeKind, points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { kind, points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Append a point to the path.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the stroke has no points. Every constructor and the
    /// deserializer reject that, so this is false for any valid stroke.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether any recorded point lies within `threshold` of `point`.
    ///
    /// Only the sampled points are tested, not the segments between them.
    pub fn is_near(&self, point: Point, threshold: f64) -> bool {
        self.points.iter().any(|p| p.distance(point) <= threshold)
    }

    /// Whether any recorded point lies inside `region` (edges included).
    pub fn touches(&self, region: Rect) -> bool {
        self.points.iter().any(|p| {
            p.x >= region.x0 && p.x <= region.x1 && p.y >= region.y0 && p.y <= region.y1
        })
    }

    pub fn bounds(&self) -> Rect {
        let Some(&first) = self.points.first() else {
            return Rect::ZERO;
        };
        self.points
            .iter()
            .skip(1)
            .fold(Rect::from_points(first, first), |acc, p| acc.union_pt(*p))
    }

    /// Polyline path for rendering.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut iter = self.points.iter();
        if let Some(first) = iter.next() {
            path.move_to(*first);
            for point in iter {
                path.line_to(*point);
            }
        }
        path
    }
}

impl<'de> Deserialize<'de> for Stroke {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        #[derive(Deserialize)]
        struct RawStroke {
            kind: StrokeKind,
            points: Vec<Point>,
        }

        let raw = RawStroke::deserialize(deserializer)?;
        Stroke::from_points(raw.kind, raw.points)
            .ok_or_else(|| D::Error::custom("stroke must contain at least one point"))
    }
}
