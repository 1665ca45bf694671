//! Circle shape.

use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A circle given by its centre and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius, never negative.
    pub radius: f64,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Create a circle centred on `anchor` whose boundary passes through `current`.
    pub fn from_drag(anchor: Point, current: Point) -> Self {
        Self::new(anchor, anchor.distance(current))
    }

    pub fn contains(&self, point: Point) -> bool {
        self.center.distance(point) <= self.radius
    }

    /// Whether `point` lies within `tolerance` of the circle's boundary.
    pub fn is_on_boundary(&self, point: Point, tolerance: f64) -> bool {
        (self.center.distance(point) - self.radius).abs() <= tolerance
    }

    /// Whether the circle touches the square of half side `half_size` centred on `point`.
    ///
    /// This is the centre-distance approximation, not an exact
    /// circle/square intersection.
    pub fn overlaps_square(&self, point: Point, half_size: f64) -> bool {
        self.center.distance(point) <= self.radius + half_size
    }

    /// Set the radius so the boundary passes through `point`.
    pub fn resize_to(&mut self, point: Point) {
        self.radius = self.center.distance(point);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    pub fn to_path(&self) -> BezPath {
        KurboCircle::new(self.center, self.radius).to_path(0.1)
    }
}
