//! Axis-aligned rectangle shape.

use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its origin corner and extents.
///
/// `width` and `height` are stored exactly as drawn. Dragging "backwards"
/// produces negative extents, which are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Origin corner (where the drag started).
    pub position: Point,
    /// Horizontal extent, possibly negative.
    pub width: f64,
    /// Vertical extent, possibly negative.
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// Create a rectangle spanning from `anchor` to `current` without normalizing.
    pub fn from_drag(anchor: Point, current: Point) -> Self {
        Self::new(anchor, current.x - anchor.x, current.y - anchor.y)
    }

    /// The corner opposite the origin.
    pub fn far_corner(&self) -> Point {
        Point::new(self.position.x + self.width, self.position.y + self.height)
    }

    /// Literal containment test on the stored extents.
    ///
    /// A rectangle with a negative width or height contains no point.
    pub fn contains(&self, point: Point) -> bool {
        let far = self.far_corner();
        point.x >= self.position.x
            && point.x <= far.x
            && point.y >= self.position.y
            && point.y <= far.y
    }

    /// Whether `point` falls in the square resize handle at the far corner.
    pub fn has_resize_handle(&self, point: Point, handle_size: f64) -> bool {
        let far = self.far_corner();
        point.x >= far.x - handle_size
            && point.x <= far.x
            && point.y >= far.y - handle_size
            && point.y <= far.y
    }

    /// Strict interval overlap against an axis-aligned region.
    ///
    /// Each interval is ordered first, so a rectangle drawn backwards is
    /// erasable like any other. Touching edges do not overlap.
    pub fn overlaps(&self, region: Rect) -> bool {
        let own = self.bounds();
        own.x0 < region.x1 && own.x1 > region.x0 && own.y0 < region.y1 && own.y1 > region.y0
    }

    /// Set the far corner to `point`.
    pub fn resize_to(&mut self, point: Point) {
        self.width = point.x - self.position.x;
        self.height = point.y - self.position.y;
    }

    /// Normalized bounds (for painting).
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.position, self.far_corner())
    }

    /// Path for rendering.
    pub fn to_path(&self) -> BezPath {
        self.bounds().to_path(0.1)
    }
}
