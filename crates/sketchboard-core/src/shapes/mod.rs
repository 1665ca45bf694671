//! Drawable objects on the board.
//!
//! Two families live in a [`Document`](crate::document::Document):
//! [`Shape`]s (rectangles and circles, committed by dragging out a preview)
//! and [`Stroke`]s (freehand polylines). Predicates are pure and dispatch
//! by exhaustive matching on the variant.

mod circle;
mod rectangle;
mod stroke;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use stroke::{Stroke, StrokeKind};

use crate::config::BoardConfig;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// A committed or preview shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    /// Point-in-shape test.
    pub fn contains(&self, point: Point) -> bool {
        match self {
            Shape::Rectangle(r) => r.contains(point),
            Shape::Circle(c) => c.contains(point),
        }
    }

    /// Whether `point` starts a resize gesture on this shape.
    ///
    /// Circles only have a handle (their boundary ring) when
    /// `circle_boundary_resize` is enabled.
    pub fn has_resize_handle(&self, point: Point, config: &BoardConfig) -> bool {
        match self {
            Shape::Rectangle(r) => r.has_resize_handle(point, config.handle_size),
            Shape::Circle(c) => {
                config.circle_boundary_resize && c.is_on_boundary(point, config.handle_size / 2.0)
            }
        }
    }

    /// Whether the shape is caught by the eraser square centred on `point`.
    pub fn overlaps_eraser(&self, point: Point, half_size: f64) -> bool {
        match self {
            Shape::Rectangle(r) => r.overlaps(eraser_region(point, half_size)),
            Shape::Circle(c) => c.overlaps_square(point, half_size),
        }
    }

    /// The point a move gesture drags: rectangle origin or circle centre.
    pub fn origin(&self) -> Point {
        match self {
            Shape::Rectangle(r) => r.position,
            Shape::Circle(c) => c.center,
        }
    }

    pub fn set_origin(&mut self, origin: Point) {
        match self {
            Shape::Rectangle(r) => r.position = origin,
            Shape::Circle(c) => c.center = origin,
        }
    }

    /// Resize so the shape's far edge follows `point`.
    pub fn resize_to(&mut self, point: Point) {
        match self {
            Shape::Rectangle(r) => r.resize_to(point),
            Shape::Circle(c) => c.resize_to(point),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(r) => r.bounds(),
            Shape::Circle(c) => c.bounds(),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Rectangle(r) => r.to_path(),
            Shape::Circle(c) => c.to_path(),
        }
    }

    pub fn is_rectangle(&self) -> bool {
        matches!(self, Shape::Rectangle(_))
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Shape::Circle(_))
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

/// The eraser square of side `2 * half_size` centred on `point`.
pub fn eraser_region(point: Point, half_size: f64) -> Rect {
    Rect::new(
        point.x - half_size,
        point.y - half_size,
        point.x + half_size,
        point.y + half_size,
    )
}
