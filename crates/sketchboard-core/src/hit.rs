//! Hit testing: point and region queries over a document.
//!
//! Point queries walk back to front (last painted = topmost) and return the
//! first index that matches.

use crate::config::BoardConfig;
use crate::document::Document;
use crate::shapes::eraser_region;
use kurbo::Point;

/// Indices of everything the eraser square touches, in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EraseHits {
    pub shape_indices: Vec<usize>,
    pub stroke_indices: Vec<usize>,
}

impl EraseHits {
    pub fn is_empty(&self) -> bool {
        self.shape_indices.is_empty() && self.stroke_indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shape_indices.len() + self.stroke_indices.len()
    }
}

/// Find the topmost shape containing `point`.
pub fn find_shape_at(doc: &Document, point: Point) -> Option<usize> {
    doc.shapes.iter().rposition(|shape| shape.contains(point))
}

/// Find the topmost stroke with a point within `threshold` of `point`.
pub fn find_stroke_at(doc: &Document, point: Point, threshold: f64) -> Option<usize> {
    doc.strokes
        .iter()
        .rposition(|stroke| stroke.is_near(point, threshold))
}

/// Find the topmost shape whose resize handle is under `point`.
pub fn find_resize_handle(doc: &Document, point: Point, config: &BoardConfig) -> Option<usize> {
    doc.shapes
        .iter()
        .rposition(|shape| shape.has_resize_handle(point, config))
}

/// Collect every shape and stroke overlapping the eraser square centred on `point`.
pub fn erase_overlap(doc: &Document, point: Point, half_size: f64) -> EraseHits {
    let region = eraser_region(point, half_size);

    let shape_indices = doc
        .shapes
        .iter()
        .enumerate()
        .filter(|(_, shape)| shape.overlaps_eraser(point, half_size))
        .map(|(i, _)| i)
        .collect();

    let stroke_indices = doc
        .strokes
        .iter()
        .enumerate()
        .filter(|(_, stroke)| stroke.touches(region))
        .map(|(i, _)| i)
        .collect();

    EraseHits {
        shape_indices,
        stroke_indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rectangle, Shape, Stroke, StrokeKind};

    fn doc_with_overlap() -> Document {
        let mut doc = Document::new();
        doc.add_shape(Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), 100.0, 100.0)));
        doc.add_shape(Shape::Rectangle(Rectangle::new(Point::new(50.0, 50.0), 100.0, 100.0)));
        doc
    }

    #[test]
    fn test_find_shape_prefers_topmost() {
        let doc = doc_with_overlap();
        assert_eq!(find_shape_at(&doc, Point::new(75.0, 75.0)), Some(1));
        assert_eq!(find_shape_at(&doc, Point::new(25.0, 25.0)), Some(0));
        assert_eq!(find_shape_at(&doc, Point::new(200.0, 200.0)), None);
    }

    #[test]
    fn test_find_shape_skips_negative_rectangles() {
        let mut doc = Document::new();
        doc.add_shape(Shape::Rectangle(Rectangle::new(Point::new(100.0, 100.0), -50.0, -50.0)));
        assert_eq!(find_shape_at(&doc, Point::new(75.0, 75.0)), None);
    }

    #[test]
    fn test_find_stroke_prefers_topmost() {
        let mut doc = Document::new();
        doc.add_stroke(Stroke::new(StrokeKind::Pencil, Point::new(10.0, 10.0)));
        doc.add_stroke(Stroke::new(StrokeKind::Brush, Point::new(12.0, 10.0)));

        assert_eq!(find_stroke_at(&doc, Point::new(11.0, 10.0), 8.0), Some(1));
        assert_eq!(find_stroke_at(&doc, Point::new(2.0, 10.0), 8.0), Some(0));
        assert_eq!(find_stroke_at(&doc, Point::new(40.0, 40.0), 8.0), None);
    }

    #[test]
    fn test_find_resize_handle() {
        let config = BoardConfig::default();
        let doc = doc_with_overlap();
        // Far corner of the lower rectangle is covered by the upper one,
        // but handles are tested independently of containment.
        assert_eq!(find_resize_handle(&doc, Point::new(95.0, 95.0), &config), Some(0));
        assert_eq!(find_resize_handle(&doc, Point::new(145.0, 145.0), &config), Some(1));
        assert_eq!(find_resize_handle(&doc, Point::new(50.0, 50.0), &config), None);
    }

    #[test]
    fn test_erase_overlap_mixed() {
        let mut doc = Document::new();
        doc.add_shape(Shape::Rectangle(Rectangle::new(Point::new(10.0, 10.0), 50.0, 30.0)));
        doc.add_shape(Shape::Circle(Circle::new(Point::new(200.0, 200.0), 10.0)));
        doc.add_shape(Shape::Circle(Circle::new(Point::new(40.0, 0.0), 5.0)));
        doc.add_stroke(Stroke::new(StrokeKind::Pencil, Point::new(30.0, 30.0)));
        doc.add_stroke(Stroke::new(StrokeKind::Pencil, Point::new(100.0, 100.0)));

        let hits = erase_overlap(&doc, Point::new(20.0, 20.0), 15.0);
        assert_eq!(hits.shape_indices, vec![0]);
        assert_eq!(hits.stroke_indices, vec![0]);
        assert_eq!(hits.len(), 2);

        // Circle at (40, 0) r=5: centre distance ~28.3 <= 5 + 25.
        let hits = erase_overlap(&doc, Point::new(20.0, 20.0), 25.0);
        assert_eq!(hits.shape_indices, vec![0, 2]);
    }

    #[test]
    fn test_erase_overlap_nothing() {
        let doc = doc_with_overlap();
        let hits = erase_overlap(&doc, Point::new(500.0, 500.0), 15.0);
        assert!(hits.is_empty());
    }
}
