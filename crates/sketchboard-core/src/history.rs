//! Snapshot-based undo/redo.

use crate::document::Document;
use crate::shapes::{Shape, Stroke};

/// An immutable deep copy of the document at a gesture boundary.
#[derive(Debug, Clone, PartialEq)]
struct HistoryState {
    shapes: Vec<Shape>,
    strokes: Vec<Stroke>,
}

impl HistoryState {
    fn capture(doc: &Document) -> Self {
        Self {
            shapes: doc.shapes.clone(),
            strokes: doc.strokes.clone(),
        }
    }

    fn into_document(self) -> Document {
        Document {
            shapes: self.shapes,
            strokes: self.strokes,
        }
    }
}

/// Undo and redo stacks of full document snapshots.
///
/// Take one snapshot per gesture, before the gesture mutates the document,
/// so a single undo reverses the whole gesture.
#[derive(Debug, Clone, Default)]
pub struct HistoryManager {
    undo_stack: Vec<HistoryState>,
    redo_stack: Vec<HistoryState>,
    /// Maximum undo depth (None = unbounded).
    limit: Option<usize>,
}

impl HistoryManager {
    /// Create an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `limit` undo states.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Push the current state to the undo stack (call before making changes).
    pub fn snapshot(&mut self, doc: &Document) {
        self.undo_stack.push(HistoryState::capture(doc));

        // A new change invalidates everything that was undone.
        self.redo_stack.clear();

        if let Some(limit) = self.limit {
            if self.undo_stack.len() > limit {
                let excess = self.undo_stack.len() - limit;
                self.undo_stack.drain(..excess);
            }
        }
    }

    /// Step back one gesture.
    /// Returns the document to restore, or `None` if there is nothing to undo.
    pub fn undo(&mut self, current: &Document) -> Option<Document> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(HistoryState::capture(current));
        Some(snapshot.into_document())
    }

    /// Step forward one undone gesture.
    /// Returns the document to restore, or `None` if there is nothing to redo.
    pub fn redo(&mut self, current: &Document) -> Option<Document> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(HistoryState::capture(current));
        Some(snapshot.into_document())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Rectangle, StrokeKind};
    use kurbo::Point;

    fn rect(x: f64) -> Shape {
        Shape::Rectangle(Rectangle::new(Point::new(x, 0.0), 10.0, 10.0))
    }

    #[test]
    fn test_undo_redo_add_shape() {
        let mut history = HistoryManager::new();
        let mut doc = Document::new();

        history.snapshot(&doc);
        doc.add_shape(rect(0.0));
        let after = doc.clone();

        assert!(history.can_undo());
        doc = history.undo(&doc).unwrap();
        assert!(doc.is_empty());
        assert!(history.can_redo());

        doc = history.redo(&doc).unwrap();
        assert_eq!(doc, after);
        assert_eq!(history.undo_len(), 1);
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn test_snapshot_is_independent_copy() {
        let mut history = HistoryManager::new();
        let mut doc = Document::new();
        doc.add_stroke(Stroke::new(StrokeKind::Pencil, Point::ZERO));

        history.snapshot(&doc);
        doc.strokes[0].add_point(Point::new(5.0, 5.0));

        let restored = history.undo(&doc).unwrap();
        assert_eq!(restored.strokes[0].len(), 1);
    }

    #[test]
    fn test_snapshot_clears_redo() {
        let mut history = HistoryManager::new();
        let mut doc = Document::new();

        history.snapshot(&doc);
        doc.add_shape(rect(0.0));
        doc = history.undo(&doc).unwrap();
        assert!(history.can_redo());

        history.snapshot(&doc);
        doc.add_shape(rect(50.0));
        assert!(!history.can_redo());
        assert!(history.redo(&doc).is_none());
    }

    #[test]
    fn test_undo_empty_stack() {
        let mut history = HistoryManager::new();
        let doc = Document::new();

        assert!(!history.can_undo());
        assert!(history.undo(&doc).is_none());
        assert!(!history.can_redo());
        assert!(history.redo(&doc).is_none());
    }

    #[test]
    fn test_history_limit_drops_oldest() {
        let mut history = HistoryManager::with_limit(Some(2));
        let mut doc = Document::new();

        for x in [0.0, 1.0, 2.0] {
            history.snapshot(&doc);
            doc.add_shape(rect(x));
        }
        assert_eq!(history.undo_len(), 2);

        doc = history.undo(&doc).unwrap();
        doc = history.undo(&doc).unwrap();
        // The empty-document snapshot was dropped.
        assert_eq!(doc.shapes, vec![rect(0.0)]);
        assert!(history.undo(&doc).is_none());
    }

    #[test]
    fn test_clear() {
        let mut history = HistoryManager::new();
        let doc = Document::new();
        history.snapshot(&doc);
        history.clear();
        assert!(!history.can_undo());
    }
}
