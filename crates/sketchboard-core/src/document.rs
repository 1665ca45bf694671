//! Board content.

use crate::shapes::{Shape, Stroke};
use serde::{Deserialize, Serialize};

/// The committed content of the board.
///
/// Insertion order is paint order: later entries are drawn on top and are
/// hit-tested first. Objects are identified by their index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Committed shapes, back to front.
    pub shapes: Vec<Shape>,
    /// Committed freehand strokes, back to front.
    pub strokes: Vec<Stroke>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top. Returns its index.
    pub fn add_shape(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Append a stroke on top. Returns its index.
    pub fn add_stroke(&mut self, stroke: Stroke) -> usize {
        self.strokes.push(stroke);
        self.strokes.len() - 1
    }

    pub fn shape(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn shape_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    pub fn stroke(&self, index: usize) -> Option<&Stroke> {
        self.strokes.get(index)
    }

    pub fn stroke_mut(&mut self, index: usize) -> Option<&mut Stroke> {
        self.strokes.get_mut(index)
    }

    /// Remove the shapes at `indices`, keeping the survivors in order.
    /// Out-of-range indices are skipped. Returns how many were removed.
    pub fn remove_shapes(&mut self, indices: &[usize]) -> usize {
        remove_indices(&mut self.shapes, indices)
    }

    /// Remove the strokes at `indices`, keeping the survivors in order.
    pub fn remove_strokes(&mut self, indices: &[usize]) -> usize {
        remove_indices(&mut self.strokes, indices)
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.strokes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.strokes.is_empty()
    }

    /// Total number of objects.
    pub fn len(&self) -> usize {
        self.shapes.len() + self.strokes.len()
    }
}

fn remove_indices<T>(items: &mut Vec<T>, indices: &[usize]) -> usize {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut removed = 0;
    // Descending so earlier removals don't shift later indices.
    for &index in sorted.iter().rev() {
        if index < items.len() {
            items.remove(index);
            removed += 1;
        }
    }
    removed
}
