//! Read-only render state handed to the repaint collaborator.

use crate::shapes::{Shape, Stroke};
use serde::Serialize;

/// Everything needed to repaint the board from scratch.
///
/// Borrowed from the controller; a renderer must treat it as a snapshot
/// and copy whatever it needs to keep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderState<'a> {
    /// Committed shapes, back to front.
    pub shapes: &'a [Shape],
    /// Committed strokes, back to front.
    pub strokes: &'a [Stroke],
    /// Shape being drafted, drawn on top of everything.
    pub preview: Option<&'a Shape>,
    /// Shape being moved or resized.
    pub selected_index: Option<usize>,
}

impl RenderState<'_> {
    /// The selected shape, if any.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected_index.and_then(|i| self.shapes.get(i))
    }
}

/// Receives a notification every time the render state changes.
pub trait BoardObserver {
    fn board_changed(&mut self, state: &RenderState<'_>);
}
