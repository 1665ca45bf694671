//! Pointer gesture state machine.
//!
//! The [`GestureController`] owns the document and its history. Each pointer
//! event is handled synchronously: hit-test, snapshot if the gesture is about
//! to mutate, mutate, then notify the observer.
//!
//! Exactly one gesture is open at a time. A pointer-down that arrives while a
//! gesture is open is ignored; `Up` and `Leave` both close the open gesture.

use crate::config::BoardConfig;
use crate::document::Document;
use crate::hit;
use crate::history::HistoryManager;
use crate::input::{PointerButton, PointerEvent};
use crate::render::{BoardObserver, RenderState};
use crate::shapes::{Shape, Stroke, StrokeKind};
use crate::tools::Mode;
use kurbo::{Point, Vec2};
use std::fmt;

/// The gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Dragging out a new rectangle or circle. Nothing is committed until release.
    DraftingShape {
        anchor: Point,
        /// Mode captured at pointer-down.
        mode: Mode,
        preview: Option<Shape>,
    },
    /// Appending points to the stroke at `stroke`.
    FreehandDrawing { stroke: usize },
    /// Dragging the shape at `index`; `offset` is pointer minus shape origin.
    MovingShape { index: usize, offset: Vec2 },
    /// Dragging the resize handle of the shape at `index`.
    ResizingShape { index: usize },
    Erasing,
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    /// The uncommitted preview shape, while drafting.
    pub fn preview(&self) -> Option<&Shape> {
        match self {
            GestureState::DraftingShape { preview, .. } => preview.as_ref(),
            _ => None,
        }
    }

    /// The shape being moved or resized.
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            GestureState::MovingShape { index, .. } | GestureState::ResizingShape { index } => {
                Some(*index)
            }
            _ => None,
        }
    }
}

/// Turns pointer events into document mutations.
pub struct GestureController {
    document: Document,
    history: HistoryManager,
    config: BoardConfig,
    mode: Mode,
    state: GestureState,
    /// Mode to restore when a momentary erase gesture ends.
    mode_before_override: Option<Mode>,
    observer: Option<Box<dyn BoardObserver>>,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GestureController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureController")
            .field("document", &self.document)
            .field("history", &self.history)
            .field("config", &self.config)
            .field("mode", &self.mode)
            .field("state", &self.state)
            .field("mode_before_override", &self.mode_before_override)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl GestureController {
    /// Create a controller with an empty document and default config.
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Self::with_document(Document::new(), config)
    }

    /// Create a controller editing an existing document.
    pub fn with_document(document: Document, config: BoardConfig) -> Self {
        Self {
            document,
            history: HistoryManager::with_limit(config.history_limit),
            config,
            mode: Mode::default(),
            state: GestureState::Idle,
            mode_before_override: None,
            observer: None,
        }
    }

    /// Register the observer notified after every visible change.
    pub fn set_observer(&mut self, observer: impl BoardObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Select the active mode.
    ///
    /// During a momentary erase gesture this changes the mode restored on
    /// release, so the explicit choice survives the override.
    pub fn set_mode(&mut self, mode: Mode) {
        match self.mode_before_override.as_mut() {
            Some(saved) => *saved = mode,
            None => self.mode = mode,
        }
        log::debug!("Mode set to {}", mode);
    }

    /// Select the active mode by name. Unknown names are ignored.
    /// Returns true if the mode was applied.
    pub fn set_mode_by_name(&mut self, name: &str) -> bool {
        match name.parse::<Mode>() {
            Ok(mode) => {
                self.set_mode(mode);
                true
            }
            Err(e) => {
                log::warn!("Ignoring mode change: {}", e);
                false
            }
        }
    }

    /// Current render state.
    pub fn render_state(&self) -> RenderState<'_> {
        RenderState {
            shapes: &self.document.shapes,
            strokes: &self.document.strokes,
            preview: self.state.preview(),
            selected_index: self.state.selected_index(),
        }
    }

    /// Dispatch a pointer event to the matching entry point.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, button } => self.pointer_down(position, button),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position, button } => self.pointer_up(position, button),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    /// Handle a pointer press: pick the gesture to start.
    pub fn pointer_down(&mut self, point: Point, button: PointerButton) {
        if !self.state.is_idle() {
            log::warn!(
                "Ignoring pointer down at ({}, {}): gesture {:?} still open",
                point.x,
                point.y,
                self.state
            );
            return;
        }

        let changed = if button == self.config.erase_button {
            self.mode_before_override = Some(self.mode);
            self.mode = Mode::Erase;
            log::debug!("Momentary erase engaged with {:?} button", button);
            self.begin_erase(point)
        } else if let Some(index) = hit::find_resize_handle(&self.document, point, &self.config) {
            self.begin_resize(index)
        } else if let Some(index) = self.movable_shape_at(point) {
            self.begin_move(index, point)
        } else if self.mode == Mode::Erase {
            self.begin_erase(point)
        } else if let Some(kind) = self.mode.stroke_kind() {
            self.begin_freehand(kind, point)
        } else {
            // Nothing is mutated until the draft is committed on release.
            self.state = GestureState::DraftingShape {
                anchor: point,
                mode: self.mode,
                preview: None,
            };
            log::debug!("Drafting {} from ({}, {})", self.mode, point.x, point.y);
            false
        };

        if changed {
            self.notify();
        }
    }

    /// Handle pointer motion for the open gesture.
    pub fn pointer_move(&mut self, point: Point) {
        let changed = match self.state {
            GestureState::Idle => false,
            GestureState::Erasing => self.erase_pass(point),
            GestureState::MovingShape { index, offset } => match self.document.shape_mut(index) {
                Some(shape) => {
                    shape.set_origin(point - offset);
                    true
                }
                None => false,
            },
            GestureState::ResizingShape { index } => match self.document.shape_mut(index) {
                Some(shape) => {
                    shape.resize_to(point);
                    true
                }
                None => false,
            },
            GestureState::FreehandDrawing { stroke } => match self.document.stroke_mut(stroke) {
                Some(stroke) => {
                    stroke.add_point(point);
                    true
                }
                None => false,
            },
            GestureState::DraftingShape { anchor, mode, .. } => {
                self.state = GestureState::DraftingShape {
                    anchor,
                    mode,
                    preview: mode.draft_shape(anchor, point),
                };
                true
            }
        };

        if changed {
            log::trace!("Pointer move to ({}, {}) in {:?}", point.x, point.y, self.state);
            self.notify();
        }
    }

    /// Handle a pointer release. Closes the open gesture.
    pub fn pointer_up(&mut self, point: Point, button: PointerButton) {
        log::trace!("Pointer up at ({}, {}) with {:?}", point.x, point.y, button);
        self.end_gesture();
    }

    /// Handle the pointer leaving the surface. Closes the open gesture like a release.
    pub fn pointer_leave(&mut self) {
        log::trace!("Pointer left the surface");
        self.end_gesture();
    }

    /// Undo the last gesture. Returns true if anything changed.
    /// Ignored while a gesture is open.
    pub fn undo(&mut self) -> bool {
        if !self.state.is_idle() {
            log::debug!("Ignoring undo during {:?}", self.state);
            return false;
        }
        match self.history.undo(&self.document) {
            Some(document) => {
                self.document = document;
                log::debug!("Undo ({} left)", self.history.undo_len());
                self.notify();
                true
            }
            None => false,
        }
    }

    /// Redo the last undone gesture. Returns true if anything changed.
    /// Ignored while a gesture is open.
    pub fn redo(&mut self) -> bool {
        if !self.state.is_idle() {
            log::debug!("Ignoring redo during {:?}", self.state);
            return false;
        }
        match self.history.redo(&self.document) {
            Some(document) => {
                self.document = document;
                log::debug!("Redo ({} left)", self.history.redo_len());
                self.notify();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn movable_shape_at(&self, point: Point) -> Option<usize> {
        if self.mode == Mode::Erase {
            return None;
        }
        hit::find_shape_at(&self.document, point)
    }

    fn begin_resize(&mut self, index: usize) -> bool {
        self.history.snapshot(&self.document);
        self.state = GestureState::ResizingShape { index };
        log::debug!("Resize started on shape {}", index);
        true
    }

    fn begin_move(&mut self, index: usize, point: Point) -> bool {
        let Some(origin) = self.document.shape(index).map(Shape::origin) else {
            return false;
        };
        self.history.snapshot(&self.document);
        self.state = GestureState::MovingShape {
            index,
            offset: point - origin,
        };
        log::debug!("Move started on shape {}", index);
        true
    }

    fn begin_erase(&mut self, point: Point) -> bool {
        self.history.snapshot(&self.document);
        self.state = GestureState::Erasing;
        log::debug!("Erase started at ({}, {})", point.x, point.y);
        self.erase_pass(point)
    }

    fn begin_freehand(&mut self, kind: StrokeKind, point: Point) -> bool {
        self.history.snapshot(&self.document);
        let stroke = self.document.add_stroke(Stroke::new(kind, point));
        self.state = GestureState::FreehandDrawing { stroke };
        log::debug!("{:?} stroke {} started", kind, stroke);
        true
    }

    /// Remove everything under the eraser square at `point`.
    fn erase_pass(&mut self, point: Point) -> bool {
        let hits = hit::erase_overlap(&self.document, point, self.config.eraser_half_size);
        if hits.is_empty() {
            return false;
        }
        self.document.remove_shapes(&hits.shape_indices);
        self.document.remove_strokes(&hits.stroke_indices);
        log::debug!(
            "Erased {} shapes and {} strokes at ({}, {})",
            hits.shape_indices.len(),
            hits.stroke_indices.len(),
            point.x,
            point.y
        );
        true
    }

    /// Commit any draft, restore an overridden mode and return to idle.
    fn end_gesture(&mut self) {
        let previous = std::mem::take(&mut self.state);
        let mut changed = previous.selected_index().is_some();

        if let GestureState::DraftingShape {
            preview: Some(shape),
            ..
        } = previous
        {
            // Deferred from pointer-down: this is the first mutation of the gesture.
            self.history.snapshot(&self.document);
            let index = self.document.add_shape(shape);
            log::debug!("Committed shape {}", index);
            changed = true;
        }

        if let Some(mode) = self.mode_before_override.take() {
            self.mode = mode;
            log::debug!("Momentary erase released, mode back to {}", mode);
        }

        if !previous.is_idle() {
            log::debug!("Gesture closed: {:?}", previous);
        }
        if changed {
            self.notify();
        }
    }

    fn notify(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.board_changed(&self.render_state());
            self.observer = Some(observer);
        }
    }
}
