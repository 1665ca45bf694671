//! Sketchboard Core Library
//!
//! Interaction engine for a 2D drawing board: the shape and stroke model,
//! hit testing, the pointer gesture state machine and snapshot undo/redo.
//! Painting, toolbars and host event capture live outside this crate.

pub mod config;
pub mod document;
pub mod gesture;
pub mod hit;
pub mod history;
pub mod input;
pub mod render;
pub mod shapes;
pub mod tools;

pub use config::{BoardConfig, ConfigError};
pub use document::Document;
pub use gesture::{GestureController, GestureState};
pub use hit::EraseHits;
pub use history::HistoryManager;
pub use input::{PointerButton, PointerEvent};
pub use render::{BoardObserver, RenderState};
pub use shapes::{Circle, Rectangle, Shape, Stroke, StrokeKind};
pub use tools::{Mode, ModeParseError};
