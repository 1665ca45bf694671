//! Scripted pointer sessions.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use sketchboard_core::{
    BoardConfig, BoardObserver, ConfigError, GestureController, PointerButton, RenderState,
};
use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;
use thiserror::Error;

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

fn primary() -> PointerButton {
    PointerButton::Primary
}

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Down {
        x: f64,
        y: f64,
        #[serde(default = "primary")]
        button: PointerButton,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up {
        x: f64,
        y: f64,
        #[serde(default = "primary")]
        button: PointerButton,
    },
    Leave,
    /// Mode name, applied through the untyped entry point.
    Mode {
        mode: String,
    },
    Undo,
    Redo,
}

/// Parse a script from a JSON file.
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<Step>, ReplayError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Counts render notifications.
struct RepaintCounter(Rc<Cell<usize>>);

impl BoardObserver for RepaintCounter {
    fn board_changed(&mut self, _state: &RenderState<'_>) {
        self.0.set(self.0.get() + 1);
    }
}

/// A board driven by scripted steps.
#[derive(Debug)]
pub struct Replay {
    board: GestureController,
    repaints: Rc<Cell<usize>>,
}

impl Replay {
    pub fn new(config: BoardConfig) -> Self {
        let repaints = Rc::new(Cell::new(0));
        let mut board = GestureController::with_config(config);
        board.set_observer(RepaintCounter(Rc::clone(&repaints)));
        Self { board, repaints }
    }

    /// Apply one step to the board.
    pub fn apply(&mut self, step: &Step) {
        log::trace!("Replaying {:?}", step);
        match step {
            Step::Down { x, y, button } => self.board.pointer_down(Point::new(*x, *y), *button),
            Step::Move { x, y } => self.board.pointer_move(Point::new(*x, *y)),
            Step::Up { x, y, button } => self.board.pointer_up(Point::new(*x, *y), *button),
            Step::Leave => self.board.pointer_leave(),
            Step::Mode { mode } => {
                self.board.set_mode_by_name(mode);
            }
            Step::Undo => {
                self.board.undo();
            }
            Step::Redo => {
                self.board.redo();
            }
        }
    }

    /// Apply every step in order.
    pub fn run(&mut self, steps: &[Step]) {
        for step in steps {
            self.apply(step);
        }
        log::info!(
            "Replayed {} steps, {} repaints",
            steps.len(),
            self.repaints.get()
        );
    }

    pub fn board(&self) -> &GestureController {
        &self.board
    }

    /// Number of render notifications so far.
    pub fn repaints(&self) -> usize {
        self.repaints.get()
    }

    /// Final render state as pretty JSON.
    pub fn render_json(&self) -> Result<String, ReplayError> {
        Ok(serde_json::to_string_pretty(&self.board.render_state())?)
    }
}
