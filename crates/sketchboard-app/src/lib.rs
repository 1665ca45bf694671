//! Sketchboard Application
//!
//! A headless host for the interaction engine: it plays back a scripted
//! pointer session and reports the final render state.

mod replay;

pub use replay::{Replay, ReplayError, Step, load_script};
