//! Session orchestration: turn order, strategy dispatch, win checks,
//! and undo/redo hooks.

pub mod game;

pub use game::{GameSession, Outcome, SessionBuilder};
