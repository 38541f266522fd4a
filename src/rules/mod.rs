//! Santorini rules.
//!
//! `RuleEngine` answers:
//! - Is this move or build legal?
//! - Which (piece, move, build) triples can a color play?
//! - Has anyone won?
//!
//! It also provides the paired simulate/undo operations strategies use to
//! evaluate turns without committing them.

pub mod engine;

pub use engine::{GameResult, RuleEngine, SimulatedBuild, SimulatedMove, WinReason};
