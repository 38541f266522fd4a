//! Board evaluation used by the heuristic strategy and the score display.

pub mod model;

pub use model::{ScoreWeights, ScoringModel};
