//! # santorini-engine
//!
//! Rule engine for a two-player Santorini-style move-and-build game.
//!
//! Players alternate turns on a 5x5 grid. A turn moves one piece one step
//! (climbing at most one level) and then builds one level next to its new
//! cell. Standing on a level-3 building wins; a player with no legal turn
//! loses.
//!
//! ## Modules
//!
//! - `core`: Positions, directions, pieces, players, board, turns, RNG, config
//! - `rules`: Legality, simulate/undo, enumeration, win check
//! - `scoring`: Height, center, and distance metrics
//! - `strategy`: Interactive, random, and heuristic turn selection
//! - `history`: Snapshot-based undo/redo
//! - `session`: Turn loop tying everything together
//!
//! ## Example
//!
//! ```
//! use santorini_engine::{Color, GameSession, SessionConfig, StrategyKind};
//!
//! let config = SessionConfig::default()
//!     .with_strategy(Color::White, StrategyKind::Heuristic)
//!     .with_strategy(Color::Blue, StrategyKind::Random)
//!     .with_seed(7);
//! let mut session = GameSession::automated(config).unwrap();
//! let result = session.play_to_end().unwrap();
//! assert!(session.is_over());
//! assert_eq!(session.result(), Some(result));
//! ```

pub mod core;
pub mod error;
pub mod history;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    Board, Candidate, Cell, Color, Direction, GameRng, PieceId, Player, Position, Scores,
    SessionConfig, Snapshot, StrategyKind, Turn,
};

pub use crate::error::{ParseError, RuleError, SelectionError, SessionError};

pub use crate::rules::{GameResult, RuleEngine, WinReason};

pub use crate::scoring::{ScoreWeights, ScoringModel};

pub use crate::strategy::{
    DirectionPrompt, HeuristicStrategy, InputSource, InteractiveStrategy, RandomStrategy,
    TurnDecision, TurnStrategy,
};

pub use crate::history::HistoryManager;

pub use crate::session::{GameSession, Outcome, SessionBuilder};
