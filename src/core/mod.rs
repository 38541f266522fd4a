//! Core types: positions, pieces, board, turns, RNG, configuration.
//!
//! Everything here is plain data. Rules live in `rules`, scoring in
//! `scoring`, and turn selection in `strategy`.

pub mod board;
pub mod config;
pub mod direction;
pub mod piece;
pub mod rng;
pub mod turn;

pub use board::{Board, Cell, Snapshot, MAX_HEIGHT, WINNING_HEIGHT};
pub use config::{parse_toggle, SessionConfig};
pub use direction::{Direction, Position, BOARD_SIZE};
pub use piece::{Color, PieceId, Player, StrategyKind};
pub use rng::GameRng;
pub use turn::{Candidate, Scores, Turn};
