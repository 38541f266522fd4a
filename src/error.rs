//! Error types.
//!
//! Nothing here is fatal. Parse and selection errors feed the interactive
//! re-prompt loop; rule and session errors report API misuse.

use crate::core::{Color, Direction, PieceId};

/// A token that does not name a piece, direction, strategy, or toggle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("not a valid piece: '{0}'")]
    UnknownPiece(String),

    #[error("not a valid direction: '{0}'")]
    UnknownDirection(String),

    #[error("unknown strategy '{0}' (expected human, random, or heuristic)")]
    UnknownStrategy(String),

    #[error("unknown toggle '{0}' (expected on or off)")]
    UnknownToggle(String),
}

/// Why an interactive selection was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("not a valid piece: '{0}'")]
    UnknownPiece(String),

    #[error("piece {0} is not yours")]
    NotYourPiece(PieceId),

    #[error("piece {0} cannot move")]
    PieceCannotAct(PieceId),

    #[error("not a valid direction: '{0}'")]
    UnknownDirection(String),

    #[error("cannot move {0}")]
    IllegalMove(Direction),

    #[error("cannot build {0}")]
    IllegalBuild(Direction),
}

/// A turn that cannot be applied to the current board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("piece {0} is not on the board")]
    PieceNotOnBoard(PieceId),

    #[error("piece {piece} cannot move {direction}")]
    IllegalMove { piece: PieceId, direction: Direction },

    #[error("piece {piece} cannot build {direction}")]
    IllegalBuild { piece: PieceId, direction: Direction },
}

/// Session-level misuse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the game is over ({0} won)")]
    GameOver(Color),

    #[error("history is disabled for this session")]
    HistoryDisabled,

    #[error("{0} is interactive but no input source was provided")]
    MissingInput(Color),

    #[error("input for {0} closed before a turn was chosen")]
    InputClosed(Color),

    #[error(transparent)]
    Rule(#[from] RuleError),
}
