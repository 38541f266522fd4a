//! Pieces, colors, and players.
//!
//! ## Color
//!
//! Two sides: white (pieces A and B) and blue (pieces Y and Z).
//! White always moves first.
//!
//! ## Player
//!
//! A color plus the kind of strategy that chooses its turns. Created once
//! per session and never changed.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

/// Player color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
}

impl Color {
    /// Both colors in turn order.
    pub const ALL: [Color; 2] = [Color::White, Color::Blue];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Blue,
            Color::Blue => Color::White,
        }
    }

    /// The two pieces this color controls.
    #[must_use]
    pub const fn pieces(self) -> [PieceId; 2] {
        match self {
            Color::White => [PieceId::A, PieceId::B],
            Color::Blue => [PieceId::Y, PieceId::Z],
        }
    }

    /// Index into per-color arrays (white = 0, blue = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Blue => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Blue => f.write_str("blue"),
        }
    }
}

/// Piece identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceId {
    A,
    B,
    Y,
    Z,
}

impl PieceId {
    /// Every piece on the board.
    pub const ALL: [PieceId; 4] = [PieceId::A, PieceId::B, PieceId::Y, PieceId::Z];

    /// The color that owns this piece.
    #[must_use]
    pub const fn owner(self) -> Color {
        match self {
            PieceId::A | PieceId::B => Color::White,
            PieceId::Y | PieceId::Z => Color::Blue,
        }
    }

    /// The letter shown on the board.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PieceId::A => 'A',
            PieceId::B => 'B',
            PieceId::Y => 'Y',
            PieceId::Z => 'Z',
        }
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for PieceId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" => Ok(PieceId::A),
            "B" => Ok(PieceId::B),
            "Y" => Ok(PieceId::Y),
            "Z" => Ok(PieceId::Z),
            _ => Err(ParseError::UnknownPiece(s.to_string())),
        }
    }
}

/// How a player's turns are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Turns are read from an input collaborator.
    #[default]
    Interactive,
    /// Uniformly random legal turn.
    Random,
    /// Highest weighted score, random tie-break.
    Heuristic,
}

impl FromStr for StrategyKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "human" | "interactive" => Ok(StrategyKind::Interactive),
            "random" => Ok(StrategyKind::Random),
            "heuristic" => Ok(StrategyKind::Heuristic),
            _ => Err(ParseError::UnknownStrategy(s.to_string())),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Interactive => f.write_str("human"),
            StrategyKind::Random => f.write_str("random"),
            StrategyKind::Heuristic => f.write_str("heuristic"),
        }
    }
}

/// A participant in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    color: Color,
    kind: StrategyKind,
}

impl Player {
    #[must_use]
    pub const fn new(color: Color, kind: StrategyKind) -> Self {
        Self { color, kind }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// The pieces this player controls.
    #[must_use]
    pub const fn pieces(&self) -> [PieceId; 2] {
        self.color.pieces()
    }

    /// Check whether this player controls `piece`.
    #[must_use]
    pub fn owns(&self, piece: PieceId) -> bool {
        piece.owner() == self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership() {
        assert_eq!(PieceId::A.owner(), Color::White);
        assert_eq!(PieceId::Z.owner(), Color::Blue);
        assert_eq!(Color::Blue.pieces(), [PieceId::Y, PieceId::Z]);

        let white = Player::new(Color::White, StrategyKind::Random);
        assert!(white.owns(PieceId::B));
        assert!(!white.owns(PieceId::Y));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Color::White.opponent(), Color::Blue);
        assert_eq!(Color::Blue.opponent(), Color::White);
    }

    #[test]
    fn test_piece_parse() {
        assert_eq!("Y".parse::<PieceId>().unwrap(), PieceId::Y);
        assert!("a".parse::<PieceId>().is_err());
        assert!("C".parse::<PieceId>().is_err());
    }

    #[test]
    fn test_strategy_kind_parse() {
        assert_eq!("human".parse::<StrategyKind>().unwrap(), StrategyKind::Interactive);
        assert_eq!("heuristic".parse::<StrategyKind>().unwrap(), StrategyKind::Heuristic);
        assert!(matches!(
            "minimax".parse::<StrategyKind>(),
            Err(ParseError::UnknownStrategy(_))
        ));
    }
}
