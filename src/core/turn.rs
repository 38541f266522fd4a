//! Turn representation: piece + move direction + build direction.
//!
//! A `Candidate` is a legal triple produced by enumeration. A `Turn` is the
//! candidate a strategy committed to, optionally carrying the post-turn
//! scores for display. Turns are applied exactly once by the session.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::piece::PieceId;

/// A legal (piece, move, build) triple, not yet chosen or applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// The piece that moves and then builds.
    pub piece: PieceId,
    /// Direction of the one-step move.
    pub move_dir: Direction,
    /// Direction of the build, relative to the piece's new position.
    pub build_dir: Direction,
}

impl Candidate {
    #[must_use]
    pub const fn new(piece: PieceId, move_dir: Direction, build_dir: Direction) -> Self {
        Self {
            piece,
            move_dir,
            build_dir,
        }
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.piece, self.move_dir, self.build_dir)
    }
}

/// Height, center, and distance scores for one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    pub height: i32,
    pub center: i32,
    pub distance: i32,
}

impl Scores {
    #[must_use]
    pub const fn new(height: i32, center: i32, distance: i32) -> Self {
        Self {
            height,
            center,
            distance,
        }
    }

    /// The `(height, center, distance)` triple.
    #[must_use]
    pub const fn as_tuple(&self) -> (i32, i32, i32) {
        (self.height, self.center, self.distance)
    }
}

/// A fully decided, not-yet-applied turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// What to do.
    pub candidate: Candidate,
    /// Scores for the mover after this turn, when score display is on.
    pub scores: Option<Scores>,
}

impl Turn {
    /// Create a turn without scores.
    #[must_use]
    pub const fn new(candidate: Candidate) -> Self {
        Self {
            candidate,
            scores: None,
        }
    }

    /// Attach post-turn scores.
    #[must_use]
    pub fn with_scores(mut self, scores: Scores) -> Self {
        self.scores = Some(scores);
        self
    }

    #[must_use]
    pub const fn piece(&self) -> PieceId {
        self.candidate.piece
    }

    #[must_use]
    pub const fn move_dir(&self) -> Direction {
        self.candidate.move_dir
    }

    #[must_use]
    pub const fn build_dir(&self) -> Direction {
        self.candidate.build_dir
    }
}

impl From<Candidate> for Turn {
    fn from(candidate: Candidate) -> Self {
        Turn::new(candidate)
    }
}
