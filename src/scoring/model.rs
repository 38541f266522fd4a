//! Height, center, and distance metrics.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Candidate, Color, Position, Scores};
use crate::rules::RuleEngine;

/// Distance score when every piece is adjacent to an opponent.
const DISTANCE_BASE: i32 = 8;

/// Weights for combining the three metrics into one ranking value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub height: i64,
    pub center: i64,
    pub distance: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            height: 3,
            center: 2,
            distance: 1,
        }
    }
}

impl ScoreWeights {
    /// `height * h + center * c + distance * d`.
    #[must_use]
    pub fn combine(&self, scores: Scores) -> i64 {
        self.height * i64::from(scores.height)
            + self.center * i64::from(scores.center)
            + self.distance * i64::from(scores.distance)
    }
}

/// Computes per-player metrics from a board.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoringModel {
    rules: RuleEngine,
}

impl ScoringModel {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: RuleEngine::new(),
        }
    }

    fn positions(board: &Board, color: Color) -> impl Iterator<Item = Position> + '_ {
        color
            .pieces()
            .into_iter()
            .filter_map(move |piece| board.position_of(piece))
    }

    /// Sum of the heights under `color`'s pieces.
    #[must_use]
    pub fn height_score(&self, board: &Board, color: Color) -> i32 {
        Self::positions(board, color)
            .filter_map(|pos| board.height(pos))
            .map(i32::from)
            .sum()
    }

    /// +2 per piece on the center cell, +1 per piece elsewhere in the
    /// inner 3x3 ring.
    #[must_use]
    pub fn center_score(&self, board: &Board, color: Color) -> i32 {
        Self::positions(board, color)
            .map(|pos| {
                if pos == Position::CENTER {
                    2
                } else if (1..=3).contains(&pos.row) && (1..=3).contains(&pos.col) {
                    1
                } else {
                    0
                }
            })
            .sum()
    }

    /// `8 - sum(min distance from each own piece to the nearest opponent)`.
    ///
    /// Higher when `color`'s pieces crowd the opponent's.
    #[must_use]
    pub fn distance_score(&self, board: &Board, color: Color) -> i32 {
        let opponents: Vec<Position> = Self::positions(board, color.opponent()).collect();
        let total: i32 = Self::positions(board, color)
            .map(|own| {
                opponents
                    .iter()
                    .map(|&opp| i32::from(own.chebyshev(opp)))
                    .min()
                    .unwrap_or(0)
            })
            .sum();
        DISTANCE_BASE - total
    }

    /// All three metrics for `color` on the current board.
    #[must_use]
    pub fn scores(&self, board: &Board, color: Color) -> Scores {
        Scores::new(
            self.height_score(board, color),
            self.center_score(board, color),
            self.distance_score(board, color),
        )
    }

    /// Metrics for `color` after hypothetically playing `candidate`.
    ///
    /// Simulates the move, then the build, scores, then undoes the build
    /// and the move. The board is unchanged on return. `None` if the
    /// candidate is illegal.
    #[must_use]
    pub fn scores_after(&self, board: &mut Board, color: Color, candidate: Candidate) -> Option<Scores> {
        self.rules
            .with_candidate(board, candidate, |b| self.scores(b, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, PieceId};

    #[test]
    fn test_opening_scores() {
        let model = ScoringModel::new();
        let board = Board::new();

        assert_eq!(model.scores(&board, Color::White).as_tuple(), (0, 2, 4));
        assert_eq!(model.scores(&board, Color::Blue).as_tuple(), (0, 2, 4));
    }

    #[test]
    fn test_center_score() {
        let model = ScoringModel::new();
        let board = Board::with_pieces(&[
            (PieceId::A, Position::new(2, 2)),
            (PieceId::B, Position::new(0, 4)),
            (PieceId::Y, Position::new(1, 3)),
            (PieceId::Z, Position::new(3, 3)),
        ]);

        assert_eq!(model.center_score(&board, Color::White), 2);
        assert_eq!(model.center_score(&board, Color::Blue), 2);
    }

    #[test]
    fn test_height_score() {
        let model = ScoringModel::new();
        let mut board = Board::new();
        board.set_height(Position::new(3, 1), 2);
        board.set_height(Position::new(1, 3), 1);

        assert_eq!(model.height_score(&board, Color::White), 3);
        assert_eq!(model.height_score(&board, Color::Blue), 0);
    }

    #[test]
    fn test_distance_score_uses_nearest_opponent() {
        let model = ScoringModel::new();
        let board = Board::with_pieces(&[
            (PieceId::A, Position::new(0, 0)),
            (PieceId::B, Position::new(4, 4)),
            (PieceId::Y, Position::new(0, 1)),
            (PieceId::Z, Position::new(2, 2)),
        ]);

        // A: nearest Y = 1. B: nearest Z = 2.
        assert_eq!(model.distance_score(&board, Color::White), 8 - 3);
        // Y: nearest A = 1. Z: nearest A or B = 2.
        assert_eq!(model.distance_score(&board, Color::Blue), 8 - 3);
    }

    #[test]
    fn test_scores_after_reverts() {
        let model = ScoringModel::new();
        let mut board = Board::new();
        let before = board.clone();

        // A (3,1) -> (2,1), build at (2,2).
        let candidate = Candidate::new(PieceId::A, Direction::N, Direction::E);
        let scores = model.scores_after(&mut board, Color::White, candidate).unwrap();

        assert_eq!(board, before);
        // A now at (2,1) (ring), B at (1,3) (ring).
        assert_eq!(scores.center, 2);
        assert_eq!(scores.height, 0);
        // A -> Y (1,1) = 1, B -> Y/Z = 2.
        assert_eq!(scores.distance, 5);
    }

    #[test]
    fn test_weights() {
        let weights = ScoreWeights::default();
        assert_eq!(weights.combine(Scores::new(1, 2, 4)), 3 + 4 + 4);
    }
}
