//! Weighted-score heuristic strategy.
//!
//! Each candidate is scored as `3*height + 2*center + 1*distance` for the
//! mover after the candidate is applied. A candidate that puts one of the
//! mover's pieces on a level-3 cell scores `WIN_SCORE` instead, which no
//! weighted sum can reach. Ties among the best are broken uniformly.

use tracing::{debug, instrument};

use super::{finish_turn, TurnDecision, TurnStrategy};
use crate::core::{Board, Candidate, Color, GameRng, Player, StrategyKind, WINNING_HEIGHT};
use crate::rules::RuleEngine;
use crate::scoring::{ScoreWeights, ScoringModel};

/// Score assigned to a candidate that wins on the spot.
pub const WIN_SCORE: i64 = 999_999;

/// Picks the highest-scoring candidate.
#[derive(Clone, Debug)]
pub struct HeuristicStrategy {
    rules: RuleEngine,
    scoring: ScoringModel,
    weights: ScoreWeights,
    rng: GameRng,
}

impl HeuristicStrategy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self::with_weights(rng, ScoreWeights::default())
    }

    #[must_use]
    pub fn with_weights(rng: GameRng, weights: ScoreWeights) -> Self {
        Self {
            rules: RuleEngine::new(),
            scoring: ScoringModel::new(),
            weights,
            rng,
        }
    }

    /// Check whether playing the candidate's move puts any of `color`'s
    /// pieces on a winning cell.
    fn reaches_winning_height(&self, board: &mut Board, color: Color, candidate: Candidate) -> bool {
        self.rules
            .with_move(board, candidate.piece, candidate.move_dir, |b| {
                color.pieces().into_iter().any(|piece| {
                    b.position_of(piece)
                        .and_then(|pos| b.height(pos))
                        .is_some_and(|h| h == WINNING_HEIGHT)
                })
            })
            .unwrap_or(false)
    }

    /// Score every candidate for `color`. The board is unchanged on return.
    ///
    /// Illegal candidates score `i64::MIN`.
    #[must_use]
    pub fn rank(&self, board: &mut Board, color: Color, candidates: &[Candidate]) -> Vec<i64> {
        candidates
            .iter()
            .map(|&candidate| {
                if self.reaches_winning_height(board, color, candidate) {
                    return WIN_SCORE;
                }
                self.scoring
                    .scores_after(board, color, candidate)
                    .map_or(i64::MIN, |scores| self.weights.combine(scores))
            })
            .collect()
    }
}

impl TurnStrategy for HeuristicStrategy {
    #[instrument(level = "debug", skip_all, fields(player = %player.color()))]
    fn make_turn(&mut self, board: &Board, player: &Player, score_display: bool) -> TurnDecision {
        let color = player.color();
        let mut scratch = board.clone();

        let Some(candidates) = self.rules.enumerate_turns(&mut scratch, color) else {
            return TurnDecision::NoLegalTurn {
                winner: color.opponent(),
            };
        };

        let scores = self.rank(&mut scratch, color, &candidates);
        let best = scores.iter().copied().max().unwrap_or(i64::MIN);
        let best_moves: Vec<Candidate> = candidates
            .iter()
            .zip(&scores)
            .filter(|(_, score)| **score == best)
            .map(|(&candidate, _)| candidate)
            .collect();

        let Some(&candidate) = self.rng.choose(&best_moves) else {
            return TurnDecision::NoLegalTurn {
                winner: color.opponent(),
            };
        };

        debug!(turn = %candidate, score = best, ties = best_moves.len(), "heuristic turn");
        TurnDecision::Play(finish_turn(board, color, candidate, score_display))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Heuristic
    }
}
