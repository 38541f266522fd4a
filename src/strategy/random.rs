//! Uniformly random strategy.

use tracing::debug;

use super::{finish_turn, TurnDecision, TurnStrategy};
use crate::core::{Board, GameRng, Player, StrategyKind};
use crate::rules::RuleEngine;

/// Picks uniformly among every legal candidate.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rules: RuleEngine,
    rng: GameRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rules: RuleEngine::new(),
            rng,
        }
    }
}

impl TurnStrategy for RandomStrategy {
    fn make_turn(&mut self, board: &Board, player: &Player, score_display: bool) -> TurnDecision {
        let color = player.color();
        let mut scratch = board.clone();

        let Some(candidates) = self.rules.enumerate_turns(&mut scratch, color) else {
            return TurnDecision::NoLegalTurn {
                winner: color.opponent(),
            };
        };
        let Some(&candidate) = self.rng.choose(&candidates) else {
            return TurnDecision::NoLegalTurn {
                winner: color.opponent(),
            };
        };

        debug!(player = %color, turn = %candidate, options = candidates.len(), "random turn");
        TurnDecision::Play(finish_turn(board, color, candidate, score_display))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }
}
