//! Turn selection strategies.
//!
//! Every strategy implements `TurnStrategy::make_turn`, which returns one
//! decided turn for the player to move. Strategies only ever read the live
//! board; evaluation happens on a scratch copy, and the session alone
//! commits the chosen turn.
//!
//! - `InteractiveStrategy`: asks an `InputSource` for piece and directions
//! - `RandomStrategy`: uniform over all legal candidates
//! - `HeuristicStrategy`: weighted height/center/distance score

pub mod heuristic;
pub mod interactive;
pub mod random;

pub use heuristic::{HeuristicStrategy, WIN_SCORE};
pub use interactive::{DirectionPrompt, InputSource, InteractiveStrategy};
pub use random::RandomStrategy;

use crate::core::{Board, Candidate, Color, GameRng, Player, StrategyKind, Turn};
use crate::error::SessionError;
use crate::scoring::ScoringModel;

/// What a strategy decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnDecision {
    /// Play this turn.
    Play(Turn),
    /// The player has no legal turn; `winner` takes the game.
    NoLegalTurn { winner: Color },
    /// The input source closed before a turn was assembled.
    InputClosed,
}

impl TurnDecision {
    /// The turn, if one was chosen.
    #[must_use]
    pub fn turn(&self) -> Option<Turn> {
        match self {
            TurnDecision::Play(turn) => Some(*turn),
            TurnDecision::NoLegalTurn { .. } | TurnDecision::InputClosed => None,
        }
    }
}

/// Produces one turn per call.
pub trait TurnStrategy {
    /// Decide a turn for `player` on `board`.
    ///
    /// When `score_display` is set, the returned turn carries the mover's
    /// scores after the turn.
    fn make_turn(&mut self, board: &Board, player: &Player, score_display: bool) -> TurnDecision;

    /// Which kind of strategy this is.
    fn kind(&self) -> StrategyKind;
}

/// Wrap a chosen candidate as a turn, attaching post-turn scores for the
/// mover if requested.
pub(crate) fn finish_turn(
    board: &Board,
    color: Color,
    candidate: Candidate,
    score_display: bool,
) -> Turn {
    let turn = Turn::new(candidate);
    if !score_display {
        return turn;
    }
    let mut scratch = board.clone();
    match ScoringModel::new().scores_after(&mut scratch, color, candidate) {
        Some(scores) => turn.with_scores(scores),
        None => turn,
    }
}

/// Build the strategy for one seat.
///
/// Interactive seats need an input source; AI seats ignore it.
pub fn build_strategy(
    color: Color,
    kind: StrategyKind,
    rng: GameRng,
    input: Option<Box<dyn InputSource>>,
) -> Result<Box<dyn TurnStrategy>, SessionError> {
    Ok(match kind {
        StrategyKind::Interactive => {
            let input = input.ok_or(SessionError::MissingInput(color))?;
            Box::new(InteractiveStrategy::new(input))
        }
        StrategyKind::Random => Box::new(RandomStrategy::new(rng)),
        StrategyKind::Heuristic => Box::new(HeuristicStrategy::new(rng)),
    })
}
