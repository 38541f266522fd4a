//! Interactive strategy driven by an external input source.
//!
//! The strategy asks for a piece, then a move direction, then a build
//! direction. Each answer is validated before the next is requested; a
//! bad answer is reported through `InputSource::reject` and asked again.
//! There is no fallback: the loop runs until a legal triple is assembled
//! or the input source closes.

use tracing::{debug, trace};

use super::{finish_turn, TurnDecision, TurnStrategy};
use crate::core::{Board, Candidate, Direction, PieceId, Player, StrategyKind};
use crate::error::SelectionError;
use crate::rules::RuleEngine;

/// Which direction is being requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionPrompt {
    Move,
    Build,
}

/// Source of raw tokens for the interactive strategy (typically stdin).
///
/// Returning `None` means the source is exhausted (end of input); the
/// turn is abandoned instead of prompting again.
pub trait InputSource {
    /// Ask which piece to move.
    fn request_piece(&mut self) -> Option<String>;

    /// Ask for a direction (`n`, `ne`, `e`, `se`, `s`, `sw`, `w`, `nw`).
    fn request_direction(&mut self, prompt: DirectionPrompt) -> Option<String>;

    /// Told why the last answer was refused, before being asked again.
    fn reject(&mut self, _error: &SelectionError) {}
}

/// Builds a turn from answers supplied by an `InputSource`.
pub struct InteractiveStrategy {
    rules: RuleEngine,
    input: Box<dyn InputSource>,
}

impl InteractiveStrategy {
    #[must_use]
    pub fn new(input: Box<dyn InputSource>) -> Self {
        Self {
            rules: RuleEngine::new(),
            input,
        }
    }

    fn refuse(&mut self, error: SelectionError) {
        trace!(%error, "selection rejected");
        self.input.reject(&error);
    }

    fn select_piece(&mut self, board: &mut Board, player: &Player) -> Option<PieceId> {
        loop {
            let token = self.input.request_piece()?;
            let Ok(piece) = token.parse::<PieceId>() else {
                self.refuse(SelectionError::UnknownPiece(token));
                continue;
            };
            if !player.owns(piece) {
                self.refuse(SelectionError::NotYourPiece(piece));
            } else if !self.rules.can_act(board, piece) {
                self.refuse(SelectionError::PieceCannotAct(piece));
            } else {
                return Some(piece);
            }
        }
    }

    fn select_direction(&mut self, prompt: DirectionPrompt) -> Option<Direction> {
        loop {
            let token = self.input.request_direction(prompt)?;
            match token.parse::<Direction>() {
                Ok(direction) => return Some(direction),
                Err(_) => self.refuse(SelectionError::UnknownDirection(token)),
            }
        }
    }

    fn select_move(&mut self, board: &Board, piece: PieceId) -> Option<Direction> {
        loop {
            let direction = self.select_direction(DirectionPrompt::Move)?;
            if self.rules.validate_move(board, piece, direction, false).is_some() {
                return Some(direction);
            }
            self.refuse(SelectionError::IllegalMove(direction));
        }
    }

    fn select_build(
        &mut self,
        board: &mut Board,
        piece: PieceId,
        move_dir: Direction,
    ) -> Option<Direction> {
        loop {
            let direction = self.select_direction(DirectionPrompt::Build)?;
            let rules = self.rules;
            let legal = rules
                .with_move(board, piece, move_dir, |b| {
                    rules.validate_move(b, piece, direction, true).is_some()
                })
                .unwrap_or(false);
            if legal {
                return Some(direction);
            }
            self.refuse(SelectionError::IllegalBuild(direction));
        }
    }

    fn select_candidate(&mut self, board: &mut Board, player: &Player) -> Option<Candidate> {
        let piece = self.select_piece(board, player)?;
        let move_dir = self.select_move(board, piece)?;
        let build_dir = self.select_build(board, piece, move_dir)?;
        Some(Candidate::new(piece, move_dir, build_dir))
    }
}

impl TurnStrategy for InteractiveStrategy {
    fn make_turn(&mut self, board: &Board, player: &Player, score_display: bool) -> TurnDecision {
        let color = player.color();
        let mut scratch = board.clone();

        // Without this check a stuck player would be prompted forever.
        if player
            .pieces()
            .into_iter()
            .all(|piece| !self.rules.can_act(&mut scratch, piece))
        {
            return TurnDecision::NoLegalTurn {
                winner: color.opponent(),
            };
        }

        match self.select_candidate(&mut scratch, player) {
            Some(candidate) => {
                TurnDecision::Play(finish_turn(board, color, candidate, score_display))
            }
            None => {
                debug!(player = %color, "input closed");
                TurnDecision::InputClosed
            }
        }
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Interactive
    }
}
