//! Move/build legality, turn enumeration, and the win check.
//!
//! ## Simulation
//!
//! Strategies evaluate a turn by mutating a board and reverting it.
//! `simulate_move` / `simulate_build` return a token describing exactly
//! what changed; `undo_move` / `undo_build` consume that token and apply
//! the inverse. An illegal simulation changes nothing and returns `None`,
//! so there is nothing to undo. `with_move` wraps the pair so the revert
//! runs on every exit path of the closure.

use tracing::{instrument, trace};

use crate::core::{
    Board, Candidate, Color, Direction, PieceId, Position, MAX_HEIGHT, WINNING_HEIGHT,
};
use crate::error::RuleError;

/// How a game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WinReason {
    /// One of the winner's pieces stands on a level-3 building.
    ReachedLevelThree,
    /// The loser had no legal turn.
    OpponentBlocked,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameResult {
    pub winner: Color,
    pub reason: WinReason,
}

impl GameResult {
    #[must_use]
    pub const fn new(winner: Color, reason: WinReason) -> Self {
        Self { winner, reason }
    }

    /// Check if a color won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        self.winner == color
    }
}

/// A move applied by `simulate_move`, reverted by `undo_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "a simulated move must be undone"]
pub struct SimulatedMove {
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
    /// Index the piece held in the origin cell's occupant list.
    slot: usize,
}

/// A build applied by `simulate_build`, reverted by `undo_build`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "a simulated build must be undone"]
pub struct SimulatedBuild {
    pub at: Position,
}

/// Santorini rules. Stateless: every query takes the board explicitly.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleEngine;

impl RuleEngine {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Check whether a piece standing on `origin` may move to (or build on)
    /// `target`.
    ///
    /// Rejects targets that are off the board, occupied, or domed. Moves
    /// additionally may not climb more than one level.
    #[must_use]
    pub fn check_destination(
        &self,
        board: &Board,
        target: Position,
        origin: Position,
        is_build: bool,
    ) -> bool {
        let Some(cell) = board.cell(target) else {
            return false;
        };
        if cell.is_occupied() || cell.height() >= MAX_HEIGHT {
            return false;
        }
        if !is_build {
            let origin_height = board.height(origin).unwrap_or(0);
            if cell.height() > origin_height + 1 {
                return false;
            }
        }
        true
    }

    /// Resolve `direction` from the piece's current cell and check it.
    ///
    /// Returns the target position when legal.
    #[must_use]
    pub fn validate_move(
        &self,
        board: &Board,
        piece: PieceId,
        direction: Direction,
        is_build: bool,
    ) -> Option<Position> {
        let origin = board.position_of(piece)?;
        let target = origin.step(direction);
        self.check_destination(board, target, origin, is_build)
            .then_some(target)
    }

    // === Simulation ===

    /// Move a piece one step if legal.
    pub fn simulate_move(
        &self,
        board: &mut Board,
        piece: PieceId,
        direction: Direction,
    ) -> Option<SimulatedMove> {
        let to = self.validate_move(board, piece, direction, false)?;
        let from = board.position_of(piece)?;
        let slot = board.remove_piece(piece, from)?;
        board.place_piece(piece, to);
        Some(SimulatedMove {
            piece,
            from,
            to,
            slot,
        })
    }

    /// Exact inverse of `simulate_move`.
    pub fn undo_move(&self, board: &mut Board, applied: SimulatedMove) {
        board.remove_piece(applied.piece, applied.to);
        board.insert_piece(applied.piece, applied.from, applied.slot);
    }

    /// Raise the cell in `direction` from the piece if building there is legal.
    pub fn simulate_build(
        &self,
        board: &mut Board,
        piece: PieceId,
        direction: Direction,
    ) -> Option<SimulatedBuild> {
        let at = self.validate_move(board, piece, direction, true)?;
        board.raise(at).then_some(SimulatedBuild { at })
    }

    /// Exact inverse of `simulate_build`.
    pub fn undo_build(&self, board: &mut Board, applied: SimulatedBuild) {
        board.lower(applied.at);
    }

    /// Run `f` with the move applied, then revert it.
    ///
    /// Returns `None` without calling `f` if the move is illegal.
    pub fn with_move<R>(
        &self,
        board: &mut Board,
        piece: PieceId,
        direction: Direction,
        f: impl FnOnce(&mut Board) -> R,
    ) -> Option<R> {
        let applied = self.simulate_move(board, piece, direction)?;
        let result = f(board);
        self.undo_move(board, applied);
        Some(result)
    }

    /// Run `f` with the whole candidate (move then build) applied, then
    /// revert both in reverse order.
    pub fn with_candidate<R>(
        &self,
        board: &mut Board,
        candidate: Candidate,
        f: impl FnOnce(&mut Board) -> R,
    ) -> Option<R> {
        let moved = self.simulate_move(board, candidate.piece, candidate.move_dir)?;
        let result = match self.simulate_build(board, candidate.piece, candidate.build_dir) {
            Some(built) => {
                let result = f(board);
                self.undo_build(board, built);
                Some(result)
            }
            None => None,
        };
        self.undo_move(board, moved);
        result
    }

    // === Enumeration ===

    /// Build directions that are legal from the piece's current cell.
    fn legal_builds<'a>(
        &'a self,
        board: &'a Board,
        piece: PieceId,
    ) -> impl Iterator<Item = Direction> + 'a {
        Direction::ALL
            .into_iter()
            .filter(move |&dir| self.validate_move(board, piece, dir, true).is_some())
    }

    /// Check whether `piece` has at least one legal move followed by a
    /// legal build.
    #[must_use]
    pub fn can_act(&self, board: &mut Board, piece: PieceId) -> bool {
        Direction::ALL.into_iter().any(|move_dir| {
            self.with_move(board, piece, move_dir, |b| {
                self.legal_builds(b, piece).next().is_some()
            })
            .unwrap_or(false)
        })
    }

    /// Every legal (piece, move, build) triple for `color`.
    ///
    /// Order: piece, then move direction, then build direction, each in
    /// declaration order. Returns `None` when there is no candidate, which
    /// means `color` has lost.
    #[instrument(level = "trace", skip(self, board))]
    pub fn enumerate_turns(&self, board: &mut Board, color: Color) -> Option<Vec<Candidate>> {
        let mut candidates = Vec::new();

        for piece in color.pieces() {
            for move_dir in Direction::ALL {
                self.with_move(board, piece, move_dir, |b| {
                    candidates.extend(
                        self.legal_builds(b, piece)
                            .map(|build_dir| Candidate::new(piece, move_dir, build_dir)),
                    );
                });
            }
        }

        trace!(count = candidates.len(), "enumerated candidates");
        (!candidates.is_empty()).then_some(candidates)
    }

    // === Commit ===

    /// Permanently apply a turn: relocate the piece, then raise the build
    /// target by one level.
    ///
    /// The board is left unchanged if either step is illegal.
    pub fn apply_turn(&self, board: &mut Board, candidate: Candidate) -> Result<(), RuleError> {
        let Candidate {
            piece,
            move_dir,
            build_dir,
        } = candidate;

        if board.position_of(piece).is_none() {
            return Err(RuleError::PieceNotOnBoard(piece));
        }
        let moved = self
            .simulate_move(board, piece, move_dir)
            .ok_or(RuleError::IllegalMove {
                piece,
                direction: move_dir,
            })?;
        if self.simulate_build(board, piece, build_dir).is_none() {
            self.undo_move(board, moved);
            return Err(RuleError::IllegalBuild {
                piece,
                direction: build_dir,
            });
        }
        Ok(())
    }

    // === Win condition ===

    /// Scan the whole board for a piece standing on a level-3 cell.
    ///
    /// If pieces of both colors qualify, the one found last in row-major
    /// order wins.
    #[must_use]
    pub fn check_win_condition(&self, board: &Board) -> Option<Color> {
        let mut winner = None;
        for (_, cell) in board.cells() {
            if cell.height() != WINNING_HEIGHT {
                continue;
            }
            if cell.has_color(Color::White) {
                winner = Some(Color::White);
            } else if cell.has_color(Color::Blue) {
                winner = Some(Color::Blue);
            }
        }
        winner
    }
}
