//! Game session: turn loop, win detection, history hooks.

use tracing::{debug, info, instrument};

use crate::core::{Board, Color, GameRng, Player, Scores, SessionConfig, Snapshot, Turn};
use crate::error::SessionError;
use crate::history::HistoryManager;
use crate::rules::{GameResult, RuleEngine, WinReason};
use crate::scoring::ScoringModel;
use crate::strategy::{build_strategy, InputSource, TurnDecision, TurnStrategy};

/// What happened after a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Play continues with the other color.
    Continue,
    /// The game is over.
    Finished(GameResult),
}

impl Outcome {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Outcome::Finished(_))
    }
}

/// Builder for creating a `GameSession`.
pub struct SessionBuilder {
    config: SessionConfig,
    inputs: [Option<Box<dyn InputSource>>; 2],
    board: Option<Board>,
}

impl SessionBuilder {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            inputs: [None, None],
            board: None,
        }
    }

    /// Input source for an interactive color.
    pub fn input(mut self, color: Color, input: Box<dyn InputSource>) -> Self {
        self.inputs[color.index()] = Some(input);
        self
    }

    /// Start from a custom position instead of the standard opening.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Build the session.
    ///
    /// Fails if an interactive color has no input source.
    pub fn build(mut self) -> Result<GameSession, SessionError> {
        let mut rng = GameRng::new(self.config.seed);
        let white = build_strategy(
            Color::White,
            self.config.white,
            rng.fork(),
            self.inputs[Color::White.index()].take(),
        )?;
        let blue = build_strategy(
            Color::Blue,
            self.config.blue,
            rng.fork(),
            self.inputs[Color::Blue.index()].take(),
        )?;

        let board = self.board.unwrap_or_default();
        let history = self.config.history.then(|| {
            let mut history = HistoryManager::new();
            history.record_before_turn(board.snapshot());
            history
        });

        Ok(GameSession {
            board,
            rules: RuleEngine::new(),
            scoring: ScoringModel::new(),
            players: [
                Player::new(Color::White, self.config.white),
                Player::new(Color::Blue, self.config.blue),
            ],
            strategies: [white, blue],
            history,
            turns: Vec::new(),
            result: None,
            config: self.config,
        })
    }
}

/// A running game between two strategies.
///
/// ## Turn loop
///
/// `play_turn` asks the active color's strategy for a turn, applies it,
/// advances the turn counter, then checks for a winner: first whether the
/// next color can move at all, then the whole-board level-3 scan.
/// Once a winner is declared no further turns are played.
///
/// ## History
///
/// With history enabled, the session snapshots the board when it is built
/// and after every turn that does not end the game. Between turns a driver
/// may call `undo()` / `redo()` any number of times; `play_turn()` commits
/// the current board (as `commit_next()` does) before playing.
pub struct GameSession {
    config: SessionConfig,
    board: Board,
    rules: RuleEngine,
    scoring: ScoringModel,
    players: [Player; 2],
    strategies: [Box<dyn TurnStrategy>; 2],
    history: Option<HistoryManager>,
    turns: Vec<Turn>,
    result: Option<GameResult>,
}

impl GameSession {
    /// Session for two AI strategies on the standard opening.
    ///
    /// Fails if either color is configured as interactive.
    pub fn automated(config: SessionConfig) -> Result<Self, SessionError> {
        SessionBuilder::new(config).build()
    }

    // === Accessors ===

    /// The live board (read-only).
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Deep copy of the live board for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    /// The player to move.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        self.player(self.board.current_player())
    }

    /// Scores of the player to move on the current board.
    #[must_use]
    pub fn current_scores(&self) -> Scores {
        self.scoring
            .scores(&self.board, self.board.current_player())
    }

    /// Every turn applied so far, including turns later undone.
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    // === Turn loop ===

    fn finish(&mut self, winner: Color, reason: WinReason) -> Outcome {
        let result = GameResult::new(winner, reason);
        info!(%winner, ?reason, turn = self.board.turn(), "game over");
        self.result = Some(result);
        Outcome::Finished(result)
    }

    fn ensure_running(&self) -> Result<(), SessionError> {
        match self.result {
            Some(result) => Err(SessionError::GameOver(result.winner)),
            None => Ok(()),
        }
    }

    /// Play one turn for the active color.
    #[instrument(level = "debug", skip(self), fields(turn = self.board.turn()))]
    pub fn play_turn(&mut self) -> Result<Outcome, SessionError> {
        self.ensure_running()?;
        if let Some(history) = self.history.as_mut() {
            history.commit_next();
        }

        let color = self.board.current_player();
        if self.rules.enumerate_turns(&mut self.board, color).is_none() {
            return Ok(self.finish(color.opponent(), WinReason::OpponentBlocked));
        }

        let player = self.players[color.index()];
        let decision = self.strategies[color.index()].make_turn(
            &self.board,
            &player,
            self.config.score_display,
        );
        let turn = match decision {
            TurnDecision::Play(turn) => turn,
            TurnDecision::NoLegalTurn { winner } => {
                return Ok(self.finish(winner, WinReason::OpponentBlocked));
            }
            TurnDecision::InputClosed => return Err(SessionError::InputClosed(color)),
        };

        self.rules.apply_turn(&mut self.board, turn.candidate)?;
        self.board.advance_turn();
        self.turns.push(turn);
        debug!(player = %color, turn = %turn.candidate, scores = ?turn.scores, "turn applied");

        let next = self.board.current_player();
        if self.rules.enumerate_turns(&mut self.board, next).is_none() {
            return Ok(self.finish(next.opponent(), WinReason::OpponentBlocked));
        }

        if let Some(winner) = self.rules.check_win_condition(&self.board) {
            return Ok(self.finish(winner, WinReason::ReachedLevelThree));
        }

        if let Some(history) = self.history.as_mut() {
            history.record_before_turn(self.board.snapshot());
        }
        Ok(Outcome::Continue)
    }

    /// Play turns until someone wins.
    pub fn play_to_end(&mut self) -> Result<GameResult, SessionError> {
        loop {
            if let Outcome::Finished(result) = self.play_turn()? {
                return Ok(result);
            }
        }
    }

    // === History ===

    fn history_mut(&mut self) -> Result<&mut HistoryManager, SessionError> {
        self.history.as_mut().ok_or(SessionError::HistoryDisabled)
    }

    /// Restore the previous snapshot. Returns false if there is none.
    pub fn undo(&mut self) -> Result<bool, SessionError> {
        self.ensure_running()?;
        let history = self.history.as_mut().ok_or(SessionError::HistoryDisabled)?;
        Ok(history.undo(&mut self.board))
    }

    /// Re-apply the most recently undone snapshot. Returns false if there
    /// is none.
    pub fn redo(&mut self) -> Result<bool, SessionError> {
        self.ensure_running()?;
        let history = self.history.as_mut().ok_or(SessionError::HistoryDisabled)?;
        Ok(history.redo(&mut self.board))
    }

    /// Proceed with a new move from the current board, discarding redo.
    ///
    /// `play_turn` does this itself; calling it first is harmless.
    pub fn commit_next(&mut self) -> Result<(), SessionError> {
        self.ensure_running()?;
        self.history_mut()?.commit_next();
        Ok(())
    }
}
