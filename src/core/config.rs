//! Session configuration.
//!
//! Consumed once when a session is built. The command-line layer parses
//! its arguments into a `SessionConfig`; the engine never reads arguments
//! itself.

use serde::{Deserialize, Serialize};

use super::piece::{Color, StrategyKind};
use crate::error::ParseError;

/// Per-session options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Strategy for the white player.
    pub white: StrategyKind,

    /// Strategy for the blue player.
    pub blue: StrategyKind,

    /// Record a snapshot before every turn so turns can be undone and
    /// redone. The session records them itself.
    pub history: bool,

    /// Attach post-turn scores to every committed turn.
    pub score_display: bool,

    /// Seed for the random and heuristic strategies.
    /// Same seed produces the same game for AI-only sessions.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            white: StrategyKind::Interactive,
            blue: StrategyKind::Interactive,
            history: false,
            score_display: false,
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Set the strategy for one color.
    pub fn with_strategy(mut self, color: Color, kind: StrategyKind) -> Self {
        match color {
            Color::White => self.white = kind,
            Color::Blue => self.blue = kind,
        }
        self
    }

    /// Enable or disable undo/redo history.
    pub fn with_history(mut self, enabled: bool) -> Self {
        self.history = enabled;
        self
    }

    /// Enable or disable score reporting.
    pub fn with_score_display(mut self, enabled: bool) -> Self {
        self.score_display = enabled;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The strategy kind configured for `color`.
    #[must_use]
    pub fn strategy(&self, color: Color) -> StrategyKind {
        match color {
            Color::White => self.white,
            Color::Blue => self.blue,
        }
    }
}

/// Parse an `on`/`off` toggle.
pub fn parse_toggle(token: &str) -> Result<bool, ParseError> {
    match token.trim() {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(ParseError::UnknownToggle(other.to_string())),
    }
}
