//! Game results and the outcome of a single step.

use serde::{Deserialize, Serialize};

use super::state::Game;
use crate::core::PlayerId;
use crate::round::Round;

/// Final result of an ended game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Higher cumulative score.
    Winner(PlayerId),
    /// Both players finished on the same total.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: &PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => p == player,
            GameResult::Draw => false,
        }
    }
}

/// What applying one action did to the game.
///
/// `round` is the round the action was applied to, after the action. When
/// that round ended and the game goes on, `next_round` is the freshly dealt
/// round, already appended to `game`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStep {
    pub game: Game,
    pub round: Round,
    pub round_ended: bool,
    pub game_ended: bool,
    pub next_round: Option<Round>,
}

impl GameStep {
    /// A step that left the round in progress.
    pub(crate) fn continuing(game: Game, round: Round) -> Self {
        Self {
            game,
            round,
            round_ended: false,
            game_ended: false,
            next_round: None,
        }
    }
}
