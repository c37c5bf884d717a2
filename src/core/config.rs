//! Game configuration.
//!
//! The defaults are the house rules: seven cards each and a race to 500.
//! Hosts that want a shorter game override them with the builder setters and
//! call `validate()` before starting.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::DECK_SIZE;

/// Cards dealt to each player at the start of a round.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Cumulative score that ends the game.
pub const DEFAULT_TARGET_SCORE: i32 = 500;

/// Rules configuration carried by a `Game`.
///
/// ```
/// use rummy_core::core::GameConfig;
///
/// let config = GameConfig::default().with_target_score(250);
/// assert_eq!(config.hand_size, 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards dealt to each player.
    pub hand_size: usize,

    /// Cumulative score at which the game ends.
    pub target_score: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            target_score: DEFAULT_TARGET_SCORE,
        }
    }
}

impl GameConfig {
    /// Set the deal size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the game-ending score.
    #[must_use]
    pub fn with_target_score(mut self, target_score: i32) -> Self {
        self.target_score = target_score;
        self
    }

    /// Check that a round can actually be dealt and the game can end.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }
        // Both hands plus the seeded discard must come out of one deck.
        let dealt = self.hand_size.saturating_mul(2).saturating_add(1);
        if dealt > DECK_SIZE {
            return Err(ConfigError::DealTooLarge {
                hand_size: self.hand_size,
            });
        }
        if self.target_score <= 0 {
            return Err(ConfigError::NonPositiveTarget(self.target_score));
        }
        Ok(())
    }
}
