//! Core engine types: players, RNG, configuration, errors, actions.
//!
//! These are shared by every other module and carry no game rules of their
//! own.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;

pub use player::{PlayerId, PlayerPair};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, DEFAULT_HAND_SIZE, DEFAULT_TARGET_SCORE};
pub use error::{ActionError, ConfigError, IllegalAction, InvariantViolation};
pub use action::Action;
