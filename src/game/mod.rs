//! Games: a sequence of rounds played to a target score.
//!
//! ## Key Types
//!
//! - `Game`: Players, rounds, status, RNG position and rules config
//! - `GameStep`: What one action did (round ended, game ended, next round)
//! - `GameResult`: Winner or draw once the game is over

pub mod state;
pub mod result;

pub use state::{Game, GameStatus};
pub use result::{GameResult, GameStep};
