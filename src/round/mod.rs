//! Rounds: snapshot types, dealing, scoring, and snapshot encoding.
//!
//! ## Key Types
//!
//! - `Round`: Deck, discard pile, turn, table and hands for one hand of play
//! - `Turn` / `Phase`: Whose turn it is, and whether they still have to draw
//! - `initialize_round`: Shuffle and deal
//! - `round_score` / `cumulative_scores`: Scoring

pub mod state;
pub mod lifecycle;
pub mod scoring;
pub mod snapshot;

pub use state::{Phase, PlayerCards, Round, Turn};
pub use lifecycle::{initialize_round, initialize_round_with};
pub use scoring::{cumulative_scores, player_round_score, round_score, round_scores};
pub use snapshot::{decode_game, decode_round, encode_game, encode_round, SnapshotError};
