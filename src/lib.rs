//! # rummy-core
//!
//! Deterministic rules engine for two-player Rummy played over rounds to a
//! target score.
//!
//! ## Design Principles
//!
//! 1. **Snapshot In, Snapshot Out**: Every action is a pure function from a
//!    round snapshot to the next snapshot or a rejection. The caller's state
//!    is never touched.
//!
//! 2. **Same Answer Everywhere**: Shuffling goes through a seeded `GameRng`
//!    whose position travels with the game, so client prediction and the
//!    authoritative server deal identical rounds.
//!
//! 3. **No I/O**: Persistence, sync and identity belong to the host. The
//!    core only sees the snapshots it is handed.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so reducers
//!   return new snapshots that share structure with the old one.
//!
//! - **Two Kinds of Rejection**: `IllegalAction` is a routine rules block
//!   the host shows to the player; `InvariantViolation` means the host's
//!   state and the core disagree.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors, actions
//! - `cards`: Suits, cards, the 52-card deck
//! - `melds`: Set validity and the shared table of melds
//! - `round`: Round snapshots, dealing, scoring, snapshot encoding
//! - `rules`: Action reducers and legality checks
//! - `game`: Rounds strung together into a game

pub mod core;
pub mod cards;
pub mod melds;
pub mod round;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ConfigError, GameConfig, GameRng, GameRngState, IllegalAction,
    InvariantViolation, PlayerId, PlayerPair,
};

pub use crate::cards::{full_deck, Card, Suit, DECK_SIZE};

pub use crate::melds::{
    can_extend, can_extend_multiple, hand_contains_valid_set_using_card, is_valid_set, Meld,
    MeldEntry, Placement, Table,
};

pub use crate::round::{initialize_round, round_score, Phase, Round, Turn};

pub use crate::rules::{discard, draw, lay_down, pick_up_discards, reorder_hand};

pub use crate::game::{Game, GameResult, GameStatus, GameStep};
