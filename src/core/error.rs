//! Error taxonomy for reducers and configuration.
//!
//! Two kinds of failure come out of a reducer:
//!
//! - `IllegalAction`: the move breaks a rule (wrong turn, wrong phase, not a
//!   meld, pending must-play card). Routine; the host shows a notice and keeps
//!   its snapshot.
//! - `InvariantViolation`: the action or snapshot refers to state that cannot
//!   exist (a card missing from the hand, an unknown player). The host and the
//!   core disagree about the game and the host should resynchronize.
//!
//! Both are wrapped in `ActionError` so reducers have a single error type.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::Card;
use crate::round::Phase;

/// A rule-breaking move. State is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalAction {
    #[error("the round is over")]
    RoundOver,
    #[error("the game is over")]
    GameOver,
    #[error("it is not this player's turn")]
    NotYourTurn,
    #[error("action requires the {expected:?} phase but the turn is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("the deck is empty")]
    DeckEmpty,
    #[error("the discard pile is empty")]
    DiscardPileEmpty,
    #[error("cannot pick up the discard pile from index {index}")]
    IllegalPickup { index: usize },
    #[error("no cards selected")]
    NoCardsSelected,
    #[error("cannot lay down the entire hand")]
    CannotLayDownEntireHand,
    #[error("cards do not form or extend a valid set")]
    InvalidMeld,
    #[error("{0} must be played before discarding")]
    MustPlayPending(Card),
    #[error("{0} was selected more than once")]
    DuplicateSelection(Card),
}

/// Host and core disagree about the state of the round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("player {0} is not part of this round")]
    UnknownPlayer(PlayerId),
    #[error("{card} is not in {player}'s hand")]
    CardNotInHand { player: PlayerId, card: Card },
    #[error("discard index {index} is out of range for a pile of {len}")]
    DiscardIndexOutOfRange { index: usize, len: usize },
    #[error("hand index {index} is out of range for a hand of {len}")]
    HandIndexOutOfRange { index: usize, len: usize },
    #[error("expected {expected} at hand index {index}")]
    HandIndexMismatch { index: usize, expected: Card },
    #[error("{0} appears more than once in the round")]
    DuplicateCard(Card),
    #[error("round holds {0} cards instead of a full deck")]
    CardCount(usize),
    #[error("round has {0} players instead of two")]
    PlayerCount(usize),
    #[error("must-play card {0} is not in the turn holder's hand")]
    MustPlayCardNotInHand(Card),
    #[error("card value {0} is outside 1..=13")]
    InvalidCardValue(u8),
    #[error("table meld {0} is not a valid set")]
    InvalidMeldOnTable(usize),
    #[error("table meld {0} is not sorted by value")]
    UnsortedMeld(usize),
    #[error("table meld {meld} holds a card laid by {owner}, who is not in this round")]
    UnknownMeldOwner { meld: usize, owner: PlayerId },
    #[error("game has no current round")]
    MissingRound,
    #[error("round {0} was superseded before it ended")]
    UnfinishedRound(usize),
    #[error("game config is invalid: {0}")]
    InvalidConfig(ConfigError),
}

/// Any reducer failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("illegal action: {0}")]
    Illegal(#[from] IllegalAction),
    #[error("invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),
}

impl ActionError {
    /// A routine rule rejection.
    #[must_use]
    pub fn is_illegal(&self) -> bool {
        matches!(self, ActionError::Illegal(_))
    }

    /// A desynchronized-state fault.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, ActionError::Invariant(_))
    }
}

/// Rejected `GameConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("hand size must be at least 1")]
    EmptyHand,
    #[error("two hands of {hand_size} plus a discard do not fit in one deck")]
    DealTooLarge { hand_size: usize },
    #[error("target score must be positive, got {0}")]
    NonPositiveTarget(i32),
}
