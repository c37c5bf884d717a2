//! Card model: suits, cards, and the 52-card deck.
//!
//! ## Key Types
//!
//! - `Suit`: One of the four French suits
//! - `Card`: Immutable (suit, value) pair, Ace = 1 through King = 13
//! - `full_deck` / `shuffled_deck`: Deck construction
//!
//! Display helpers (`Card::rank_label`, `Suit::name`, `Suit::symbol`) live
//! here too; they are pure and any renderer may use them.

pub mod card;
pub mod deck;

pub use card::{Card, Suit, MAX_VALUE, MIN_VALUE};
pub use deck::{full_deck, shuffled_deck, DECK_SIZE};
