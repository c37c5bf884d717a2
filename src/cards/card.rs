//! Playing cards.
//!
//! A `Card` is a plain value: two cards are the same card exactly when suit
//! and value match. Aces are value 1 and rank low only.

use serde::{Deserialize, Serialize};

use crate::core::InvariantViolation;

/// Lowest card value (Ace).
pub const MIN_VALUE: u8 = 1;

/// Highest card value (King).
pub const MAX_VALUE: u8 = 13;

const RANK_LABELS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suit {
    Spade,
    Diamond,
    Heart,
    Club,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Diamond, Suit::Heart, Suit::Club];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spade => "Spades",
            Suit::Diamond => "Diamonds",
            Suit::Heart => "Hearts",
            Suit::Club => "Clubs",
        }
    }

    /// Single-character suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Club => '♣',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single card.
///
/// ```
/// use rummy_core::cards::{Card, Suit};
///
/// let ace = Card::new(Suit::Spade, 1);
/// assert_eq!(ace.rank_label(), "A");
/// assert_eq!(ace.to_string(), "A♠");
/// assert_eq!(ace.points(), 15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub value: u8,
}

impl Card {
    /// Create a card.
    ///
    /// Panics if `value` is outside `1..=13`; use `try_new` for untrusted input.
    #[must_use]
    pub const fn new(suit: Suit, value: u8) -> Self {
        assert!(value >= MIN_VALUE && value <= MAX_VALUE, "Card value must be 1..=13");
        Self { suit, value }
    }

    /// Create a card from untrusted input.
    pub fn try_new(suit: Suit, value: u8) -> Result<Self, InvariantViolation> {
        if Self::is_valid_value(value) {
            Ok(Self { suit, value })
        } else {
            Err(InvariantViolation::InvalidCardValue(value))
        }
    }

    /// Whether `value` names a real rank.
    #[must_use]
    pub const fn is_valid_value(value: u8) -> bool {
        value >= MIN_VALUE && value <= MAX_VALUE
    }

    /// Scoring value: Ace 15, ten through King 10, everything else 5.
    #[must_use]
    pub const fn points(self) -> i32 {
        match self.value {
            1 => 15,
            10..=13 => 10,
            _ => 5,
        }
    }

    /// Rank as printed on the card face ("A", "2".."10", "J", "Q", "K").
    #[must_use]
    pub fn rank_label(self) -> &'static str {
        RANK_LABELS
            .get(usize::from(self.value).wrapping_sub(1))
            .copied()
            .unwrap_or("?")
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}
