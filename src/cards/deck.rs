//! Full-deck construction.

use super::card::{Card, Suit, MAX_VALUE, MIN_VALUE};
use crate::core::GameRng;

/// Cards in one full deck.
pub const DECK_SIZE: usize = 52;

/// Every card once, Spades through Clubs, Ace through King within a suit.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for value in MIN_VALUE..=MAX_VALUE {
            deck.push(Card::new(suit, value));
        }
    }
    deck
}

/// A fresh deck in the order `rng` produces.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = full_deck();
    rng.shuffle(&mut deck);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_full_deck_is_unique() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: FxHashSet<Card> = deck.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_full_deck_order() {
        let deck = full_deck();
        assert_eq!(deck[0], Card::new(Suit::Spade, 1));
        assert_eq!(deck[12], Card::new(Suit::Spade, 13));
        assert_eq!(deck[13], Card::new(Suit::Diamond, 1));
        assert_eq!(deck[51], Card::new(Suit::Club, 13));
    }

    #[test]
    fn test_shuffled_deck_is_a_permutation() {
        let mut rng = GameRng::new(7);
        let mut deck = shuffled_deck(&mut rng);
        assert_ne!(deck, full_deck());

        deck.sort();
        let mut ordered = full_deck();
        ordered.sort();
        assert_eq!(deck, ordered);
    }

    #[test]
    fn test_shuffled_deck_is_deterministic() {
        let a = shuffled_deck(&mut GameRng::new(99));
        let b = shuffled_deck(&mut GameRng::new(99));
        assert_eq!(a, b);
    }
}
