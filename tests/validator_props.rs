//! Property tests for set validity and discard pickups.
//!
//! Inputs are generated valid by construction (dependent generators) rather
//! than filtered, so no case is thrown away.

use proptest::prelude::*;
use rummy_core::cards::{Card, Suit};
use rummy_core::core::{GameRng, PlayerId};
use rummy_core::melds::{hand_contains_valid_set_using_card, is_valid_set};
use rummy_core::round::initialize_round;
use rummy_core::rules::{pick_up_discards, pickup_is_legal};

fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

fn card() -> impl Strategy<Value = Card> {
    (suit(), 1u8..=13).prop_map(|(suit, value)| Card::new(suit, value))
}

/// Three or four distinct suits of one value, in any order.
fn book() -> impl Strategy<Value = Vec<Card>> {
    (1u8..=13, prop::sample::subsequence(Suit::ALL.to_vec(), 3..=4))
        .prop_flat_map(|(value, suits)| {
            let cards: Vec<Card> = suits.into_iter().map(|s| Card::new(s, value)).collect();
            Just(cards).prop_shuffle()
        })
}

/// `(suit, start, len)` with `start + len - 1 <= 13`.
fn run_bounds() -> impl Strategy<Value = (Suit, u8, u8)> {
    (suit(), 1u8..=11).prop_flat_map(|(suit, start)| (Just(suit), Just(start), 3u8..=(14 - start)))
}

fn run_cards(suit: Suit, start: u8, len: u8) -> Vec<Card> {
    (start..start + len).map(|v| Card::new(suit, v)).collect()
}

proptest! {
    /// Property: any three or more cards of one value form a book.
    #[test]
    fn prop_books_are_valid(cards in book()) {
        prop_assert!(is_valid_set(&cards));
    }

    /// Property: fewer than three cards are never a set.
    #[test]
    fn prop_short_selections_invalid(cards in prop::collection::vec(card(), 0..3)) {
        prop_assert!(!is_valid_set(&cards));
    }

    /// Property: consecutive same-suit values form a run in any order.
    #[test]
    fn prop_runs_are_valid(
        (suit, start, len) in run_bounds(),
        order in any::<u64>(),
    ) {
        let mut cards = run_cards(suit, start, len);
        GameRng::new(order).shuffle(&mut cards);
        prop_assert!(is_valid_set(&cards));
    }

    /// Property: removing an interior card from a run breaks it.
    #[test]
    fn prop_gapped_runs_invalid(
        (suit, start, len, gap) in (suit(), 1u8..=10)
            .prop_flat_map(|(suit, start)| (Just(suit), Just(start), 4u8..=(14 - start)))
            .prop_flat_map(|(suit, start, len)| (Just(suit), Just(start), Just(len), 1..len - 1)),
    ) {
        let mut cards = run_cards(suit, start, len);
        cards.remove(gap as usize);
        prop_assert!(!is_valid_set(&cards));
    }

    /// Property: a run never wraps from King to Ace.
    #[test]
    fn prop_no_wraparound(suit in suit(), low_len in 1u8..=3) {
        let mut cards = vec![Card::new(suit, 13)];
        cards.extend((1..=low_len).map(|v| Card::new(suit, v)));
        prop_assert!(!is_valid_set(&cards));
    }

    /// Property: a hand holding a book finds it from any of its cards.
    #[test]
    fn prop_search_finds_book(
        cards in book(),
        filler in prop::collection::vec(card(), 0..6),
        pick in any::<prop::sample::Index>(),
    ) {
        let required = cards[pick.index(cards.len())];
        let mut hand = filler;
        hand.extend(cards.iter().copied());
        prop_assert!(hand_contains_valid_set_using_card(&hand, required));
    }

    /// Property: the top of the discard pile can always be taken.
    #[test]
    fn prop_top_pickup_always_legal(seed in any::<u64>()) {
        let ann = PlayerId::new("ann");
        let bob = PlayerId::new("bob");
        let round = initialize_round(&ann, &bob, &mut GameRng::new(seed));

        prop_assert_eq!(pickup_is_legal(&round, 0, &ann), Ok(true));
        prop_assert_eq!(pickup_is_legal(&round, 0, &bob), Ok(true));

        let next = pick_up_discards(&round, 0, &ann).unwrap();
        prop_assert_eq!(next.turn.must_play_card, None);
        prop_assert_eq!(next.hand_size(&ann), 8);
        prop_assert!(next.table.is_empty());
    }
}
