//! Set validity predicates.
//!
//! A set (meld) is at least three cards that are either a *book* (all the
//! same value, any suits) or a *run* (one suit, consecutive values, no
//! repeats). Aces are low only: K-A-2 is not a run.
//!
//! These are pure functions over card slices so hosts can call them for UI
//! affordances (e.g. enabling a "lay down" button) as well as from reducers.

use smallvec::SmallVec;

use super::table::Table;
use crate::cards::Card;

/// Smallest legal set.
pub const MIN_SET_SIZE: usize = 3;

/// Largest subset size examined by `hand_contains_valid_set_using_card`.
///
/// A set holds at most 13 cards: a run covers each value of one suit once,
/// and a book has one card per suit.
pub const MAX_SEARCH_SET_SIZE: usize = 13;

/// Shape of a valid set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetKind {
    /// Same value, any suits.
    Book,
    /// Same suit, consecutive values.
    Run,
}

/// Classify `cards` as a set, or `None` if they are not one.
#[must_use]
pub fn set_kind(cards: &[Card]) -> Option<SetKind> {
    let first = match cards {
        [first, ..] if cards.len() >= MIN_SET_SIZE => *first,
        _ => return None,
    };

    if cards.iter().all(|c| c.value == first.value) {
        return Some(SetKind::Book);
    }
    if !cards.iter().all(|c| c.suit == first.suit) {
        return None;
    }

    let mut values: SmallVec<[u8; 16]> = cards.iter().map(|c| c.value).collect();
    values.sort_unstable();
    values
        .windows(2)
        .all(|w| w[0].checked_add(1) == Some(w[1]))
        .then_some(SetKind::Run)
}

/// Whether `cards` form a legal set.
///
/// ```
/// use rummy_core::cards::{Card, Suit};
/// use rummy_core::melds::is_valid_set;
///
/// let run = [Card::new(Suit::Spade, 5), Card::new(Suit::Spade, 7), Card::new(Suit::Spade, 6)];
/// assert!(is_valid_set(&run));
///
/// let wrap = [Card::new(Suit::Spade, 13), Card::new(Suit::Spade, 1), Card::new(Suit::Spade, 2)];
/// assert!(!is_valid_set(&wrap));
/// ```
#[must_use]
pub fn is_valid_set(cards: &[Card]) -> bool {
    set_kind(cards).is_some()
}

/// Whether `card` can be appended to some meld on the table.
#[must_use]
pub fn can_extend(card: Card, table: &Table) -> bool {
    can_extend_multiple(std::slice::from_ref(&card), table)
}

/// Whether all of `cards` together can be appended to a single meld.
#[must_use]
pub fn can_extend_multiple(cards: &[Card], table: &Table) -> bool {
    !cards.is_empty() && table.first_extendable(cards).is_some()
}

/// Whether some subset of `hand` containing `required` is a valid set.
///
/// Searches every subset size from 3 up to `min(13, hand.len())`, smallest
/// first, and stops at the first hit. Returns `false` if `required` is not
/// in the hand.
///
/// Every member of a set through `required` shares its value (a book) or its
/// suit (a run), so only those cards enter the search. That keeps the pool
/// at 15 cards or fewer however large the hand is.
#[must_use]
pub fn hand_contains_valid_set_using_card(hand: &[Card], required: Card) -> bool {
    let Some(position) = hand.iter().position(|&c| c == required) else {
        return false;
    };

    let others: SmallVec<[Card; 16]> = hand
        .iter()
        .enumerate()
        .filter(|&(i, c)| i != position && (c.suit == required.suit || c.value == required.value))
        .map(|(_, &c)| c)
        .collect();

    let limit = hand.len().min(MAX_SEARCH_SET_SIZE);
    let mut candidate: SmallVec<[Card; MAX_SEARCH_SET_SIZE]> = SmallVec::new();

    (MIN_SET_SIZE..=limit).any(|size| {
        any_combination(&others, size - 1, |combo| {
            candidate.clear();
            candidate.push(required);
            candidate.extend_from_slice(combo);
            is_valid_set(&candidate)
        })
    })
}

/// Visit every `k`-combination of `pool` in lexicographic index order until
/// `visit` returns true.
fn any_combination(pool: &[Card], k: usize, mut visit: impl FnMut(&[Card]) -> bool) -> bool {
    let n = pool.len();
    if k > n {
        return false;
    }

    let mut indices: SmallVec<[usize; MAX_SEARCH_SET_SIZE]> = (0..k).collect();
    let mut combo: SmallVec<[Card; MAX_SEARCH_SET_SIZE]> = SmallVec::with_capacity(k);

    loop {
        combo.clear();
        combo.extend(indices.iter().map(|&i| pool[i]));
        if visit(&combo) {
            return true;
        }

        // Rightmost index that can still move right.
        let mut i = k;
        while i > 0 && indices[i - 1] == n - k + i - 1 {
            i -= 1;
        }
        if i == 0 {
            return false;
        }
        indices[i - 1] += 1;
        for j in i..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::core::PlayerId;

    fn c(suit: Suit, value: u8) -> Card {
        Card::new(suit, value)
    }

    #[test]
    fn test_too_few_cards() {
        assert!(!is_valid_set(&[]));
        assert!(!is_valid_set(&[c(Suit::Spade, 5)]));
        assert!(!is_valid_set(&[c(Suit::Spade, 5), c(Suit::Heart, 5)]));
    }

    #[test]
    fn test_books() {
        assert_eq!(
            set_kind(&[c(Suit::Spade, 9), c(Suit::Heart, 9), c(Suit::Club, 9)]),
            Some(SetKind::Book)
        );
        assert!(is_valid_set(&[
            c(Suit::Spade, 1),
            c(Suit::Heart, 1),
            c(Suit::Club, 1),
            c(Suit::Diamond, 1),
        ]));
    }

    #[test]
    fn test_runs() {
        assert_eq!(
            set_kind(&[c(Suit::Spade, 5), c(Suit::Spade, 6), c(Suit::Spade, 7)]),
            Some(SetKind::Run)
        );
        assert!(!is_valid_set(&[c(Suit::Spade, 5), c(Suit::Spade, 6), c(Suit::Spade, 8)]));
        assert!(!is_valid_set(&[c(Suit::Spade, 5), c(Suit::Heart, 6), c(Suit::Spade, 7)]));
        // Unsorted input is fine.
        assert!(is_valid_set(&[c(Suit::Club, 12), c(Suit::Club, 10), c(Suit::Club, 11)]));
    }

    #[test]
    fn test_runs_sort_numerically() {
        // 9, 10, 11 sorts wrongly as text ("10" < "11" < "9").
        assert!(is_valid_set(&[c(Suit::Heart, 9), c(Suit::Heart, 10), c(Suit::Heart, 11)]));
    }

    #[test]
    fn test_ace_is_low_only() {
        assert!(is_valid_set(&[c(Suit::Spade, 1), c(Suit::Spade, 2), c(Suit::Spade, 3)]));
        assert!(!is_valid_set(&[c(Suit::Spade, 12), c(Suit::Spade, 13), c(Suit::Spade, 1)]));
        assert!(!is_valid_set(&[c(Suit::Spade, 13), c(Suit::Spade, 1), c(Suit::Spade, 2)]));
    }

    #[test]
    fn test_run_with_repeated_value_is_invalid() {
        let cards = [c(Suit::Spade, 5), c(Suit::Spade, 6), c(Suit::Spade, 6), c(Suit::Spade, 7)];
        assert!(!is_valid_set(&cards));
    }

    #[test]
    fn test_can_extend() {
        let owner = PlayerId::new("ann");
        let (table, _) = Table::new().insert_cards(
            &[c(Suit::Heart, 4), c(Suit::Heart, 5), c(Suit::Heart, 6)],
            &owner,
        );

        assert!(can_extend(c(Suit::Heart, 7), &table));
        assert!(can_extend(c(Suit::Heart, 3), &table));
        assert!(!can_extend(c(Suit::Heart, 8), &table));
        assert!(!can_extend(c(Suit::Club, 7), &table));
        assert!(!can_extend(c(Suit::Heart, 7), &Table::new()));

        assert!(can_extend_multiple(&[c(Suit::Heart, 7), c(Suit::Heart, 8)], &table));
        assert!(!can_extend_multiple(&[c(Suit::Heart, 8), c(Suit::Heart, 9)], &table));
        assert!(!can_extend_multiple(&[], &table));
    }

    #[test]
    fn test_hand_contains_valid_set_using_card() {
        let hand = [
            c(Suit::Spade, 2),
            c(Suit::Heart, 9),
            c(Suit::Club, 2),
            c(Suit::Diamond, 13),
            c(Suit::Heart, 2),
        ];
        assert!(hand_contains_valid_set_using_card(&hand, c(Suit::Club, 2)));
        assert!(!hand_contains_valid_set_using_card(&hand, c(Suit::Heart, 9)));
    }

    #[test]
    fn test_required_card_must_be_in_hand() {
        let hand = [c(Suit::Spade, 2), c(Suit::Club, 2), c(Suit::Heart, 2)];
        assert!(!hand_contains_valid_set_using_card(&hand, c(Suit::Diamond, 2)));
    }

    #[test]
    fn test_search_includes_full_hand_size() {
        // The only set is the whole three-card hand.
        let hand = [c(Suit::Club, 4), c(Suit::Club, 5), c(Suit::Club, 6)];
        assert!(hand_contains_valid_set_using_card(&hand, c(Suit::Club, 5)));
    }

    #[test]
    fn test_search_ignores_sets_without_required_card() {
        let hand = [
            c(Suit::Club, 4),
            c(Suit::Club, 5),
            c(Suit::Club, 6),
            c(Suit::Diamond, 11),
        ];
        assert!(!hand_contains_valid_set_using_card(&hand, c(Suit::Diamond, 11)));
    }

    #[test]
    fn test_search_in_large_hand() {
        let mut hand: Vec<Card> = (1..=13).map(|v| c(Suit::Diamond, v)).step_by(2).collect();
        hand.extend((1..=13).step_by(3).map(|v| c(Suit::Heart, v)));
        hand.push(c(Suit::Spade, 13));
        hand.push(c(Suit::Club, 13));
        assert!(hand.len() > MAX_SEARCH_SET_SIZE);

        // K♦ K♠ K♣ is a book.
        assert!(hand_contains_valid_set_using_card(&hand, c(Suit::Diamond, 13)));
        // Nothing builds a set around 3♦.
        assert!(!hand_contains_valid_set_using_card(&hand, c(Suit::Diamond, 3)));
    }

    #[test]
    fn test_search_in_huge_hand_without_set() {
        // Everything except the other Aces and 2♠: 48 cards, none of which
        // builds a set around A♠.
        let required = c(Suit::Spade, 1);
        let mut hand = vec![required];
        for suit in Suit::ALL {
            for value in 2..=13 {
                if (suit, value) != (Suit::Spade, 2) {
                    hand.push(c(suit, value));
                }
            }
        }
        assert!(hand.len() >= 30);
        assert!(!hand_contains_valid_set_using_card(&hand, required));

        // Adding 2♠ back makes A-2-3♠ available.
        hand.push(c(Suit::Spade, 2));
        assert!(hand_contains_valid_set_using_card(&hand, required));
    }

    #[test]
    fn test_out_of_range_values_do_not_overflow() {
        let high = [
            Card { suit: Suit::Spade, value: 254 },
            Card { suit: Suit::Spade, value: 255 },
            Card { suit: Suit::Spade, value: 255 },
        ];
        assert_eq!(set_kind(&high), None);
        assert!(!is_valid_set(&high));
    }

    #[test]
    fn test_any_combination_visits_all() {
        let pool: Vec<Card> = (1..=5).map(|v| c(Suit::Spade, v)).collect();
        let mut count = 0;
        let found = any_combination(&pool, 3, |_| {
            count += 1;
            false
        });
        assert!(!found);
        assert_eq!(count, 10);

        assert!(!any_combination(&pool, 6, |_| true));
    }
}
