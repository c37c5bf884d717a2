//! Legality checks shared by the reducers and exposed to hosts.
//!
//! Hosts use these to grey out moves before the player makes them; the
//! reducers run the same checks again, so a stale UI can never push an
//! illegal move through.

use super::reducers::lay_down;
use crate::cards::Card;
use crate::core::{InvariantViolation, PlayerId};
use crate::melds::{can_extend, hand_contains_valid_set_using_card};
use crate::round::{Phase, Round};

/// Whether `player` may take the discard pile from `from_index` up.
///
/// The top card is always available. For a deeper pickup the card at
/// `from_index` must either extend a meld already on the table or form a
/// valid set with the player's hand plus everything being picked up.
///
/// Ignores turn and phase; only the pile contents and the hand matter.
pub fn pickup_is_legal(
    round: &Round,
    from_index: usize,
    player: &PlayerId,
) -> Result<bool, InvariantViolation> {
    let len = round.discard.len();
    let Some(&bottom) = round.discard.get(from_index) else {
        return Err(InvariantViolation::DiscardIndexOutOfRange {
            index: from_index,
            len,
        });
    };
    if from_index + 1 == len {
        return Ok(true);
    }
    if can_extend(bottom, &round.table) {
        return Ok(true);
    }

    let mut combined: Vec<Card> = round.hand(player)?.iter().copied().collect();
    combined.extend(round.discard.iter().skip(from_index).copied());
    Ok(hand_contains_valid_set_using_card(&combined, bottom))
}

/// Every discard index `player` could pick up from right now.
///
/// Empty unless it is `player`'s turn in the Start phase of a live round.
#[must_use]
pub fn legal_pickup_indices(round: &Round, player: &PlayerId) -> Vec<usize> {
    if !may_start_turn(round, player) {
        return Vec::new();
    }
    (0..round.discard.len())
        .filter(|&i| pickup_is_legal(round, i, player).unwrap_or(false))
        .collect()
}

/// Whether `player` may draw from the deck right now.
#[must_use]
pub fn can_draw(round: &Round, player: &PlayerId) -> bool {
    may_start_turn(round, player) && !round.deck.is_empty()
}

/// Whether laying down `cards` would be accepted.
#[must_use]
pub fn can_lay_down(round: &Round, cards: &[Card], player: &PlayerId) -> bool {
    lay_down(round, cards, player).is_ok()
}

/// Whether `player` may end the turn by discarding.
#[must_use]
pub fn can_discard(round: &Round, player: &PlayerId) -> bool {
    round.turn.player == *player
        && round.turn.phase == Phase::Play
        && round.turn.must_play_card.is_none()
}

fn may_start_turn(round: &Round, player: &PlayerId) -> bool {
    !round.is_ended() && round.turn.player == *player && round.turn.phase == Phase::Start
}
