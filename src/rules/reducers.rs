//! Action reducers.
//!
//! Each reducer takes a round snapshot and the acting player and returns
//! either the next snapshot or an `ActionError`. The input is never
//! modified, so a rejected action leaves the caller's state exactly as it
//! was.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, warn};

use super::legality::pickup_is_legal;
use crate::cards::Card;
use crate::core::{ActionError, IllegalAction, InvariantViolation, PlayerId};
use crate::melds::is_valid_set;
use crate::round::{Phase, Round, Turn};

/// Draw the top card of the deck.
///
/// Start phase only. Moves the turn to the Play phase.
pub fn draw(round: &Round, actor: &PlayerId) -> Result<Round, ActionError> {
    ensure_turn(round, actor)?;
    ensure_phase(round, Phase::Start)?;

    let mut next = round.clone();
    let card = next.deck.pop_front().ok_or(IllegalAction::DeckEmpty)?;
    hand_mut(&mut next, actor)?.push_back(card);
    next.turn.phase = Phase::Play;

    debug!(player = %actor, deck = next.deck.len(), "Drew from deck");
    Ok(next)
}

/// Pick up the discard pile from `from_index` to the top.
///
/// Start phase only. Taking just the top card is always allowed; a deeper
/// pickup must be justified by its bottom card (see
/// `legality::pickup_is_legal`). Picking up more than one card makes the
/// bottom one the must-play card.
pub fn pick_up_discards(
    round: &Round,
    from_index: usize,
    actor: &PlayerId,
) -> Result<Round, ActionError> {
    ensure_turn(round, actor)?;
    ensure_phase(round, Phase::Start)?;

    let len = round.discard.len();
    if len == 0 {
        return Err(IllegalAction::DiscardPileEmpty.into());
    }
    if from_index >= len {
        return Err(violation(InvariantViolation::DiscardIndexOutOfRange {
            index: from_index,
            len,
        }));
    }
    if !pickup_is_legal(round, from_index, actor)? {
        return Err(IllegalAction::IllegalPickup { index: from_index }.into());
    }

    let mut next = round.clone();
    let picked = next.discard.split_off(from_index);
    let must_play_card = if picked.len() > 1 { picked.front().copied() } else { None };
    hand_mut(&mut next, actor)?.append(picked.clone());
    next.turn.phase = Phase::Play;
    next.turn.must_play_card = must_play_card;

    debug!(
        player = %actor,
        picked = picked.len(),
        must_play = ?must_play_card,
        "Picked up discards"
    );
    Ok(next)
}

/// Move `cards` from the actor's hand to the table.
///
/// Play phase only. The selection must be non-empty, must leave at least one
/// card in hand, and must either be a valid set by itself or extend a single
/// existing meld. Laying down the must-play card clears the obligation.
pub fn lay_down(round: &Round, cards: &[Card], actor: &PlayerId) -> Result<Round, ActionError> {
    ensure_turn(round, actor)?;
    ensure_phase(round, Phase::Play)?;

    if cards.is_empty() {
        return Err(IllegalAction::NoCardsSelected.into());
    }
    let mut seen: SmallVec<[Card; 8]> = SmallVec::new();
    for &card in cards {
        if seen.contains(&card) {
            return Err(IllegalAction::DuplicateSelection(card).into());
        }
        seen.push(card);
    }

    let hand = round.hand(actor)?;
    for &card in cards {
        ensure_in_hand(hand, card, actor)?;
    }
    if cards.len() >= hand.len() {
        return Err(IllegalAction::CannotLayDownEntireHand.into());
    }
    if !is_valid_set(cards) && round.table.first_extendable(cards).is_none() {
        return Err(IllegalAction::InvalidMeld.into());
    }

    let mut next = round.clone();
    let (table, placement) = round.table.insert_cards(cards, actor);
    next.table = table;
    hand_mut(&mut next, actor)?.retain(|card| !cards.contains(card));
    if let Some(pending) = next.turn.must_play_card {
        if cards.contains(&pending) {
            next.turn.must_play_card = None;
        }
    }

    debug!(
        player = %actor,
        cards = cards.len(),
        meld = placement.index(),
        ?placement,
        "Laid down"
    );
    Ok(next)
}

/// Discard one card and pass the turn to `opponent`.
///
/// Play phase only, and only once any must-play card has been laid down.
/// The returned round may be ended (`Round::is_ended`); rolling over into the
/// next round is the job of `Game`.
pub fn discard(
    round: &Round,
    card: Card,
    actor: &PlayerId,
    opponent: &PlayerId,
) -> Result<Round, ActionError> {
    ensure_turn(round, actor)?;
    if round.opponent_of(actor)? != opponent {
        return Err(violation(InvariantViolation::UnknownPlayer(opponent.clone())));
    }
    ensure_phase(round, Phase::Play)?;
    if let Some(pending) = round.turn.must_play_card {
        return Err(IllegalAction::MustPlayPending(pending).into());
    }
    ensure_in_hand(round.hand(actor)?, card, actor)?;

    let mut next = round.clone();
    hand_mut(&mut next, actor)?.retain(|c| *c != card);
    next.discard.push_back(card);
    next.turn = Turn::start(opponent.clone());

    debug!(player = %actor, %card, next = %opponent, "Discarded");
    Ok(next)
}

/// Move `card` from `from_index` to `to_index` in the actor's hand.
///
/// Cosmetic: allowed at any time and never touches the turn. A `to_index`
/// past the end moves the card to the end.
pub fn reorder_hand(
    round: &Round,
    card: Card,
    from_index: usize,
    to_index: usize,
    actor: &PlayerId,
) -> Result<Round, ActionError> {
    let hand = round.hand(actor)?;
    ensure_in_hand(hand, card, actor)?;
    match hand.get(from_index) {
        None => {
            return Err(violation(InvariantViolation::HandIndexOutOfRange {
                index: from_index,
                len: hand.len(),
            }))
        }
        Some(&at) if at != card => {
            return Err(violation(InvariantViolation::HandIndexMismatch {
                index: from_index,
                expected: card,
            }))
        }
        Some(_) => {}
    }

    let mut next = round.clone();
    let hand = hand_mut(&mut next, actor)?;
    hand.remove(from_index);
    let to_index = to_index.min(hand.len());
    hand.insert(to_index, card);

    debug!(player = %actor, %card, from_index, to_index, "Reordered hand");
    Ok(next)
}

fn ensure_turn(round: &Round, actor: &PlayerId) -> Result<(), ActionError> {
    if !round.player_cards.contains_key(actor) {
        return Err(violation(InvariantViolation::UnknownPlayer(actor.clone())));
    }
    if round.is_ended() {
        return Err(IllegalAction::RoundOver.into());
    }
    if round.turn.player != *actor {
        return Err(IllegalAction::NotYourTurn.into());
    }
    Ok(())
}

fn ensure_phase(round: &Round, expected: Phase) -> Result<(), ActionError> {
    let actual = round.turn.phase;
    if actual != expected {
        return Err(IllegalAction::WrongPhase { expected, actual }.into());
    }
    Ok(())
}

fn ensure_in_hand(hand: &Vector<Card>, card: Card, actor: &PlayerId) -> Result<(), ActionError> {
    if hand.contains(&card) {
        Ok(())
    } else {
        Err(violation(InvariantViolation::CardNotInHand {
            player: actor.clone(),
            card,
        }))
    }
}

fn hand_mut<'a>(round: &'a mut Round, player: &PlayerId) -> Result<&'a mut Vector<Card>, ActionError> {
    round
        .player_cards
        .get_mut(player)
        .map(|cards| &mut cards.hand)
        .ok_or_else(|| violation(InvariantViolation::UnknownPlayer(player.clone())))
}

fn violation(violation: InvariantViolation) -> ActionError {
    warn!(%violation, "Action refers to state the round does not have");
    ActionError::Invariant(violation)
}
