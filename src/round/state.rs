//! Round snapshot types.
//!
//! ## Round
//!
//! Everything needed to play one hand: the face-down deck (front = top),
//! the discard pile (back = top), whose turn it is, the shared table, and
//! each player's hand.
//!
//! All collections are `im` persistent structures, so cloning a round is
//! O(1) and reducers can hand back a new snapshot while the caller keeps the
//! old one.
//!
//! Field names serialize in camelCase to match the document shape hosts
//! already store (`playerCards`, `mustPlayCard`).

use im::{OrdMap, Vector};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, DECK_SIZE};
use crate::core::{InvariantViolation, PlayerId};
use crate::melds::Table;

/// Sub-state of a player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Must draw from the deck or pick up from the discard pile.
    #[serde(rename = "START_PHASE")]
    Start,
    /// May lay down, then ends the turn by discarding.
    #[serde(rename = "PLAY_PHASE")]
    Play,
}

/// Whose turn it is and what they may do.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    pub player: PlayerId,
    pub phase: Phase,
    /// Deepest card of a multi-card discard pickup; must be laid down before
    /// the turn can end.
    pub must_play_card: Option<Card>,
}

impl Turn {
    /// Start-of-turn state for `player`.
    #[must_use]
    pub fn start(player: PlayerId) -> Self {
        Self {
            player,
            phase: Phase::Start,
            must_play_card: None,
        }
    }
}

/// One player's private cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCards {
    /// Player-arranged order; not significant for validity.
    pub hand: Vector<Card>,
}

/// Snapshot of a round in progress (or finished).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// Face-down stock; index 0 is drawn next.
    pub deck: Vector<Card>,
    /// Face-up pile; the last card is the top.
    pub discard: Vector<Card>,
    pub turn: Turn,
    pub table: Table,
    pub player_cards: OrdMap<PlayerId, PlayerCards>,
}

impl Round {
    /// A player's hand.
    pub fn hand(&self, player: &PlayerId) -> Result<&Vector<Card>, InvariantViolation> {
        self.player_cards
            .get(player)
            .map(|cards| &cards.hand)
            .ok_or_else(|| InvariantViolation::UnknownPlayer(player.clone()))
    }

    /// Number of cards in a player's hand (0 for an unknown player).
    #[must_use]
    pub fn hand_size(&self, player: &PlayerId) -> usize {
        self.player_cards.get(player).map_or(0, |cards| cards.hand.len())
    }

    /// Players in this round, in id order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerId> {
        self.player_cards.keys()
    }

    /// The player who is not `player`.
    pub fn opponent_of(&self, player: &PlayerId) -> Result<&PlayerId, InvariantViolation> {
        if !self.player_cards.contains_key(player) {
            return Err(InvariantViolation::UnknownPlayer(player.clone()));
        }
        self.players()
            .find(|p| *p != player)
            .ok_or_else(|| InvariantViolation::PlayerCount(self.player_cards.len()))
    }

    /// Top of the discard pile.
    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    /// A round ends when, at a turn boundary, the deck has run out or
    /// someone has no cards left.
    ///
    /// Drawing the last card does not end the round on the spot: the player
    /// finishes the turn and the discard that follows ends it.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.turn.phase == Phase::Start
            && (self.deck.is_empty() || self.player_cards.values().any(|cards| cards.hand.is_empty()))
    }

    /// Cards `player` has laid on the table, in meld order.
    #[must_use]
    pub fn melds_owned_by(&self, player: &PlayerId) -> Vec<Card> {
        self.table.cards_owned_by(player).collect()
    }

    /// Every card in the round: deck, discard pile, hands, table.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.deck
            .iter()
            .copied()
            .chain(self.discard.iter().copied())
            .chain(self.player_cards.values().flat_map(|cards| cards.hand.iter().copied()))
            .chain(self.table.cards())
    }

    /// Verify the snapshot describes a reachable round.
    ///
    /// - exactly two players, one of whom holds the turn
    /// - every card value in range
    /// - the deck, discard pile, hands and table together hold each of the
    ///   52 cards exactly once
    /// - every table meld is a valid set, sorted by value, laid by the
    ///   round's players
    /// - a pending must-play card is in the turn holder's hand
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.player_cards.len() != 2 {
            return Err(InvariantViolation::PlayerCount(self.player_cards.len()));
        }
        let hand = self.hand(&self.turn.player)?;

        let mut seen = FxHashSet::default();
        let mut count = 0;
        for card in self.all_cards() {
            if !Card::is_valid_value(card.value) {
                return Err(InvariantViolation::InvalidCardValue(card.value));
            }
            if !seen.insert(card) {
                return Err(InvariantViolation::DuplicateCard(card));
            }
            count += 1;
        }
        if count != DECK_SIZE {
            return Err(InvariantViolation::CardCount(count));
        }

        if let Some(index) = self.table.first_invalid_meld() {
            return Err(InvariantViolation::InvalidMeldOnTable(index));
        }
        if let Some(index) = self.table.first_unsorted_meld() {
            return Err(InvariantViolation::UnsortedMeld(index));
        }
        for (index, meld) in self.table.iter().enumerate() {
            if let Some(entry) = meld
                .entries()
                .iter()
                .find(|e| !self.player_cards.contains_key(&e.owner))
            {
                return Err(InvariantViolation::UnknownMeldOwner {
                    meld: index,
                    owner: entry.owner.clone(),
                });
            }
        }

        if let Some(card) = self.turn.must_play_card {
            if !hand.contains(&card) {
                return Err(InvariantViolation::MustPlayCardNotInHand(card));
            }
        }

        Ok(())
    }
}
