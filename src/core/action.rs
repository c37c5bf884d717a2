//! Host-facing action envelope.
//!
//! Each variant names one reducer in `rules` together with its arguments, so
//! a host can ship player intents over the wire and replay them with
//! `Game::apply`. The acting player is passed alongside, never inside, the
//! action: identity comes from the host's session, not from the payload.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// A player intent.
///
/// ## Example
///
/// ```
/// use rummy_core::cards::{Card, Suit};
/// use rummy_core::core::Action;
///
/// let lay = Action::lay_down(&[
///     Card::new(Suit::Spade, 10),
///     Card::new(Suit::Heart, 10),
///     Card::new(Suit::Club, 10),
/// ]);
/// assert_eq!(lay.name(), "lay_down");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Take the top card of the deck.
    Draw,

    /// Take the discard pile from `from_index` up to the top.
    PickUpDiscards { from_index: usize },

    /// Move cards from hand to the table.
    /// SmallVec covers the usual three or four card meld without allocating.
    LayDown { cards: SmallVec<[Card; 4]> },

    /// End the turn by discarding one card.
    Discard { card: Card },

    /// Move `card` from `from_index` to `to_index` within the hand.
    ReorderHand {
        card: Card,
        from_index: usize,
        to_index: usize,
    },
}

impl Action {
    /// Build a lay-down action.
    #[must_use]
    pub fn lay_down(cards: &[Card]) -> Self {
        Action::LayDown {
            cards: SmallVec::from_slice(cards),
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::Draw => "draw",
            Action::PickUpDiscards { .. } => "pick_up_discards",
            Action::LayDown { .. } => "lay_down",
            Action::Discard { .. } => "discard",
            Action::ReorderHand { .. } => "reorder_hand",
        }
    }
}
