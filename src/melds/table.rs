//! Shared table of melds.
//!
//! The table is an append-only list: meld `i` keeps index `i` for the whole
//! round. Each card on it remembers which player laid it, which is what
//! scoring credits.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::validator::{is_valid_set, set_kind, SetKind};
use crate::cards::Card;
use crate::core::PlayerId;

/// A card on the table and the player who laid it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeldEntry {
    pub owner: PlayerId,
    pub card: Card,
}

/// One meld, kept sorted by card value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meld {
    entries: Vec<MeldEntry>,
}

impl Meld {
    fn from_entries(mut entries: Vec<MeldEntry>) -> Self {
        // Stable, so equal values keep the order they were laid in.
        entries.sort_by_key(|e| e.card.value);
        Self { entries }
    }

    /// Entries in ascending value order.
    #[must_use]
    pub fn entries(&self) -> &[MeldEntry] {
        &self.entries
    }

    /// Cards in ascending value order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.entries.iter().map(|e| e.card)
    }

    /// Cards in this meld laid by `player`.
    pub fn cards_owned_by<'a>(&'a self, player: &'a PlayerId) -> impl Iterator<Item = Card> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.owner == *player)
            .map(|e| e.card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether entries are in ascending value order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].card.value <= w[1].card.value)
    }

    /// Book or run; `None` only for a corrupted meld.
    #[must_use]
    pub fn kind(&self) -> Option<SetKind> {
        set_kind(&self.cards().collect::<Vec<_>>())
    }

    /// Whether this meld plus `cards` is still a valid set.
    #[must_use]
    pub fn accepts(&self, cards: &[Card]) -> bool {
        let mut combined: Vec<Card> = self.cards().collect();
        combined.extend_from_slice(cards);
        is_valid_set(&combined)
    }
}

/// Where `Table::insert_cards` put the cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Appended to the existing meld at this index.
    Extended(usize),
    /// Started a new meld at this index.
    Created(usize),
}

impl Placement {
    /// Index of the meld that received the cards.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Placement::Extended(i) | Placement::Created(i) => i,
        }
    }
}

/// Ordered, append-only collection of melds.
///
/// Backed by `im::Vector`, so inserting returns a new table sharing structure
/// with the old one.
///
/// ```
/// use rummy_core::cards::{Card, Suit};
/// use rummy_core::core::PlayerId;
/// use rummy_core::melds::{Placement, Table};
///
/// let ann = PlayerId::new("ann");
/// let table = Table::new();
/// let (table, placed) = table.insert_cards(
///     &[Card::new(Suit::Club, 2), Card::new(Suit::Club, 3), Card::new(Suit::Club, 4)],
///     &ann,
/// );
/// assert_eq!(placed, Placement::Created(0));
///
/// let (table, placed) = table.insert_cards(&[Card::new(Suit::Club, 5)], &ann);
/// assert_eq!(placed, Placement::Extended(0));
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    melds: Vector<Meld>,
}

impl Table {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.melds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.melds.is_empty()
    }

    /// Get the meld at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Meld> {
        self.melds.get(index)
    }

    /// Iterate over melds in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Meld> {
        self.melds.iter()
    }

    /// Every card on the table.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.melds.iter().flat_map(Meld::cards)
    }

    /// Index of the first meld that can absorb all of `cards`.
    #[must_use]
    pub fn first_extendable(&self, cards: &[Card]) -> Option<usize> {
        self.melds.iter().position(|meld| meld.accepts(cards))
    }

    /// Place `cards`, laid by `owner`, on the table.
    ///
    /// The first meld (by index) that stays valid with all of `cards`
    /// appended absorbs them; extension is never split across melds. If no
    /// meld absorbs them, they start a new meld at the next index. Callers
    /// must have checked that the cards either extend a meld or form a set
    /// of their own.
    #[must_use]
    pub fn insert_cards(&self, cards: &[Card], owner: &PlayerId) -> (Table, Placement) {
        let incoming = cards.iter().map(|&card| MeldEntry {
            owner: owner.clone(),
            card,
        });

        let mut melds = self.melds.clone();
        let placement = match self.first_extendable(cards) {
            Some(index) => {
                let mut entries = melds[index].entries.clone();
                entries.extend(incoming);
                melds.set(index, Meld::from_entries(entries));
                Placement::Extended(index)
            }
            None => {
                melds.push_back(Meld::from_entries(incoming.collect()));
                Placement::Created(melds.len() - 1)
            }
        };

        (Table { melds }, placement)
    }

    /// Cards on the table laid by `player`.
    pub fn cards_owned_by<'a>(&'a self, player: &'a PlayerId) -> impl Iterator<Item = Card> + 'a {
        self.melds.iter().flat_map(move |m| m.cards_owned_by(player))
    }

    /// Index of the first meld that is not a valid set.
    #[must_use]
    pub fn first_invalid_meld(&self) -> Option<usize> {
        self.melds.iter().position(|m| m.kind().is_none())
    }

    /// Index of the first meld whose entries are out of value order.
    #[must_use]
    pub fn first_unsorted_meld(&self) -> Option<usize> {
        self.melds.iter().position(|m| !m.is_sorted())
    }
}
