//! Round creation.

use im::OrdMap;
use tracing::debug;

use super::state::{PlayerCards, Round, Turn};
use crate::cards::shuffled_deck;
use crate::core::{ConfigError, GameConfig, GameRng, PlayerId, DEFAULT_HAND_SIZE};
use crate::melds::Table;

/// Deal a new round with the default seven-card hands.
///
/// `first` receives the first seven cards of the shuffled deck and takes the
/// first turn, `second` the next seven; the fifteenth card seeds the discard
/// pile and the rest become the deck.
///
/// Panics if `first == second`.
///
/// ```
/// use rummy_core::core::{GameRng, PlayerId};
/// use rummy_core::round::{initialize_round, Phase};
///
/// let ann = PlayerId::new("ann");
/// let bob = PlayerId::new("bob");
/// let round = initialize_round(&ann, &bob, &mut GameRng::new(1));
///
/// assert_eq!(round.hand_size(&ann), 7);
/// assert_eq!(round.discard.len(), 1);
/// assert_eq!(round.deck.len(), 37);
/// assert_eq!(round.turn.player, ann);
/// assert_eq!(round.turn.phase, Phase::Start);
/// ```
#[must_use]
pub fn initialize_round(first: &PlayerId, second: &PlayerId, rng: &mut GameRng) -> Round {
    deal(DEFAULT_HAND_SIZE, first, second, rng)
}

/// Deal a new round using `config.hand_size`.
pub fn initialize_round_with(
    config: &GameConfig,
    first: &PlayerId,
    second: &PlayerId,
    rng: &mut GameRng,
) -> Result<Round, ConfigError> {
    config.validate()?;
    Ok(deal(config.hand_size, first, second, rng))
}

/// `2 * hand_size + 1` must not exceed the deck size.
fn deal(hand_size: usize, first: &PlayerId, second: &PlayerId, rng: &mut GameRng) -> Round {
    assert!(first != second, "Players must be distinct");

    let shuffled = shuffled_deck(rng);
    let (first_hand, rest) = shuffled.split_at(hand_size);
    let (second_hand, rest) = rest.split_at(hand_size);
    let (seed, deck) = rest.split_at(1);

    let mut player_cards = OrdMap::new();
    player_cards.insert(
        first.clone(),
        PlayerCards {
            hand: first_hand.iter().copied().collect(),
        },
    );
    player_cards.insert(
        second.clone(),
        PlayerCards {
            hand: second_hand.iter().copied().collect(),
        },
    );

    debug!(first = %first, second = %second, hand_size, "Dealt new round");

    Round {
        deck: deck.iter().copied().collect(),
        discard: seed.iter().copied().collect(),
        turn: Turn::start(first.clone()),
        table: Table::new(),
        player_cards,
    }
}
