//! Round and game scoring.
//!
//! A player scores the points of every card they own on the table and loses
//! the points of every card still in their hand. Card points: Ace 15, ten
//! through King 10, all others 5.

use super::state::Round;
use crate::core::PlayerId;

/// A player's score for one round: table points minus hand points.
///
/// An unknown player scores 0.
#[must_use]
pub fn player_round_score(round: &Round, player: &PlayerId) -> i32 {
    let laid: i32 = round.table.cards_owned_by(player).map(|c| c.points()).sum();
    let held: i32 = round
        .player_cards
        .get(player)
        .map_or(0, |cards| cards.hand.iter().map(|c| c.points()).sum());
    laid - held
}

/// Both players' scores for one round, in argument order.
#[must_use]
pub fn round_score(round: &Round, a: &PlayerId, b: &PlayerId) -> (i32, i32) {
    (player_round_score(round, a), player_round_score(round, b))
}

/// Per-round scores of every ended round, in order.
///
/// Rounds still in progress are skipped.
pub fn round_scores<'a>(
    rounds: impl IntoIterator<Item = &'a Round>,
    a: &PlayerId,
    b: &PlayerId,
) -> Vec<(i32, i32)> {
    rounds
        .into_iter()
        .filter(|round| round.is_ended())
        .map(|round| round_score(round, a, b))
        .collect()
}

/// Running totals over every ended round.
pub fn cumulative_scores<'a>(
    rounds: impl IntoIterator<Item = &'a Round>,
    a: &PlayerId,
    b: &PlayerId,
) -> (i32, i32) {
    round_scores(rounds, a, b)
        .into_iter()
        .fold((0, 0), |(ta, tb), (ra, rb)| (ta + ra, tb + rb))
}
