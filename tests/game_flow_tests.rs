//! Game flow integration tests.
//!
//! A simple greedy player (draw, lay down whatever it can, discard the first
//! card) plays whole games through `Game::apply`. The tests check the
//! bookkeeping around round ends: scores fold in once, the discarder starts
//! the next round, and the game stops at the target.

use rummy_core::cards::Card;
use rummy_core::core::{Action, GameConfig, IllegalAction, PlayerId};
use rummy_core::game::{Game, GameResult, GameStatus, GameStep};
use rummy_core::round::{decode_game, encode_game, Round};
use rummy_core::rules::can_lay_down;

fn ann() -> PlayerId {
    PlayerId::new("ann")
}

fn bob() -> PlayerId {
    PlayerId::new("bob")
}

/// First single card or triple from the hand that can be laid down.
fn find_lay_down(round: &Round, player: &PlayerId) -> Option<Vec<Card>> {
    let hand: Vec<Card> = round.hand(player).ok()?.iter().copied().collect();
    for &card in &hand {
        if can_lay_down(round, &[card], player) {
            return Some(vec![card]);
        }
    }
    for i in 0..hand.len() {
        for j in i + 1..hand.len() {
            for k in j + 1..hand.len() {
                let cards = [hand[i], hand[j], hand[k]];
                if can_lay_down(round, &cards, player) {
                    return Some(cards.to_vec());
                }
            }
        }
    }
    None
}

/// Play one full turn for whoever holds it.
fn greedy_turn(game: &Game) -> GameStep {
    let player = game.current_round().unwrap().turn.player.clone();
    let mut step = game.apply(&Action::Draw, &player).unwrap();

    while let Some(cards) = find_lay_down(&step.round, &player) {
        step = step.game.apply(&Action::lay_down(&cards), &player).unwrap();
    }

    let card = step.round.hand(&player).unwrap()[0];
    step.game.apply(&Action::Discard { card }, &player).unwrap()
}

/// Play until the game ends or `max_turns` turns have passed.
fn play(mut game: Game, max_turns: usize) -> (Game, Vec<GameStep>) {
    let mut round_ends = Vec::new();
    for _ in 0..max_turns {
        if game.is_ended() {
            break;
        }
        let step = greedy_turn(&game);
        if step.round_ended {
            round_ends.push(step.clone());
        }
        game = step.game;
    }
    (game, round_ends)
}

// =============================================================================
// Round rollover
// =============================================================================

/// Test that a round ends when the deck runs out.
#[test]
fn test_deck_exhaustion_ends_round() {
    let game = Game::new(ann(), bob(), 42);
    // 37 cards in the deck, one drawn per turn.
    let (game, round_ends) = play(game, 37);

    assert_eq!(round_ends.len(), 1);
    let end = &round_ends[0];
    assert!(end.round.deck.is_empty());
    assert!(end.round.is_ended());
    assert_eq!(game.round_scores().len(), 1);
}

/// Test the bookkeeping at every round end of a long game.
#[test]
fn test_round_end_bookkeeping() {
    let config = GameConfig::default().with_target_score(60);
    let game = Game::with_config(ann(), bob(), 7, config).unwrap();
    let (game, round_ends) = play(game, 2_000);

    assert!(!round_ends.is_empty());
    for (index, end) in round_ends.iter().enumerate() {
        assert!(end.round.is_ended());
        assert_eq!(end.game.check_invariants(), Ok(()));

        let scores = end.game.round_scores();
        assert_eq!(scores.len(), index + 1, "each round is counted once");
        let (first, second) = end.game.cumulative_scores();
        let summed = scores.iter().fold((0, 0), |(a, b), (x, y)| (a + x, b + y));
        assert_eq!((first, second), summed);

        if end.game_ended {
            assert!(first >= 60 || second >= 60);
            assert_eq!(end.next_round, None);
            assert_eq!(end.game.status(), GameStatus::Ended);
        } else {
            assert!(first < 60 && second < 60);
            let next = end.next_round.as_ref().unwrap();
            // The player who just discarded goes first.
            let discarder = end.game.players().other(&end.round.turn.player);
            assert_eq!(Some(&next.turn.player), discarder);
            assert_eq!(next.hand_size(&ann()), 7);
            assert_eq!(next.hand_size(&bob()), 7);
            assert_eq!(end.game.current_round().unwrap(), next);
        }
    }

    if game.is_ended() {
        let (first, second) = game.cumulative_scores();
        let expected = match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(ann()),
            std::cmp::Ordering::Less => GameResult::Winner(bob()),
            std::cmp::Ordering::Equal => GameResult::Draw,
        };
        assert_eq!(game.result(), Some(expected));
        assert_eq!(
            game.apply(&Action::Draw, &ann()),
            Err(IllegalAction::GameOver.into())
        );
    }
}

/// Test that two games from the same seed play out identically.
#[test]
fn test_games_are_reproducible() {
    let (a, _) = play(Game::new(ann(), bob(), 1234), 120);
    let (b, _) = play(Game::new(ann(), bob(), 1234), 120);
    assert_eq!(a, b);

    let bytes = encode_game(&a).unwrap();
    assert_eq!(decode_game(&bytes).unwrap(), a);
}

// =============================================================================
// Wire actions
// =============================================================================

/// Test that actions decoded from JSON apply like native ones.
#[test]
fn test_json_actions() {
    let game = Game::new(ann(), bob(), 9);

    let draw: Action = serde_json::from_str(r#"{"type":"draw"}"#).unwrap();
    let step = game.apply(&draw, &ann()).unwrap();
    let card = step.round.hand(&ann()).unwrap()[0];

    let json = serde_json::to_string(&Action::Discard { card }).unwrap();
    let discard: Action = serde_json::from_str(&json).unwrap();
    let step = step.game.apply(&discard, &ann()).unwrap();

    assert_eq!(step.round.turn.player, bob());
    assert_eq!(step.round.top_discard(), Some(card));
}
