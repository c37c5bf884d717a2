//! The `Game` aggregate.
//!
//! ## Game
//!
//! Two seated players, the chronological list of rounds, the RNG position and
//! the rules configuration. Only the last round is live; earlier rounds are
//! kept for scoring and never change again.
//!
//! ## Round rollover
//!
//! The discard that ends a round folds that round's score into the
//! cumulative totals. If either total has reached the target the game ends;
//! otherwise a new round is dealt from the game's RNG with the discarding
//! player going first.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::result::{GameResult, GameStep};
use crate::cards::Card;
use crate::core::{
    Action, ActionError, ConfigError, GameConfig, GameRng, GameRngState, IllegalAction,
    InvariantViolation, PlayerId, PlayerPair,
};
use crate::round::{
    cumulative_scores, initialize_round, initialize_round_with, round_scores, Round,
};
use crate::rules;

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Ongoing,
    Ended,
}

/// A two-player game played over rounds to a target score.
///
/// ```
/// use rummy_core::core::{Action, PlayerId};
/// use rummy_core::game::{Game, GameStatus};
///
/// let ann = PlayerId::new("ann");
/// let bob = PlayerId::new("bob");
/// let game = Game::new(ann.clone(), bob.clone(), 7);
///
/// let step = game.apply(&Action::Draw, &ann).unwrap();
/// assert!(!step.round_ended);
/// assert_eq!(step.game.status(), GameStatus::Ongoing);
/// assert_eq!(step.game.current_round().unwrap().hand_size(&ann), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    players: PlayerPair,
    rounds: Vector<Round>,
    status: GameStatus,
    rng: GameRngState,
    config: GameConfig,
}

impl Game {
    /// Start a game with the default rules and deal its first round.
    ///
    /// `first` takes the first turn. Panics if both players are the same.
    #[must_use]
    pub fn new(first: PlayerId, second: PlayerId, seed: u64) -> Self {
        let players = PlayerPair::new(first, second);
        let mut rng = GameRng::new(seed);
        let round = initialize_round(players.first(), players.second(), &mut rng);
        Self::started(players, round, rng, GameConfig::default())
    }

    /// Start a game with custom rules.
    pub fn with_config(
        first: PlayerId,
        second: PlayerId,
        seed: u64,
        config: GameConfig,
    ) -> Result<Self, ConfigError> {
        let players = PlayerPair::new(first, second);
        let mut rng = GameRng::new(seed);
        let round = initialize_round_with(&config, players.first(), players.second(), &mut rng)?;
        Ok(Self::started(players, round, rng, config))
    }

    fn started(players: PlayerPair, round: Round, rng: GameRng, config: GameConfig) -> Self {
        info!(
            first = %players.first(),
            second = %players.second(),
            seed = rng.seed(),
            target = config.target_score,
            "Game started"
        );
        Self {
            players,
            rounds: Vector::unit(round),
            status: GameStatus::Ongoing,
            rng: rng.state(),
            config,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn players(&self) -> &PlayerPair {
        &self.players
    }

    /// Every round so far, oldest first.
    #[must_use]
    pub fn rounds(&self) -> &Vector<Round> {
        &self.rounds
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.status == GameStatus::Ended
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Position of the shuffler that will deal the next round.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng
    }

    /// The last round: live while the game is ongoing, final once it ended.
    pub fn current_round(&self) -> Result<&Round, InvariantViolation> {
        self.rounds.back().ok_or(InvariantViolation::MissingRound)
    }

    // === Scoring ===

    /// `(first, second)` score of every ended round, in seat order.
    #[must_use]
    pub fn round_scores(&self) -> Vec<(i32, i32)> {
        round_scores(&self.rounds, self.players.first(), self.players.second())
    }

    /// `(first, second)` totals over every ended round.
    ///
    /// The round in progress does not count until it ends.
    #[must_use]
    pub fn cumulative_scores(&self) -> (i32, i32) {
        cumulative_scores(&self.rounds, self.players.first(), self.players.second())
    }

    /// The winner, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_ended() {
            return None;
        }
        let (first, second) = self.cumulative_scores();
        Some(match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(self.players.first().clone()),
            std::cmp::Ordering::Less => GameResult::Winner(self.players.second().clone()),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }

    // === Actions ===

    /// Apply one player action to the current round.
    ///
    /// Discards go through `Game::discard` so the round-end check and
    /// rollover happen in the same step.
    pub fn apply(&self, action: &Action, actor: &PlayerId) -> Result<GameStep, ActionError> {
        debug!(action = action.name(), player = %actor, "Applying action");
        let round = self.live_round()?;
        let next = match action {
            Action::Draw => rules::draw(round, actor)?,
            Action::PickUpDiscards { from_index } => {
                rules::pick_up_discards(round, *from_index, actor)?
            }
            Action::LayDown { cards } => rules::lay_down(round, cards, actor)?,
            Action::Discard { card } => return self.discard(*card, actor),
            Action::ReorderHand {
                card,
                from_index,
                to_index,
            } => rules::reorder_hand(round, *card, *from_index, *to_index, actor)?,
        };
        Ok(GameStep::continuing(self.with_current(next.clone()), next))
    }

    /// Discard `card`, then settle the round if that ended it.
    pub fn discard(&self, card: Card, actor: &PlayerId) -> Result<GameStep, ActionError> {
        let round = self.live_round()?;
        let opponent = round.opponent_of(actor)?.clone();
        let next = rules::discard(round, card, actor, &opponent)?;

        let mut game = self.with_current(next.clone());
        if !next.is_ended() {
            return Ok(GameStep::continuing(game, next));
        }

        // The ended round now counts; every earlier round already did.
        let (first, second) = game.cumulative_scores();
        info!(
            round = game.rounds.len(),
            first_total = first,
            second_total = second,
            "Round ended"
        );

        let target = game.config.target_score;
        if first >= target || second >= target {
            game.status = GameStatus::Ended;
            info!(result = ?game.result(), "Game ended");
            return Ok(GameStep {
                game,
                round: next,
                round_ended: true,
                game_ended: true,
                next_round: None,
            });
        }

        let seats = game
            .players
            .led_by(actor)
            .ok_or_else(|| InvariantViolation::UnknownPlayer(actor.clone()))?;
        let mut rng = GameRng::from_state(&game.rng);
        let dealt = initialize_round_with(&game.config, seats.first(), seats.second(), &mut rng)
            .map_err(InvariantViolation::InvalidConfig)?;
        game.rng = rng.state();
        game.rounds.push_back(dealt.clone());
        info!(round = game.rounds.len(), first = %actor, "Dealt next round");

        Ok(GameStep {
            game,
            round: next,
            round_ended: true,
            game_ended: false,
            next_round: Some(dealt),
        })
    }

    fn live_round(&self) -> Result<&Round, ActionError> {
        if self.is_ended() {
            return Err(IllegalAction::GameOver.into());
        }
        Ok(self.current_round()?)
    }

    fn with_current(&self, round: Round) -> Self {
        let mut game = self.clone();
        game.rounds.pop_back();
        game.rounds.push_back(round);
        game
    }

    // === Validation ===

    /// Verify every round and the game-level bookkeeping.
    ///
    /// - the config can deal a round
    /// - two distinct players
    /// - at least one round, each consistent and seating exactly our players
    /// - every superseded round had ended
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        self.config.validate().map_err(InvariantViolation::InvalidConfig)?;
        if self.players.first() == self.players.second() {
            return Err(InvariantViolation::PlayerCount(1));
        }
        if self.rounds.is_empty() {
            return Err(InvariantViolation::MissingRound);
        }

        let last = self.rounds.len() - 1;
        for (index, round) in self.rounds.iter().enumerate() {
            round.check_invariants()?;
            if let Some(missing) = self.players.iter().find(|p| !round.player_cards.contains_key(*p)) {
                return Err(InvariantViolation::UnknownPlayer(missing.clone()));
            }
            if index < last && !round.is_ended() {
                return Err(InvariantViolation::UnfinishedRound(index));
            }
        }
        Ok(())
    }
}
