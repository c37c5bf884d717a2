//! Binary snapshot encoding.
//!
//! Hosts persist rounds and games however they like; these helpers give them
//! a compact bincode form. Decoding re-checks every invariant so a corrupted
//! or hand-edited document is refused rather than played.

use thiserror::Error;
use tracing::warn;

use super::state::Round;
use crate::core::InvariantViolation;
use crate::game::Game;

/// Failure to encode or decode a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
    #[error("snapshot is corrupt: {0}")]
    Corrupt(#[from] InvariantViolation),
}

/// Encode a round.
pub fn encode_round(round: &Round) -> Result<Vec<u8>, SnapshotError> {
    Ok(bincode::serialize(round)?)
}

/// Decode and validate a round.
pub fn decode_round(bytes: &[u8]) -> Result<Round, SnapshotError> {
    let round: Round = bincode::deserialize(bytes)?;
    round.check_invariants().map_err(|violation| {
        warn!(%violation, "Rejected round snapshot");
        violation
    })?;
    Ok(round)
}

/// Encode a game with all of its rounds.
pub fn encode_game(game: &Game) -> Result<Vec<u8>, SnapshotError> {
    Ok(bincode::serialize(game)?)
}

/// Decode and validate a game.
pub fn decode_game(bytes: &[u8]) -> Result<Game, SnapshotError> {
    let game: Game = bincode::deserialize(bytes)?;
    game.check_invariants().map_err(|violation| {
        warn!(%violation, "Rejected game snapshot");
        violation
    })?;
    Ok(game)
}
