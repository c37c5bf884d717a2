//! Player identification and seating.
//!
//! ## PlayerId
//!
//! Opaque identity handed in by the host (a user id from its identity
//! provider). The core only compares ids, it never looks them up.
//!
//! ## PlayerPair
//!
//! The two seats of a game, in first/second order.

use serde::{Deserialize, Serialize};

/// Host-provided player identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Exactly two players, in seat order.
///
/// ```
/// use rummy_core::core::{PlayerId, PlayerPair};
///
/// let pair = PlayerPair::new(PlayerId::new("ann"), PlayerId::new("bob"));
/// assert_eq!(pair.other(&PlayerId::new("ann")), Some(&PlayerId::new("bob")));
/// assert_eq!(pair.other(&PlayerId::new("eve")), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair {
    first: PlayerId,
    second: PlayerId,
}

impl PlayerPair {
    /// Seat two players.
    ///
    /// Panics if both ids are the same; a game needs two distinct players.
    pub fn new(first: PlayerId, second: PlayerId) -> Self {
        assert!(first != second, "Players must be distinct");
        Self { first, second }
    }

    /// The first seat.
    #[must_use]
    pub fn first(&self) -> &PlayerId {
        &self.first
    }

    /// The second seat.
    #[must_use]
    pub fn second(&self) -> &PlayerId {
        &self.second
    }

    /// Check whether a player is seated.
    #[must_use]
    pub fn contains(&self, player: &PlayerId) -> bool {
        *player == self.first || *player == self.second
    }

    /// The opponent of `player`, or `None` if `player` is not seated.
    #[must_use]
    pub fn other(&self, player: &PlayerId) -> Option<&PlayerId> {
        if *player == self.first {
            Some(&self.second)
        } else if *player == self.second {
            Some(&self.first)
        } else {
            None
        }
    }

    /// Seat `leader` first, keeping both players.
    ///
    /// Returns `None` if `leader` is not seated.
    #[must_use]
    pub fn led_by(&self, leader: &PlayerId) -> Option<Self> {
        let other = self.other(leader)?.clone();
        Some(Self {
            first: leader.clone(),
            second: other,
        })
    }

    /// Iterate over both players in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &PlayerId> {
        [&self.first, &self.second].into_iter()
    }
}
