//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat index. Seats are 0-based internally and displayed
//! 1-based (`P1`, `P2`, ...).
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, indexed by `PlayerId`
//! and iterated in seat order.
//!
//! ## PlayerState
//!
//! Everything a single seat owns: budget, gauges, hand and flags.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::CardId;
use crate::metrics::Metrics;

/// Seat identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use esg_deck::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", u16::from(self.0) + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use esg_deck::core::{PlayerId, PlayerMap};
///
/// let mut budgets: PlayerMap<u32> = PlayerMap::new(2, |_| 3);
/// budgets[PlayerId::new(1)] = 5;
/// assert_eq!(budgets[PlayerId::new(0)], 3);
/// assert_eq!(budgets[PlayerId::new(1)], 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's data, if the seat exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a player's data mutably, if the seat exists.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over entries in seat order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over entries in seat order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

impl<'a, T> IntoIterator for &'a PlayerMap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// State owned by one seat.
///
/// `budget` is the per-round spending resource and is topped back up every
/// round. `metrics` persist for the whole game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub name: String,
    pub is_human: bool,
    pub budget: u32,
    pub metrics: Metrics,
    /// Card ids in hand, in draw order. Duplicates allowed.
    pub hand: Vector<CardId>,
    /// Per-player discard. Played and refreshed cards go to the shared main
    /// discard, so this stays empty under the current rules.
    pub discard: Vector<CardId>,
    /// Reserved for flag effects.
    pub flags: OrdSet<String>,
}

impl PlayerState {
    /// Create a seat with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, is_human: bool, budget: u32, metrics: Metrics) -> Self {
        Self {
            id,
            name: format!("Player {}", id.index() + 1),
            is_human,
            budget,
            metrics,
            hand: Vector::new(),
            discard: Vector::new(),
            flags: OrdSet::new(),
        }
    }

    /// Check whether the hand holds at least one copy of `card`.
    #[must_use]
    pub fn holds(&self, card: &CardId) -> bool {
        self.hand.contains(card)
    }

    /// Remove exactly one copy of `card` from the hand.
    ///
    /// Returns true if a copy was found and removed.
    pub fn remove_from_hand(&mut self, card: &CardId) -> bool {
        match self.hand.index_of(card) {
            Some(pos) => {
                self.hand.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Add `delta` to the budget, floored at zero.
    ///
    /// Returns `(before, after)`.
    pub fn adjust_budget(&mut self, delta: i32) -> (u32, u32) {
        let before = self.budget;
        let after = i64::from(before) + i64::from(delta);
        self.budget = u32::try_from(after.max(0)).unwrap_or(u32::MAX);
        (before, self.budget)
    }
}
