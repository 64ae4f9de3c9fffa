//! Draw piles and their discards.
//!
//! A `Pile` is a draw pile paired with its discard. Cards are drawn from
//! the end of the draw pile. An empty draw pile is refilled by shuffling the
//! discard into it; only when both are empty does a draw come back empty.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::GameRng;

/// A draw pile plus its discard pile.
///
/// ```
/// use esg_deck::cards::CardId;
/// use esg_deck::core::GameRng;
/// use esg_deck::zones::Pile;
///
/// let mut rng = GameRng::new(1);
/// let mut pile = Pile::new([CardId::new("A")]);
///
/// let drawn = pile.draw(&mut rng).unwrap();
/// pile.discard(drawn);
///
/// // Empty draw pile: the discard is shuffled back in.
/// assert_eq!(pile.draw(&mut rng), Some(CardId::new("A")));
/// assert_eq!(pile.draw(&mut rng), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    /// Face-down cards. The back is the top.
    pub draw: Vector<CardId>,
    pub discard: Vector<CardId>,
}

impl Pile {
    /// Create a pile with `cards` as the draw pile, in the given order.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            draw: cards.into_iter().collect(),
            discard: Vector::new(),
        }
    }

    /// Create a pile and shuffle its draw pile.
    #[must_use]
    pub fn shuffled(cards: impl IntoIterator<Item = CardId>, rng: &mut GameRng) -> Self {
        let mut cards: Vec<CardId> = cards.into_iter().collect();
        rng.shuffle(&mut cards);
        Self::new(cards)
    }

    /// Take the top card, reshuffling the discard in if the draw pile is
    /// empty. `None` only when the pile holds no cards at all.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<CardId> {
        if self.draw.is_empty() {
            self.reshuffle(rng);
        }
        self.draw.pop_back()
    }

    /// Move the discard into the draw pile in random order.
    pub fn reshuffle(&mut self, rng: &mut GameRng) {
        if self.discard.is_empty() {
            return;
        }
        log::debug!("reshuffling {} discarded cards", self.discard.len());

        let mut cards: Vec<CardId> = std::mem::take(&mut self.discard).into_iter().collect();
        rng.shuffle(&mut cards);
        self.draw.extend(cards);
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: CardId) {
        self.discard.push_back(card);
    }

    /// Cards in draw pile and discard together.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw.is_empty() && self.discard.is_empty()
    }

    /// Copies of `card` in draw pile and discard.
    #[must_use]
    pub fn count(&self, card: &CardId) -> usize {
        self.draw.iter().chain(self.discard.iter()).filter(|c| *c == card).count()
    }
}

/// The two shared decks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decks {
    /// Drawn by the system once per round.
    pub event: Pile,
    /// Action cards dealt to seats.
    pub main: Pile,
}

impl Decks {
    /// Copies of `card` across both decks and both discards.
    #[must_use]
    pub fn count(&self, card: &CardId) -> usize {
        self.event.count(card) + self.main.count(card)
    }
}
