//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition a game may reference.
//! The host builds it once and hands it to the engine, which only reads it.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardType};

/// Read-only registry of card definitions.
///
/// ## Example
///
/// ```
/// use esg_deck::cards::{CardCatalog, CardDefinition, CardId, CardType};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::new("ACT_S_002", "Community Programme", CardType::Social).with_cost(1));
///
/// let found = catalog.get(&CardId::new("ACT_S_002")).unwrap();
/// assert_eq!(found.cost, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {} already registered", card.id);
        }
        self.cards.insert(card.id.clone(), card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardDefinition> {
        self.cards.get(id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Cost of a card, if it is registered.
    #[must_use]
    pub fn cost(&self, id: &CardId) -> Option<u32> {
        self.get(id).map(|c| c.cost)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards by type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().filter(move |c| c.card_type == card_type)
    }
}

impl FromIterator<CardDefinition> for CardCatalog {
    fn from_iter<I: IntoIterator<Item = CardDefinition>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for card in iter {
            catalog.register(card);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();
        catalog.register(CardDefinition::new("A", "Card A", CardType::Social).with_cost(2));

        assert_eq!(catalog.get(&CardId::new("A")).map(|c| c.name.as_str()), Some("Card A"));
        assert_eq!(catalog.cost(&CardId::new("A")), Some(2));
        assert!(catalog.get(&CardId::new("Z")).is_none());
        assert_eq!(catalog.cost(&CardId::new("Z")), None);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = CardCatalog::new();
        catalog.register(CardDefinition::new("A", "Card A", CardType::Social));
        catalog.register(CardDefinition::new("A", "Card B", CardType::Social));
    }

    #[test]
    fn test_find_by_type() {
        let catalog: CardCatalog = [
            CardDefinition::new("E1", "Storm", CardType::Event),
            CardDefinition::new("S1", "Outreach", CardType::Social),
            CardDefinition::new("S2", "Training", CardType::Social),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.find_by_type(CardType::Social).count(), 2);
        assert_eq!(catalog.find_by_type(CardType::Investment).count(), 0);
        assert!(catalog.contains(&CardId::new("E1")));
    }
}
