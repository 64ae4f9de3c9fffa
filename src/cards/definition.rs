//! Card definitions - static card data.
//!
//! `CardDefinition` holds everything printed on a card: type, cost, the
//! ordered effect list and flavour text. Definitions never change at
//! runtime; a game only moves card ids around.

use serde::{Deserialize, Serialize};

use crate::effects::Effect;

/// Catalog identifier of a card, e.g. `"ACT_S_001"`.
///
/// Decks and hands hold ids, never definitions, so several copies of one
/// card are just repeated ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    /// Drawn by the system at the start of a round.
    Event,
    /// Regulatory event, also drawn by the system.
    Policy,
    /// Environmental action.
    #[serde(rename = "E")]
    Environmental,
    /// Social action.
    #[serde(rename = "S")]
    Social,
    /// Governance action.
    #[serde(rename = "G")]
    Governance,
    Investment,
}

impl CardType {
    /// Whether cards of this type belong in the event deck.
    #[must_use]
    pub const fn is_event(self) -> bool {
        matches!(self, CardType::Event | CardType::Policy)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use esg_deck::cards::{CardDefinition, CardType};
/// use esg_deck::effects::{Effect, Target};
/// use esg_deck::metrics::Metric;
///
/// let audit = CardDefinition::new("ACT_G_001", "Supply Chain ESG Audit", CardType::Governance)
///     .with_cost(2)
///     .with_effect(Effect::metric(Target::Self_, Metric::Compliance, 2));
///
/// assert_eq!(audit.cost, 2);
/// assert_eq!(audit.effects.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    pub card_type: CardType,
    /// Budget needed to play the card.
    pub cost: u32,
    pub description: String,
    pub tags: Vec<String>,
    /// Resolved in declaration order.
    pub effects: Vec<Effect>,
    /// Where the card's premise comes from.
    pub source_note: String,
}

impl CardDefinition {
    /// Create a free card with no effects.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            card_type,
            cost: 0,
            description: String::new(),
            tags: Vec::new(),
            effects: Vec::new(),
            source_note: String::new(),
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_source(mut self, note: impl Into<String>) -> Self {
        self.source_note = note.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Target;
    use crate::metrics::Metric;

    #[test]
    fn test_card_id() {
        let id = CardId::new("EVT_001");
        assert_eq!(id.as_str(), "EVT_001");
        assert_eq!(id.to_string(), "EVT_001");
        assert_eq!(id, CardId::from("EVT_001"));
    }

    #[test]
    fn test_card_id_serializes_as_string() {
        let json = serde_json::to_string(&CardId::new("ACT_I_002")).unwrap();
        assert_eq!(json, "\"ACT_I_002\"");
    }

    #[test]
    fn test_card_definition_builder() {
        let card = CardDefinition::new("ACT_S_001", "Safety Drills", CardType::Social)
            .with_cost(1)
            .with_tag("safety")
            .with_description("Emergency training for crews.")
            .with_effect(Effect::metric(Target::Self_, Metric::Risk, -2))
            .with_effect(Effect::metric(Target::Self_, Metric::Reputation, 1))
            .with_source("Annual safety report");

        assert_eq!(card.id, CardId::new("ACT_S_001"));
        assert_eq!(card.cost, 1);
        assert_eq!(card.tags, vec!["safety".to_string()]);
        assert_eq!(card.effects.len(), 2);
        assert_eq!(card.source_note, "Annual safety report");
    }

    #[test]
    fn test_card_type_codes() {
        assert_eq!(serde_json::to_string(&CardType::Environmental).unwrap(), "\"E\"");
        assert_eq!(serde_json::to_string(&CardType::Investment).unwrap(), "\"Investment\"");
        assert!(CardType::Policy.is_event());
        assert!(!CardType::Governance.is_event());
    }
}
