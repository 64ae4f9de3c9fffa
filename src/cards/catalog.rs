//! Stock airline sustainability card set.
//!
//! Four system-drawn events and eight action cards across the
//! environmental, social, governance and investment lines, plus the deck
//! lists that say how many copies of each go into a game.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId, CardType};
use super::registry::CardCatalog;
use crate::effects::{Effect, Target};
use crate::metrics::Metric;

/// Which ids make up each deck, before the per-game copy multiplier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckLists {
    pub event: Vec<CardId>,
    pub main: Vec<CardId>,
}

impl DeckLists {
    /// Deck lists of the stock card set.
    #[must_use]
    pub fn standard() -> Self {
        let event = ["EVT_001", "EVT_002", "EVT_003", "EVT_004"]
            .into_iter()
            .map(CardId::new)
            .collect();

        let main = [
            ("ACT_E_001", 3),
            ("ACT_E_002", 2),
            ("ACT_S_001", 3),
            ("ACT_S_002", 2),
            ("ACT_G_001", 3),
            ("ACT_G_002", 2),
            ("ACT_I_001", 2),
            ("ACT_I_002", 3),
        ]
        .into_iter()
        .flat_map(|(id, copies)| std::iter::repeat(CardId::new(id)).take(copies))
        .collect();

        Self { event, main }
    }

    /// Every id the lists mention, with repeats.
    pub fn ids(&self) -> impl Iterator<Item = &CardId> {
        self.event.iter().chain(self.main.iter())
    }
}

impl CardCatalog {
    /// Catalog of the stock card set.
    ///
    /// ```
    /// use esg_deck::cards::{CardCatalog, CardId};
    ///
    /// let catalog = CardCatalog::standard();
    /// assert_eq!(catalog.len(), 12);
    /// assert_eq!(catalog.cost(&CardId::new("ACT_E_002")), Some(3));
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        use Metric::*;
        use Target::{All, Self_};

        [
            // === Events ===
            CardDefinition::new("EVT_001", "Oil Price Surge", CardType::Event)
                .with_description("Global jet fuel prices climb; every carrier's operating cost rises.")
                .with_tag("market volatility")
                .with_effect(Effect::metric(All, Cost, 2))
                .with_source("[Industry data] IATA jet fuel price monitor 2024"),
            CardDefinition::new("EVT_002", "New Carbon Tax", CardType::Policy)
                .with_description("A new regional regulation raises the compliance bar under threat of fines.")
                .with_tag("regulation")
                .with_effect(Effect::metric(All, Cost, 1))
                .with_effect(Effect::metric(All, Compliance, -1))
                .with_source("[Policy] EU ETS directive, 2024 revision"),
            CardDefinition::new("EVT_003", "Extreme Weather", CardType::Event)
                .with_description("Storms delay flights and sharply raise operational risk.")
                .with_tag("climate")
                .with_effect(Effect::metric(All, Risk, 2))
                .with_source("[Science] IPCC AR6, aviation impacts"),
            CardDefinition::new("EVT_004", "Positive Media Coverage", CardType::Event)
                .with_description("The industry's green transition efforts are widely recognised.")
                .with_tag("public relations")
                .with_effect(Effect::metric(All, Reputation, 1))
                .with_source("[Media] Global aviation sustainability awards 2023"),
            // === Environmental ===
            CardDefinition::new("ACT_E_001", "Route Optimization", CardType::Environmental)
                .with_cost(2)
                .with_description("Roll out AI flight planning to cut fuel burn.")
                .with_tag("efficiency")
                .with_effect(Effect::metric(Self_, Carbon, -2))
                .with_effect(Effect::metric(Self_, Cost, 1))
                .with_source("[Company] Sustainability report 2024, p. 45"),
            CardDefinition::new("ACT_E_002", "SAF Procurement", CardType::Environmental)
                .with_cost(3)
                .with_description("Buy sustainable aviation fuel to cut emissions sharply.")
                .with_tag("fuel")
                .with_tag("SAF")
                .with_effect(Effect::metric(Self_, Carbon, -3))
                .with_effect(Effect::metric(Self_, Cost, 2))
                .with_effect(Effect::metric(Self_, Reputation, 1))
                .with_source("[Industry] SAF challenge roadmap"),
            // === Social ===
            CardDefinition::new("ACT_S_001", "Safety Training", CardType::Social)
                .with_cost(1)
                .with_description("Drill crews on emergency response procedures.")
                .with_tag("safety")
                .with_effect(Effect::metric(Self_, Risk, -2))
                .with_effect(Effect::metric(Self_, Reputation, 1))
                .with_source("[Company] Flight safety report 2023"),
            CardDefinition::new("ACT_S_002", "Community Program", CardType::Social)
                .with_cost(1)
                .with_description("Sponsor local education and conservation projects.")
                .with_tag("CSR")
                .with_effect(Effect::metric(Self_, Reputation, 2))
                .with_source("[Company] Corporate social responsibility report 2023"),
            // === Governance ===
            CardDefinition::new("ACT_G_001", "Supply Chain ESG Audit", CardType::Governance)
                .with_cost(2)
                .with_description("Hold every supplier to a strict ESG audit.")
                .with_tag("governance")
                .with_effect(Effect::metric(Self_, Compliance, 2))
                .with_effect(Effect::metric(Self_, Risk, -1))
                .with_source("[Company] Supplier code of conduct 2024"),
            CardDefinition::new("ACT_G_002", "Sustainability Report", CardType::Governance)
                .with_cost(1)
                .with_description("Publish a transparent TCFD climate disclosure.")
                .with_tag("reporting")
                .with_effect(Effect::metric(Self_, Compliance, 1))
                .with_effect(Effect::metric(Self_, Reputation, 1))
                .with_source("[Policy] TCFD recommendations"),
            // === Investment ===
            CardDefinition::new("ACT_I_001", "Digital Transformation", CardType::Investment)
                .with_cost(3)
                .with_description("Replace legacy systems to improve data tracking and control.")
                .with_tag("technology")
                .with_effect(Effect::metric(Self_, Compliance, 2))
                .with_effect(Effect::metric(Self_, Risk, -2))
                .with_source("[Industry] Digital aviation trends 2025"),
            CardDefinition::new("ACT_I_002", "Budget Reallocation", CardType::Investment)
                .with_description("Move contingency reserves into the operating budget.")
                .with_tag("finance")
                .with_effect(Effect::budget(Self_, 2))
                .with_effect(Effect::metric(Self_, Risk, 1))
                .with_source("[Internal] Financial planning strategy"),
        ]
        .into_iter()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_contents() {
        let catalog = CardCatalog::standard();

        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.iter().filter(|c| c.card_type.is_event()).count(), 4);
        assert!(catalog.iter().filter(|c| c.card_type.is_event()).all(|c| c.cost == 0));
        assert!(catalog.iter().all(|c| !c.source_note.is_empty()));
    }

    #[test]
    fn test_standard_deck_lists() {
        let lists = DeckLists::standard();
        let catalog = CardCatalog::standard();

        assert_eq!(lists.event.len(), 4);
        assert_eq!(lists.main.len(), 20);
        assert!(lists.ids().all(|id| catalog.contains(id)));
        assert_eq!(
            lists.main.iter().filter(|id| id.as_str() == "ACT_I_002").count(),
            3
        );
    }

    #[test]
    fn test_event_list_holds_only_events() {
        let lists = DeckLists::standard();
        let catalog = CardCatalog::standard();

        for id in &lists.event {
            let card = catalog.get(id).unwrap();
            assert!(card.card_type.is_event(), "{id} is not an event");
        }
        for id in &lists.main {
            let card = catalog.get(id).unwrap();
            assert!(!card.card_type.is_event(), "{id} is an event");
        }
    }

    #[test]
    fn test_budget_reallocation_is_free() {
        let catalog = CardCatalog::standard();
        let card = catalog.get(&CardId::new("ACT_I_002")).unwrap();

        assert_eq!(card.cost, 0);
        assert_eq!(card.effects[0], Effect::budget(Target::Self_, 2));
    }
}
