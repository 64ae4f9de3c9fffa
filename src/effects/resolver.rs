//! Effect resolution - executing effects on game state.
//!
//! The `EffectResolver` works on a state the caller already owns. Rules
//! code clones the incoming state once per transition and then resolves
//! every effect of a card against that copy in declaration order.

use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::{Actor, Field, FieldChange, GameState, LogAction, LogDetail, LogEntry, PlayerId};

use super::{Effect, EffectKind, Target};

/// Seats hit by one effect. Never more than four.
pub type Targets = SmallVec<[PlayerId; 4]>;

/// Result of resolving an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Effect applied; `changed` seats saw a value move.
    Applied { changed: usize },
    /// Effect kind has no behavior yet.
    Reserved,
    /// Target scope matched no seat.
    NoTarget,
}

/// Resolves effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Seats an effect lands on when `actor` resolves it.
    ///
    /// `Self_` needs a player actor; a system-resolved `Self_` effect has
    /// nobody to land on. `Player` targets resolve to the acting seat.
    #[must_use]
    pub fn targets(state: &GameState, target: Target, actor: Actor) -> Targets {
        match (target, actor) {
            (Target::Self_, Actor::Player(p)) => {
                state.players.get(p).map(|_| p).into_iter().collect()
            }
            (Target::Self_, Actor::System) => Targets::new(),
            (Target::All, _) => state.players.player_ids().collect(),
            (Target::Player(_), _) => std::iter::once(state.current_player).collect(),
        }
    }

    /// Resolve one effect in place.
    ///
    /// Appends one `EffectApplied` entry per seat whose value actually
    /// moved; seats already pinned at a bound produce no entry.
    pub fn resolve(
        state: &mut GameState,
        effect: &Effect,
        source: &CardId,
        actor: Actor,
    ) -> ResolveResult {
        if effect.kind.is_reserved() {
            return ResolveResult::Reserved;
        }

        let targets = Self::targets(state, effect.target, actor);
        if targets.is_empty() {
            return ResolveResult::NoTarget;
        }

        let mut changed = 0;
        for seat in targets {
            let player = &mut state.players[seat];
            let change = match &effect.kind {
                EffectKind::ModifyMetric { metric, delta } => {
                    let (before, after) = player.metrics.modify(*metric, *delta);
                    FieldChange::new(Field::Metric(*metric), before, after)
                }
                EffectKind::ModifyBudget { delta } => {
                    let (before, after) = player.adjust_budget(*delta);
                    FieldChange::new(Field::Budget, before, after)
                }
                EffectKind::Draw { .. }
                | EffectKind::DiscardRandom { .. }
                | EffectKind::AddFlag { .. }
                | EffectKind::RemoveFlag { .. } => continue,
            };

            if change.is_change() {
                changed += 1;
                let entry = LogEntry::new(
                    state.round,
                    state.phase,
                    Actor::Player(seat),
                    LogAction::EffectApplied,
                )
                .with_card(source.clone())
                .with_detail(LogDetail::Changes(vec![change]));
                state.log.push(entry);
            }
        }

        ResolveResult::Applied { changed }
    }

    /// Resolve a card's effect list in order.
    pub fn resolve_all<'a>(
        state: &mut GameState,
        effects: impl IntoIterator<Item = &'a Effect>,
        source: &CardId,
        actor: Actor,
    ) -> Vec<ResolveResult> {
        effects
            .into_iter()
            .map(|effect| Self::resolve(state, effect, source, actor))
            .collect()
    }
}

/// Apply one effect to a copy of `state`.
///
/// ```
/// use esg_deck::cards::{CardCatalog, CardId};
/// use esg_deck::core::{Actor, GameSetup, PlayerId};
/// use esg_deck::effects::{apply_effect, Effect, Target};
/// use esg_deck::metrics::Metric;
/// use esg_deck::rules::Engine;
///
/// let engine = Engine::new(CardCatalog::standard());
/// let state = engine.initialize_game(GameSetup::new(2, 3).seed(1));
///
/// let shock = Effect::metric(Target::All, Metric::Risk, 2);
/// let next = apply_effect(&state, &shock, &CardId::new("EVT_003"), Actor::System);
///
/// assert_eq!(next.players[PlayerId::new(1)].metrics.risk, 7);
/// assert_eq!(state.players[PlayerId::new(1)].metrics.risk, 5);
/// ```
#[must_use]
pub fn apply_effect(state: &GameState, effect: &Effect, source: &CardId, actor: Actor) -> GameState {
    let mut next = state.clone();
    EffectResolver::resolve(&mut next, effect, source, actor);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameLog, GameMode, GameRng, Phase, PlayerMap, PlayerState};
    use crate::metrics::{Metric, Metrics};
    use crate::zones::Decks;

    fn state(player_count: usize) -> GameState {
        GameState {
            game_id: "G_TEST".to_string(),
            ruleset_version: "1.0".to_string(),
            round: 1,
            max_rounds: 3,
            phase: Phase::Action,
            current_player: PlayerId::new(0),
            players: PlayerMap::new(player_count, |p| {
                PlayerState::new(p, true, 3, Metrics::default())
            }),
            decks: Decks::default(),
            mode: GameMode::Manual,
            log: GameLog::new(),
            winner: None,
            end_reason: None,
            rng: GameRng::new(0),
        }
    }

    fn source() -> CardId {
        CardId::new("TEST")
    }

    #[test]
    fn test_self_targets_actor_only() {
        let mut s = state(3);
        let p2 = PlayerId::new(1);
        let effect = Effect::metric(Target::Self_, Metric::Carbon, -2);

        let result = EffectResolver::resolve(&mut s, &effect, &source(), Actor::Player(p2));

        assert_eq!(result, ResolveResult::Applied { changed: 1 });
        assert_eq!(s.players[p2].metrics.carbon, 6);
        assert_eq!(s.players[PlayerId::new(0)].metrics.carbon, 8);
        assert_eq!(s.log.len(), 1);
        assert_eq!(s.log.last().map(|e| e.actor), Some(Actor::Player(p2)));
    }

    #[test]
    fn test_all_targets_every_seat_with_one_entry_each() {
        let mut s = state(4);
        let effect = Effect::metric(Target::All, Metric::Cost, 2);

        EffectResolver::resolve(&mut s, &effect, &source(), Actor::System);

        assert!(s.players.iter().all(|p| p.metrics.cost == 4));
        assert_eq!(s.log.with_action(LogAction::EffectApplied).count(), 4);
    }

    #[test]
    fn test_metric_clamps_at_bounds() {
        let mut s = state(2);
        let effect = Effect::metric(Target::All, Metric::Carbon, 50);

        EffectResolver::resolve(&mut s, &effect, &source(), Actor::System);
        assert!(s.players.iter().all(|p| p.metrics.carbon == 10));

        let effect = Effect::metric(Target::All, Metric::Carbon, -50);
        EffectResolver::resolve(&mut s, &effect, &source(), Actor::System);
        assert!(s.players.iter().all(|p| p.metrics.carbon == 0));
    }

    #[test]
    fn test_no_entry_when_value_pinned() {
        let mut s = state(2);
        for p in s.players.iter_mut() {
            p.metrics.set(Metric::Reputation, 10);
        }
        let effect = Effect::metric(Target::All, Metric::Reputation, 1);

        let result = EffectResolver::resolve(&mut s, &effect, &source(), Actor::System);

        assert_eq!(result, ResolveResult::Applied { changed: 0 });
        assert!(s.log.is_empty());
    }

    #[test]
    fn test_budget_floor() {
        let mut s = state(2);
        let p1 = PlayerId::new(0);
        let effect = Effect::budget(Target::Self_, -10);

        EffectResolver::resolve(&mut s, &effect, &source(), Actor::Player(p1));

        assert_eq!(s.players[p1].budget, 0);
        match &s.log.last().map(|e| e.detail.clone()) {
            Some(LogDetail::Changes(changes)) => {
                assert_eq!(changes[0].field, Field::Budget);
                assert_eq!((changes[0].before, changes[0].after), (3, 0));
            }
            other => panic!("unexpected detail {other:?}"),
        }
    }

    #[test]
    fn test_named_player_falls_back_to_current() {
        let mut s = state(3);
        s.current_player = PlayerId::new(2);
        let effect = Effect::metric(Target::Player(PlayerId::new(0)), Metric::Risk, 1);

        EffectResolver::resolve(&mut s, &effect, &source(), Actor::System);

        assert_eq!(s.players[PlayerId::new(2)].metrics.risk, 6);
        assert_eq!(s.players[PlayerId::new(0)].metrics.risk, 5);
    }

    #[test]
    fn test_system_self_has_no_target() {
        let mut s = state(2);
        let effect = Effect::metric(Target::Self_, Metric::Risk, 1);

        let result = EffectResolver::resolve(&mut s, &effect, &source(), Actor::System);

        assert_eq!(result, ResolveResult::NoTarget);
        assert!(s.log.is_empty());
    }

    #[test]
    fn test_reserved_kinds_are_inert() {
        let mut s = state(2);
        let before = s.clone();
        let effects = [
            Effect::new(EffectKind::Draw { count: 2 }, Target::All),
            Effect::new(EffectKind::DiscardRandom { count: 1 }, Target::All),
            Effect::new(EffectKind::AddFlag { flag: "x".into() }, Target::All),
            Effect::new(EffectKind::RemoveFlag { flag: "x".into() }, Target::All),
        ];

        let results = EffectResolver::resolve_all(&mut s, &effects, &source(), Actor::System);

        assert!(results.iter().all(|r| *r == ResolveResult::Reserved));
        assert_eq!(s, before);
    }
}
