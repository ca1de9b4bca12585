use super::{DefensiveLevel, EffectivenessLevel, HealthLevel, ManaLevel, OffensiveLevel};
use crate::action::{Action, SpellType};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, Seat};

/// Compact view of one action for the decision service.
///
/// Optional fields are present only for the action kinds they apply to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionSummary {
    /// `DAMAGE`, `BUFF`, `DEBUFF`, `DEFEND`, `HEAL` or `PASS`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    pub effect: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub accuracy: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub element_effectiveness: Option<EffectivenessLevel>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub is_redundant: Option<bool>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub can_kill: Option<bool>,
}

/// Tier labels plus numbered actions for the acting seat.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorInfo {
    pub health_level: HealthLevel,
    pub mana_level: ManaLevel,
    pub offensive_level: OffensiveLevel,
    pub defensive_level: DefensiveLevel,
    /// Affordable actions in catalog order; position `i` is choice `i + 1`.
    pub available_actions: Vec<ActionSummary>,
    pub unavailable_actions: Vec<ActionSummary>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyInfo {
    pub health_level: HealthLevel,
    pub mana_level: ManaLevel,
    pub offensive_level: OffensiveLevel,
    pub defensive_level: DefensiveLevel,
}

/// Structured battle summary from one seat's point of view.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleContext {
    #[cfg_attr(feature = "serde", serde(rename = "actor_info"))]
    pub actor: ActorInfo,
    #[cfg_attr(feature = "serde", serde(rename = "enemy_info"))]
    pub enemy: EnemyInfo,
}

/// A decision index that does not name an affordable action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Action index {index} is out of bounds for {available} actions")]
pub struct SelectionError {
    pub index: i64,
    pub available: usize,
}

impl GameError for SelectionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "ACTION_INDEX_OUT_OF_BOUNDS"
    }
}

impl GameState {
    pub fn compact_action_view(&self, seat: Seat, action: &Action) -> ActionSummary {
        let mut summary = ActionSummary {
            kind: String::new(),
            effect: action.compact_effect(),
            accuracy: None,
            element_effectiveness: None,
            is_redundant: None,
            can_kill: None,
        };

        match action {
            Action::Defend(_) => {
                summary.kind = "DEFEND".to_owned();
                summary.element_effectiveness =
                    Some(self.action_element_effectiveness(seat, action));
                summary.is_redundant = Some(self.is_redundant(seat, action));
            }
            Action::Heal(_) => {
                summary.kind = "HEAL".to_owned();
                summary.is_redundant = Some(self.is_redundant(seat, action));
            }
            Action::Spell(spell) => {
                summary.kind = spell.spell_type.to_string();
                summary.accuracy = Some(spell.accuracy());
                match spell.spell_type {
                    SpellType::Damage => {
                        if let Some((min, max)) = self.action_effect_range(seat, action) {
                            summary.effect = format!("Deals {min}-{max} damage");
                        }
                        summary.element_effectiveness =
                            Some(self.action_element_effectiveness(seat, action));
                        summary.can_kill = Some(self.can_kill(seat, action));
                    }
                    SpellType::Buff | SpellType::Debuff => {
                        summary.is_redundant = Some(self.is_redundant(seat, action));
                    }
                }
            }
            Action::Pass => {
                summary.kind = "PASS".to_owned();
            }
        }

        summary
    }

    /// Summary for `seat` and its opponent. The numbering of
    /// `actor.available_actions` matches [`GameState::affordable_actions`].
    pub fn compact_battle_context(&self, seat: Seat) -> BattleContext {
        let view = |actions: Vec<Action>| {
            actions
                .iter()
                .map(|action| self.compact_action_view(seat, action))
                .collect::<Vec<_>>()
        };

        let enemy = seat.opponent();
        BattleContext {
            actor: ActorInfo {
                health_level: self.health_level(seat),
                mana_level: self.mana_level(seat),
                offensive_level: self.offensive_level(seat),
                defensive_level: self.defensive_level(seat),
                available_actions: view(self.affordable_actions(seat)),
                unavailable_actions: view(self.unaffordable_actions(seat)),
            },
            enemy: EnemyInfo {
                health_level: self.health_level(enemy),
                mana_level: self.mana_level(enemy),
                offensive_level: self.offensive_level(enemy),
                defensive_level: self.defensive_level(enemy),
            },
        }
    }

    /// Maps a 1-based decision index onto the affordable actions.
    pub fn select_affordable(&self, seat: Seat, index: i64) -> Result<Action, SelectionError> {
        let mut affordable = self.affordable_actions(seat);
        let available = affordable.len();
        let position = usize::try_from(index - 1)
            .ok()
            .filter(|&position| position < available)
            .ok_or(SelectionError { index, available })?;
        Ok(affordable.swap_remove(position))
    }

    /// Long-form text view of the battle from `seat`'s point of view.
    pub fn battle_snapshot(&self, seat: Seat) -> String {
        let me = self.player(seat);
        let enemy = self.player(seat.opponent());

        let list = |actions: Vec<Action>, numbered: bool| {
            if actions.is_empty() {
                return "  (none)".to_owned();
            }
            actions
                .iter()
                .enumerate()
                .map(|(idx, action)| {
                    let number = if numbered {
                        (idx + 1).to_string()
                    } else {
                        String::new()
                    };
                    format!("{number}- {}", action.overview())
                })
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            "Your State:\n\
             - Health: {}/{}\n\
             - Mana: {}\n\
             - Active Effects:\n    {}\n\
             \n\
             Enemy State:\n\
             - Health: {}/{}\n\
             - Mana: {}\n\
             - Active Effects:\n    {}\n\
             \n\
             Enemy Available Actions:\n{}\n\
             \n\
             Choose ONE of the following actions to take:\n{}\n\
             \n\
             Make sure to follow your combat style: {}",
            me.current_health(),
            me.max_health(),
            me.current_mana(),
            me.effects(),
            enemy.current_health(),
            enemy.max_health(),
            enemy.current_mana(),
            enemy.effects(),
            list(self.affordable_actions(seat.opponent()), false),
            list(self.affordable_actions(seat), true),
            me.wizard().combat_style,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Spell, SpellType};
    use crate::element::Element;
    use crate::rng::SequenceRng;
    use crate::wizard::{Wizard, WizardStats};

    fn battle() -> GameState {
        let alpha = Wizard::new(
            "Alpha",
            Element::Fire,
            Element::Death,
            WizardStats::default(),
            vec![
                Spell::new("Inferno", SpellType::Damage, "", Element::Fire, 1.0),
                Spell::new("Flare", SpellType::Damage, "", Element::Fire, 0.0),
                Spell::new("Rally", SpellType::Buff, "", Element::Fire, 0.0),
            ],
            "relentless",
        );
        let beta = Wizard::new(
            "Beta",
            Element::Ice,
            Element::Storm,
            WizardStats::default(),
            Vec::new(),
            "patient",
        );
        GameState::initialize(alpha, beta, &mut SequenceRng::new(vec![0.9, 0.5, 0.5, 0.5, 0.5]))
    }

    #[test]
    fn numbering_skips_unaffordable_actions() {
        let mut state = battle();
        state.player_mut(Seat::First).set_mana(5);
        let context = state.compact_battle_context(Seat::First);

        // Inferno (10 mana) sits between Flare and Rally but is unaffordable.
        let kinds: Vec<&str> = context
            .actor
            .available_actions
            .iter()
            .map(|summary| summary.kind.as_str())
            .collect();
        assert_eq!(kinds, ["DAMAGE", "BUFF", "DEFEND", "DEFEND", "HEAL", "PASS"]);
        assert_eq!(context.actor.unavailable_actions.len(), 1);

        let third = state.select_affordable(Seat::First, 3).expect("in range");
        assert_eq!(third, state.affordable_actions(Seat::First)[2]);
        assert_eq!(third.label(), "Fire Defense");
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let state = battle();
        let available = state.affordable_actions(Seat::First).len();
        for index in [0, -1, available as i64 + 1] {
            let err = state.select_affordable(Seat::First, index).unwrap_err();
            assert_eq!(err, SelectionError { index, available });
        }
        assert_eq!(
            SelectionError { index: 9, available: 4 }.to_string(),
            "Action index 9 is out of bounds for 4 actions"
        );
    }

    #[test]
    fn damage_summary_uses_battle_adjusted_range() {
        let state = battle();
        let flare = state
            .wizard(Seat::First)
            .all_actions()
            .into_iter()
            .find(|action| action.label() == "Flare")
            .expect("flare in catalog");
        let summary = state.compact_action_view(Seat::First, &flare);
        assert_eq!(summary.kind, "DAMAGE");
        assert_eq!(summary.effect, "Deals 99-121 damage");
        assert_eq!(summary.accuracy, Some(0.75));
        assert_eq!(summary.can_kill, Some(false));
        assert_eq!(summary.is_redundant, None);
    }

    #[test]
    fn pass_summary_is_minimal() {
        let summary = battle().compact_action_view(Seat::First, &Action::Pass);
        assert_eq!(summary.kind, "PASS");
        assert_eq!(summary.effect, "Do nothing.");
        assert!(summary.accuracy.is_none() && summary.element_effectiveness.is_none());
    }

    #[test]
    fn enemy_info_reflects_opponent() {
        let mut state = battle();
        state.player_mut(Seat::Second).set_mana(20);
        let context = state.compact_battle_context(Seat::First);
        assert_eq!(context.enemy.mana_level, ManaLevel::High);
        assert_eq!(context.actor.mana_level, ManaLevel::Medium);
    }

    #[test]
    fn snapshot_lists_numbered_actions() {
        let state = battle();
        let snapshot = state.battle_snapshot(Seat::First);
        assert!(snapshot.starts_with("Your State:\n- Health: 500/500\n- Mana: 10\n"));
        assert!(snapshot.contains("1- Action Type: 'CAST_SPELL'"));
        assert!(snapshot.contains("- Action Type: 'PASS'"));
        assert!(snapshot.ends_with("Make sure to follow your combat style: relentless"));
    }
}
