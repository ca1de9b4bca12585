//! Actions a wizard can take on its turn.
//!
//! The variant set is closed: spells (damage, buff, debuff), an elemental
//! shield, a heal and pass. Actions are pure with respect to player state:
//! [`Action::resolve`] rolls accuracy and computes a value, and the battle
//! state decides how that value is applied.

pub mod formula;
mod presentation;
mod spell;

pub use presentation::ActionCard;
pub use spell::{Spell, SpellType, UnknownSpellType};

use strum::{Display, IntoStaticStr};

use crate::config::BattleConfig;
use crate::element::Element;
use crate::rng::RngOracle;

/// Broad category of an action, as recorded in the action log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum ActionType {
    CastSpell,
    Defend,
    Heal,
    Pass,
}

/// Who an action's effect lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionTarget {
    #[strum(serialize = "SELF")]
    #[cfg_attr(feature = "serde", serde(rename = "SELF"))]
    Caster,
    #[strum(serialize = "ENEMY")]
    #[cfg_attr(feature = "serde", serde(rename = "ENEMY"))]
    Enemy,
}

/// Raises an elemental shield on the caster. Cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Defend {
    pub element: Element,
}

impl Defend {
    pub const ACCURACY: f64 = 1.0;

    pub const fn new(element: Element) -> Self {
        Self { element }
    }
}

/// Restores the caster's health; strength comes from the wizard's healing stat.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heal {
    pub strength: f64,
}

impl Heal {
    pub const fn new(strength: f64) -> Self {
        Self { strength }
    }

    pub fn base_value(&self) -> f64 {
        formula::heal_base(self.strength)
    }

    pub fn range(&self) -> (f64, f64) {
        let base = self.base_value();
        let variance = BattleConfig::HEAL_VARIANCE;
        (
            (base * (1.0 - variance)).round(),
            (base * (1.0 + variance)).round(),
        )
    }
}

/// A single entry in a wizard's action catalog.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Spell(Spell),
    Defend(Defend),
    Heal(Heal),
    Pass,
}

/// Result of rolling an action.
///
/// A failed roll carries no value; failed actions only spend mana and trigger
/// the usual effect decay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    Failed,
    Succeeded { value: f64, target: ActionTarget },
}

impl Resolution {
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

/// What happened when an action was applied to the battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub succeeded: bool,
    /// Applied amount: damage dealt, health restored, or buff/debuff magnitude.
    pub value: f64,
    pub announcement: String,
}

impl Action {
    pub const fn action_type(&self) -> ActionType {
        match self {
            Self::Spell(_) => ActionType::CastSpell,
            Self::Defend(_) => ActionType::Defend,
            Self::Heal(_) => ActionType::Heal,
            Self::Pass => ActionType::Pass,
        }
    }

    pub fn accuracy(&self) -> f64 {
        match self {
            Self::Spell(spell) => spell.accuracy(),
            Self::Defend(_) => Defend::ACCURACY,
            Self::Heal(_) => BattleConfig::HEAL_ACCURACY,
            Self::Pass => 1.0,
        }
    }

    pub fn variance(&self) -> f64 {
        match self {
            Self::Spell(spell) => spell.variance(),
            Self::Heal(_) => BattleConfig::HEAL_VARIANCE,
            Self::Defend(_) | Self::Pass => 0.0,
        }
    }

    pub fn strength(&self) -> f64 {
        match self {
            Self::Spell(spell) => spell.strength,
            Self::Heal(heal) => heal.strength,
            Self::Defend(_) => 1.0,
            Self::Pass => 0.0,
        }
    }

    pub fn mana_cost(&self) -> u32 {
        match self {
            Self::Spell(spell) => spell.mana_cost(),
            Self::Defend(_) => BattleConfig::DEFEND_MANA_COST,
            Self::Heal(_) => BattleConfig::HEAL_MANA_COST,
            Self::Pass => 0,
        }
    }

    /// Value band `(min, max)` before any battle modifiers; `None` for Defend and Pass.
    pub fn range(&self) -> Option<(f64, f64)> {
        match self {
            Self::Spell(spell) => Some(spell.range()),
            Self::Heal(heal) => Some(heal.range()),
            Self::Defend(_) | Self::Pass => None,
        }
    }

    pub fn target(&self) -> ActionTarget {
        match self {
            Self::Spell(spell) => spell.target(),
            Self::Defend(_) | Self::Heal(_) | Self::Pass => ActionTarget::Caster,
        }
    }

    pub fn spell_type(&self) -> Option<SpellType> {
        match self {
            Self::Spell(spell) => Some(spell.spell_type),
            _ => None,
        }
    }

    pub fn element(&self) -> Option<Element> {
        match self {
            Self::Spell(spell) => Some(spell.element),
            Self::Defend(defend) => Some(defend.element),
            Self::Heal(_) | Self::Pass => None,
        }
    }

    pub fn as_spell(&self) -> Option<&Spell> {
        match self {
            Self::Spell(spell) => Some(spell),
            _ => None,
        }
    }

    /// Returns the spell if this is a damage spell.
    pub fn as_damage_spell(&self) -> Option<&Spell> {
        self.as_spell()
            .filter(|spell| spell.spell_type == SpellType::Damage)
    }

    /// Short label used in logs and summaries.
    pub fn label(&self) -> String {
        match self {
            Self::Spell(spell) => spell.name.clone(),
            Self::Defend(defend) => format!("{} Defense", defend.element.display_name()),
            Self::Heal(_) => "Heal".to_owned(),
            Self::Pass => "Pass".to_owned(),
        }
    }

    /// Rolls accuracy, then (on success) the jittered value.
    ///
    /// Every action draws one accuracy sample. Successful spells and heals
    /// draw a second sample for variance.
    pub fn resolve(&self, rng: &mut dyn RngOracle) -> Resolution {
        if !rng.roll(self.accuracy()) {
            return Resolution::Failed;
        }

        let value = match self {
            Self::Spell(spell) => spell.roll_value(rng),
            Self::Heal(heal) => formula::round_count(
                rng.vary(heal.base_value(), BattleConfig::HEAL_VARIANCE),
            ) as f64,
            Self::Defend(_) | Self::Pass => 0.0,
        };

        Resolution::Succeeded {
            value,
            target: self.target(),
        }
    }
}

impl From<Spell> for Action {
    fn from(spell: Spell) -> Self {
        Self::Spell(spell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;

    fn fireball() -> Spell {
        Spell::new("Fireball", SpellType::Damage, "Hurls fire", Element::Fire, 0.0)
    }

    #[test]
    fn fixed_action_costs() {
        assert_eq!(Action::Defend(Defend::new(Element::Ice)).mana_cost(), 2);
        assert_eq!(Action::Heal(Heal::new(0.3)).mana_cost(), 5);
        assert_eq!(Action::Pass.mana_cost(), 0);
    }

    #[test]
    fn failed_roll_draws_only_accuracy() {
        let action = Action::from(fireball());
        let mut rng = SequenceRng::constant(0.99);
        assert_eq!(action.resolve(&mut rng), Resolution::Failed);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn successful_spell_draws_variance() {
        let action = Action::from(fireball());
        let mut rng = SequenceRng::new(vec![0.0, 0.5]);
        let resolution = action.resolve(&mut rng);
        assert_eq!(
            resolution,
            Resolution::Succeeded {
                value: 100.0,
                target: ActionTarget::Enemy
            }
        );
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn defend_and_pass_never_fail() {
        let mut rng = SequenceRng::constant(0.999_999);
        assert!(Action::Defend(Defend::new(Element::Storm)).resolve(&mut rng).succeeded());
        assert!(Action::Pass.resolve(&mut rng).succeeded());
    }

    #[test]
    fn heal_rolls_within_range() {
        let heal = Heal::new(1.0);
        assert_eq!(heal.range(), (225.0, 275.0));
        let mut rng = SequenceRng::new(vec![0.0, 0.999]);
        match Action::Heal(heal).resolve(&mut rng) {
            Resolution::Succeeded { value, target } => {
                assert_eq!(target, ActionTarget::Caster);
                assert!((225.0..=275.0).contains(&value));
            }
            Resolution::Failed => panic!("heal with roll 0.0 must succeed"),
        }
    }

    #[test]
    fn targets_and_types() {
        assert_eq!(ActionType::CastSpell.to_string(), "CAST_SPELL");
        assert_eq!(ActionTarget::Caster.to_string(), "SELF");
        assert_eq!(Action::from(fireball()).target(), ActionTarget::Enemy);
        assert_eq!(Action::Defend(Defend::new(Element::Life)).label(), "Life Defense");
    }
}
