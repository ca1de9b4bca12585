use strum::{Display, EnumString, IntoStaticStr};

use super::{ActionTarget, formula};
use crate::element::Element;
use crate::error::{ErrorSeverity, GameError};
use crate::rng::RngOracle;

/// Spell flavour; decides formula, target and variance.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum SpellType {
    Damage,
    Buff,
    Debuff,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown spell type `{0}`")]
pub struct UnknownSpellType(pub String);

impl GameError for UnknownSpellType {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        "UNKNOWN_SPELL_TYPE"
    }
}

impl SpellType {
    pub fn from_name(name: &str) -> Result<Self, UnknownSpellType> {
        name.trim()
            .parse()
            .map_err(|_| UnknownSpellType(name.to_owned()))
    }

    /// Half-width of the jitter band applied to rolled values.
    pub const fn variance(self) -> f64 {
        match self {
            Self::Damage => 0.1,
            Self::Buff | Self::Debuff => 0.05,
        }
    }

    /// Catalog ordering: damage, then buffs, then debuffs.
    pub(crate) const fn catalog_rank(self) -> u8 {
        match self {
            Self::Damage => 0,
            Self::Buff => 1,
            Self::Debuff => 2,
        }
    }
}

/// A named spell from a wizard's definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spell {
    pub name: String,
    pub spell_type: SpellType,
    pub description: String,
    pub element: Element,
    pub strength: f64,
}

impl Spell {
    pub fn new(
        name: impl Into<String>,
        spell_type: SpellType,
        description: impl Into<String>,
        element: Element,
        strength: f64,
    ) -> Self {
        Self {
            name: name.into(),
            spell_type,
            description: description.into(),
            element,
            strength,
        }
    }

    pub fn accuracy(&self) -> f64 {
        self.element.accuracy()
    }

    pub fn variance(&self) -> f64 {
        self.spell_type.variance()
    }

    pub fn target(&self) -> ActionTarget {
        match self.spell_type {
            SpellType::Damage | SpellType::Debuff => ActionTarget::Enemy,
            SpellType::Buff => ActionTarget::Caster,
        }
    }

    pub fn base_value(&self) -> f64 {
        match self.spell_type {
            SpellType::Damage => formula::damage_base(self.strength),
            SpellType::Buff | SpellType::Debuff => formula::modifier_base(self.strength),
        }
    }

    /// Damage rounds to whole points; buff/debuff magnitudes to three decimals.
    pub fn round_value(&self, value: f64) -> f64 {
        match self.spell_type {
            SpellType::Damage => value.round(),
            SpellType::Buff | SpellType::Debuff => formula::round_to(value, 3),
        }
    }

    pub fn range(&self) -> (f64, f64) {
        let base = self.base_value();
        let variance = self.variance();
        (
            self.round_value(base * (1.0 - variance)),
            self.round_value(base * (1.0 + variance)),
        )
    }

    pub fn mana_cost(&self) -> u32 {
        match self.spell_type {
            SpellType::Damage => formula::damage_mana_cost(self.strength),
            SpellType::Buff | SpellType::Debuff => formula::modifier_mana_cost(self.strength),
        }
    }

    pub(crate) fn roll_value(&self, rng: &mut dyn RngOracle) -> f64 {
        let varied = rng.vary(self.base_value(), self.variance());
        self.round_value(varied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;

    #[test]
    fn spell_type_parsing() {
        assert_eq!(SpellType::from_name("damage"), Ok(SpellType::Damage));
        assert_eq!(SpellType::from_name("DeBuFf"), Ok(SpellType::Debuff));
        assert!(SpellType::from_name("curse").is_err());
    }

    #[test]
    fn damage_spell_figures() {
        let spell = Spell::new("Bolt", SpellType::Damage, "", Element::Storm, 1.0);
        assert_eq!(spell.range(), (180.0, 220.0));
        assert_eq!(spell.mana_cost(), 10);
        assert_eq!(spell.accuracy(), 0.7);
        assert_eq!(spell.target(), ActionTarget::Enemy);
    }

    #[test]
    fn modifier_spell_figures() {
        let buff = Spell::new("Focus", SpellType::Buff, "", Element::Life, 0.0);
        let (min, max) = buff.range();
        assert!((min - 0.095).abs() < 1e-9 && (max - 0.105).abs() < 1e-9);
        assert_eq!(buff.mana_cost(), 1);
        assert_eq!(buff.target(), ActionTarget::Caster);

        let debuff = Spell::new("Hex", SpellType::Debuff, "", Element::Death, 1.0);
        let (min, max) = debuff.range();
        assert!((0.237..=0.238).contains(&min), "{min}");
        assert!((0.262..=0.263).contains(&max), "{max}");
        assert_eq!(debuff.target(), ActionTarget::Enemy);
    }

    #[test]
    fn rolled_modifier_is_rounded_to_three_places() {
        let buff = Spell::new("Focus", SpellType::Buff, "", Element::Life, 0.5);
        let value = buff.roll_value(&mut SequenceRng::constant(0.37));
        assert_eq!(value, formula::round_to(value, 3));
        let (min, max) = buff.range();
        assert!(value >= min && value <= max);
    }
}
