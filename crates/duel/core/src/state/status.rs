//! Status effects attached to a combatant.

use core::fmt;

use strum::{Display, IntoStaticStr};

use crate::element::Element;

/// Kind of a status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum StatusEffectKind {
    Buff,
    Debuff,
    /// Elemental shield; the effect name is the element name.
    Defense,
}

/// Which effects tick down in a decay pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectGroup {
    BuffsAndDebuffs,
    Defenses,
}

impl EffectGroup {
    pub const fn includes(self, kind: StatusEffectKind) -> bool {
        match self {
            Self::BuffsAndDebuffs => {
                matches!(kind, StatusEffectKind::Buff | StatusEffectKind::Debuff)
            }
            Self::Defenses => matches!(kind, StatusEffectKind::Defense),
        }
    }
}

/// A named, duration-bearing modifier.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub name: String,
    pub kind: StatusEffectKind,
    pub value: f64,
    pub remaining_turns: u32,
}

impl StatusEffect {
    pub fn new(
        name: impl Into<String>,
        kind: StatusEffectKind,
        value: f64,
        remaining_turns: u32,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            value,
            remaining_turns,
        }
    }

    /// Shield effect for `element`, valued 0.
    pub fn shield(element: Element, remaining_turns: u32) -> Self {
        Self::new(element.name(), StatusEffectKind::Defense, 0.0, remaining_turns)
    }

    pub fn is_buff(&self) -> bool {
        self.kind == StatusEffectKind::Buff
    }

    pub fn is_debuff(&self) -> bool {
        self.kind == StatusEffectKind::Debuff
    }

    pub fn is_defense(&self) -> bool {
        self.kind == StatusEffectKind::Defense
    }

    /// Element of a shield effect. `None` for buffs and debuffs.
    pub fn shield_element(&self) -> Option<Element> {
        if !self.is_defense() {
            return None;
        }
        Element::from_name(&self.name).ok()
    }
}

impl fmt::Display for StatusEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] value={} turns={}",
            self.name, self.kind, self.value, self.remaining_turns
        )
    }
}

/// A combatant's active effects, unique by name, in application order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: Vec<StatusEffect>,
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an effect. A same-named effect is overwritten in place
    /// (kind, value and duration); effects never stack.
    pub fn apply(&mut self, effect: StatusEffect) {
        match self.effects.iter_mut().find(|active| active.name == effect.name) {
            Some(existing) => {
                existing.kind = effect.kind;
                existing.value = effect.value;
                existing.remaining_turns = effect.remaining_turns;
            }
            None => self.effects.push(effect),
        }
    }

    pub fn get(&self, name: &str) -> Option<&StatusEffect> {
        self.effects.iter().find(|effect| effect.name == name)
    }

    /// Name lookup ignoring case.
    pub fn find_ignore_case(&self, name: &str) -> Option<&StatusEffect> {
        self.effects
            .iter()
            .find(|effect| effect.name.eq_ignore_ascii_case(name))
    }

    /// Decrements every effect in `group` by one turn, then prunes all
    /// effects with no turns left.
    pub fn decay(&mut self, group: EffectGroup) {
        for effect in &mut self.effects {
            if group.includes(effect.kind) {
                effect.remaining_turns = effect.remaining_turns.saturating_sub(1);
            }
        }
        self.effects.retain(|effect| effect.remaining_turns > 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn buffs(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter().filter(|effect| effect.is_buff())
    }

    pub fn debuffs(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter().filter(|effect| effect.is_debuff())
    }

    pub fn defenses(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter().filter(|effect| effect.is_defense())
    }

    /// Elements of all active shields.
    pub fn shield_elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.defenses().filter_map(StatusEffect::shield_element)
    }

    /// Sum of buff values minus sum of debuff values.
    pub fn net_modifier(&self) -> f64 {
        self.effects.iter().fold(0.0, |total, effect| match effect.kind {
            StatusEffectKind::Buff => total + effect.value,
            StatusEffectKind::Debuff => total - effect.value,
            StatusEffectKind::Defense => total,
        })
    }

    /// Product of `(1 + buff)` and `max(0, 1 - debuff)` over active effects.
    pub fn modifier_product(&self) -> f64 {
        self.effects.iter().fold(1.0, |product, effect| match effect.kind {
            StatusEffectKind::Buff => product * (1.0 + effect.value),
            StatusEffectKind::Debuff => product * (1.0 - effect.value).max(0.0),
            StatusEffectKind::Defense => product,
        })
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl fmt::Display for StatusEffects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.effects.is_empty() {
            return f.write_str("(none)");
        }
        for (idx, effect) in self.effects.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{effect}")?;
        }
        Ok(())
    }
}
