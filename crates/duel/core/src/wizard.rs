//! Immutable wizard templates and their derived combat figures.

use core::fmt;

use crate::action::{Action, Defend, Heal, Spell, formula};
use crate::config::BattleConfig;
use crate::element::Element;
use crate::rng::RngOracle;

/// The five normalized `[0, 1]` ratings feeding a wizard's formulas.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WizardStats {
    pub attack: f64,
    pub defense: f64,
    pub health: f64,
    pub healing: f64,
    pub arcane: f64,
}

/// A generated combatant definition.
///
/// Wizards never change during a battle; all mutable combat state lives in
/// [`PlayerState`](crate::PlayerState).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wizard {
    pub name: String,
    pub primary_element: Element,
    pub secondary_element: Element,
    pub stats: WizardStats,
    pub spells: Vec<Spell>,
    pub combat_style: String,
}

impl Wizard {
    pub fn new(
        name: impl Into<String>,
        primary_element: Element,
        secondary_element: Element,
        stats: WizardStats,
        spells: Vec<Spell>,
        combat_style: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            primary_element,
            secondary_element,
            stats,
            spells,
            combat_style: combat_style.into(),
        }
    }

    /// Rolls max HP: `max(1, round(vary(500 * 2^(health^2), 10%)))`.
    pub fn roll_max_hp(&self, rng: &mut dyn RngOracle) -> u32 {
        let varied = rng.vary(
            formula::max_hp_base(self.stats.health),
            BattleConfig::SETUP_VARIANCE,
        );
        formula::round_count(varied).max(1)
    }

    /// Rolls starting mana, clamped to the mana cap.
    pub fn roll_starting_mana(&self, rng: &mut dyn RngOracle) -> u32 {
        let varied = rng.vary(
            formula::starting_mana_base(self.stats.arcane),
            BattleConfig::SETUP_VARIANCE,
        );
        formula::round_count(varied).min(BattleConfig::MANA_CAP)
    }

    pub fn mana_per_round(&self) -> u32 {
        formula::mana_per_round(self.stats.arcane)
    }

    pub fn damage_multiplier(&self) -> f64 {
        formula::damage_multiplier(self.stats.attack)
    }

    pub fn damage_reduction(&self) -> f64 {
        formula::damage_reduction(self.stats.defense)
    }

    pub fn heal(&self) -> Heal {
        Heal::new(self.stats.healing)
    }

    /// The full, ordered action catalog.
    ///
    /// Spells sorted by type (damage, buff, debuff) then case-insensitive
    /// name, followed by Defend(primary), Defend(secondary), Heal and Pass.
    /// Positions in this list are the numbering contract with the decision
    /// service.
    pub fn all_actions(&self) -> Vec<Action> {
        let mut spells: Vec<&Spell> = self.spells.iter().collect();
        spells.sort_by(|a, b| {
            a.spell_type
                .catalog_rank()
                .cmp(&b.spell_type.catalog_rank())
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });

        let mut actions: Vec<Action> = spells.into_iter().cloned().map(Action::Spell).collect();
        actions.push(Action::Defend(Defend::new(self.primary_element)));
        actions.push(Action::Defend(Defend::new(self.secondary_element)));
        actions.push(Action::Heal(self.heal()));
        actions.push(Action::Pass);
        actions
    }

    /// Catalog entries costing at most `mana`, in catalog order.
    pub fn affordable_actions(&self, mana: u32) -> Vec<Action> {
        self.all_actions()
            .into_iter()
            .filter(|action| action.mana_cost() <= mana)
            .collect()
    }

    pub fn damage_spells(&self) -> impl Iterator<Item = &Spell> {
        self.spells
            .iter()
            .filter(|spell| spell.spell_type == crate::SpellType::Damage)
    }
}

impl fmt::Display for Wizard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(
            f,
            " Elements: {} / {}",
            self.primary_element, self.secondary_element
        )?;
        writeln!(
            f,
            " attack={} defense={} health={} healing={} arcane={}",
            self.stats.attack,
            self.stats.defense,
            self.stats.health,
            self.stats.healing,
            self.stats.arcane
        )?;
        writeln!(f, " combat style={}", self.combat_style)?;
        writeln!(
            f,
            " damage mult={:.3} damage red={:.3} mpr={}",
            self.damage_multiplier(),
            self.damage_reduction(),
            self.mana_per_round()
        )?;
        write!(f, " Available actions:")?;
        for (idx, action) in self.all_actions().iter().enumerate() {
            write!(f, "\n Action {}: {}", idx + 1, action.overview())?;
        }
        Ok(())
    }
}
