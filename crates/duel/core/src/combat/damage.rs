//! Damage calculation.

use crate::config::BattleConfig;
use crate::element::Element;
use crate::state::PlayerState;

// ============================================================================
// Multipliers
// ============================================================================

/// Effect of one active shield on a spell of `spell_element`.
///
/// ```text
/// shield in spell element's strengths   => x1.05 (shield overwhelmed)
/// shield in spell element's weaknesses  => x0.5  (shield resists)
/// otherwise                             => x0.9
/// ```
pub fn shield_multiplier(spell_element: Element, shield_element: Element) -> f64 {
    if spell_element.is_strong_against(shield_element) {
        BattleConfig::SHIELD_OVERWHELMED
    } else if spell_element.is_weak_against(shield_element) {
        BattleConfig::SHIELD_RESISTS
    } else {
        BattleConfig::SHIELD_BASELINE
    }
}

/// `base * Π(1 + buff) * Π(max(0, 1 - debuff))` over a combatant's effects.
///
/// `base` is the wizard's damage multiplier for attackers and damage
/// reduction for defenders.
pub fn combatant_multiplier(base: f64, state: &PlayerState) -> f64 {
    base * state.effects().modifier_product()
}

// ============================================================================
// Damage Calculation
// ============================================================================

/// Final damage of a successful damage spell.
///
/// # Formula
///
/// ```text
/// damage = rolled * attacker_multiplier * defender_multiplier
/// for each shield on defender: damage *= shield_multiplier
/// final = max(0, round(damage))
/// ```
pub fn calculate_damage(
    attacker: &PlayerState,
    defender: &PlayerState,
    spell_element: Element,
    rolled: f64,
) -> u32 {
    let attacker_multiplier = combatant_multiplier(attacker.wizard().damage_multiplier(), attacker);
    let defender_multiplier = combatant_multiplier(defender.wizard().damage_reduction(), defender);

    let damage = defender
        .effects()
        .shield_elements()
        .fold(rolled * attacker_multiplier * defender_multiplier, |damage, shield| {
            damage * shield_multiplier(spell_element, shield)
        });

    crate::action::formula::round_count(damage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Player, Seat, StatusEffect, StatusEffectKind};
    use crate::wizard::{Wizard, WizardStats};

    fn state(seat: Seat, stats: WizardStats) -> PlayerState {
        let wizard = Wizard::new("W", Element::Fire, Element::Ice, stats, Vec::new(), "");
        PlayerState::new(Player { seat, wizard }, 500, 10)
    }

    #[test]
    fn baseline_damage() {
        let attacker = state(Seat::First, WizardStats::default());
        let defender = state(Seat::Second, WizardStats::default());
        assert_eq!(calculate_damage(&attacker, &defender, Element::Fire, 100.0), 110);
    }

    #[test]
    fn shield_direction_follows_spell_element() {
        assert_eq!(shield_multiplier(Element::Fire, Element::Ice), 1.05);
        assert_eq!(shield_multiplier(Element::Fire, Element::Storm), 0.5);
        assert_eq!(shield_multiplier(Element::Fire, Element::Fire), 0.9);
        assert_eq!(shield_multiplier(Element::Fire, Element::Life), 0.9);
    }

    #[test]
    fn shields_compound() {
        let attacker = state(Seat::First, WizardStats::default());
        let mut defender = state(Seat::Second, WizardStats::default());
        defender.effects_mut().apply(StatusEffect::shield(Element::Storm, 3));
        defender.effects_mut().apply(StatusEffect::shield(Element::Ice, 3));
        // 100 * 1.1 * 0.5 * 1.05 = 57.75
        assert_eq!(calculate_damage(&attacker, &defender, Element::Fire, 100.0), 58);
    }

    #[test]
    fn buffs_and_debuffs_scale_both_sides() {
        let mut attacker = state(Seat::First, WizardStats::default());
        let mut defender = state(Seat::Second, WizardStats::default());
        attacker
            .effects_mut()
            .apply(StatusEffect::new("Rage", StatusEffectKind::Buff, 0.2, 4));
        defender
            .effects_mut()
            .apply(StatusEffect::new("Curse", StatusEffectKind::Debuff, 0.5, 3));
        // 100 * 1.2 * 1.1 * 0.5 = 66
        assert_eq!(calculate_damage(&attacker, &defender, Element::Life, 100.0), 66);
    }

    #[test]
    fn oversized_debuff_floors_at_zero() {
        let mut attacker = state(Seat::First, WizardStats::default());
        let defender = state(Seat::Second, WizardStats::default());
        attacker
            .effects_mut()
            .apply(StatusEffect::new("Void", StatusEffectKind::Debuff, 1.5, 3));
        assert_eq!(calculate_damage(&attacker, &defender, Element::Myth, 150.0), 0);
    }
}
