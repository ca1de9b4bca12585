use super::{DefensiveLevel, EffectivenessLevel, HealthLevel, ManaLevel, OffensiveLevel};
use crate::action::{Action, SpellType};
use crate::combat::calculate_damage;
use crate::config::BattleConfig;
use crate::state::{GameState, Seat, StatusEffectKind};

impl GameState {
    /// "Extremely low" when any enemy damage spell's top roll would be lethal,
    /// otherwise thirds of max health.
    pub fn health_level(&self, seat: Seat) -> HealthLevel {
        let me = self.player(seat);
        let enemy = self.player(seat.opponent());

        let lethal = enemy.wizard().damage_spells().any(|spell| {
            let (_, max) = spell.range();
            calculate_damage(enemy, me, spell.element, max) >= me.current_health()
        });
        if lethal {
            return HealthLevel::ExtremelyLow;
        }

        let current = f64::from(me.current_health());
        let max = f64::from(me.max_health());
        if current <= max / 3.0 {
            HealthLevel::Low
        } else if current <= max * (2.0 / 3.0) {
            HealthLevel::Medium
        } else {
            HealthLevel::High
        }
    }

    pub fn mana_level(&self, seat: Seat) -> ManaLevel {
        match self.player(seat).current_mana() {
            mana if mana > BattleConfig::MANA_HIGH_THRESHOLD => ManaLevel::High,
            mana if mana > BattleConfig::MANA_MEDIUM_THRESHOLD => ManaLevel::Medium,
            _ => ManaLevel::Low,
        }
    }

    pub fn offensive_level(&self, seat: Seat) -> OffensiveLevel {
        let net = self.player(seat).effects().net_modifier();
        if net > 0.0 {
            OffensiveLevel::High
        } else if net == 0.0 {
            OffensiveLevel::Medium
        } else {
            OffensiveLevel::Low
        }
    }

    /// Shield score: for every active shield and each of the enemy's two
    /// elements, +3 if the shield is strong against it, -1 if weak, +1 otherwise.
    pub fn shield_score(&self, seat: Seat) -> i32 {
        let enemy = self.wizard(seat.opponent());
        let enemy_elements = [enemy.primary_element, enemy.secondary_element];

        self.player(seat)
            .effects()
            .shield_elements()
            .map(|shield| {
                enemy_elements
                    .iter()
                    .map(|&element| {
                        if shield.is_strong_against(element) {
                            3
                        } else if shield.is_weak_against(element) {
                            -1
                        } else {
                            1
                        }
                    })
                    .sum::<i32>()
            })
            .sum()
    }

    pub fn defensive_level(&self, seat: Seat) -> DefensiveLevel {
        let net = self.player(seat).effects().net_modifier();
        let shields = self.shield_score(seat);

        let net_sign = if net > 0.0 {
            1
        } else if net < 0.0 {
            -1
        } else {
            0
        };

        match (net_sign, shields.signum()) {
            (1, 1) => DefensiveLevel::ExtremelyHigh,
            (1, 0) | (0, 1) => DefensiveLevel::High,
            (-1, 0) | (0, -1) => DefensiveLevel::Low,
            (-1, -1) => DefensiveLevel::ExtremelyLow,
            _ => DefensiveLevel::Medium,
        }
    }

    /// Damage spells score against the defender's active shields (+1 when
    /// the spell element beats the shield, -2 when the shield beats it).
    /// Defend scores against the enemy's damage spells (+2 / -1). Everything
    /// else is "medium".
    pub fn action_element_effectiveness(&self, seat: Seat, action: &Action) -> EffectivenessLevel {
        let defender = self.player(seat.opponent());

        let score: i32 = match action {
            Action::Spell(spell) if spell.spell_type == SpellType::Damage => defender
                .effects()
                .shield_elements()
                .map(|shield| {
                    if spell.element.is_strong_against(shield) {
                        1
                    } else if spell.element.is_weak_against(shield) {
                        -2
                    } else {
                        0
                    }
                })
                .sum(),
            Action::Defend(defend) => defender
                .wizard()
                .damage_spells()
                .map(|spell| {
                    if defend.element.is_strong_against(spell.element) {
                        2
                    } else if defend.element.is_weak_against(spell.element) {
                        -1
                    } else {
                        0
                    }
                })
                .sum(),
            _ => 0,
        };

        EffectivenessLevel::from_score(score)
    }

    /// True when the action's effect is already fully in force.
    pub fn is_redundant(&self, seat: Seat, action: &Action) -> bool {
        let me = self.player(seat);
        let enemy = self.player(seat.opponent());

        match action {
            Action::Pass => false,
            Action::Heal(_) => me.current_health() == me.max_health(),
            Action::Defend(defend) => me
                .effects()
                .defenses()
                .find(|effect| effect.name.eq_ignore_ascii_case(defend.element.name()))
                .is_some_and(|effect| effect.remaining_turns >= 1),
            Action::Spell(spell) => match spell.spell_type {
                SpellType::Damage => false,
                SpellType::Buff => me
                    .effects()
                    .find_ignore_case(&spell.name)
                    .is_some_and(|effect| {
                        effect.kind == StatusEffectKind::Buff && effect.remaining_turns >= 2
                    }),
                SpellType::Debuff => enemy
                    .effects()
                    .find_ignore_case(&spell.name)
                    .is_some_and(|effect| {
                        effect.kind == StatusEffectKind::Debuff && effect.remaining_turns >= 1
                    }),
            },
        }
    }

    /// Damage spells report the battle-adjusted damage band for the current
    /// effects; other actions report their raw range.
    pub fn action_effect_range(&self, seat: Seat, action: &Action) -> Option<(f64, f64)> {
        match action.as_damage_spell() {
            Some(spell) => {
                let attacker = self.player(seat);
                let defender = self.player(seat.opponent());
                let (min, max) = spell.range();
                Some((
                    f64::from(calculate_damage(attacker, defender, spell.element, min)),
                    f64::from(calculate_damage(attacker, defender, spell.element, max)),
                ))
            }
            None => action.range(),
        }
    }

    /// True only for damage spells whose top roll would finish the defender.
    pub fn can_kill(&self, seat: Seat, action: &Action) -> bool {
        if action.as_damage_spell().is_none() {
            return false;
        }
        let defender_health = f64::from(self.player(seat.opponent()).current_health());
        self.action_effect_range(seat, action)
            .is_some_and(|(_, max)| max >= defender_health)
    }

    pub fn affordable_actions(&self, seat: Seat) -> Vec<Action> {
        let state = self.player(seat);
        state.wizard().affordable_actions(state.current_mana())
    }

    pub fn unaffordable_actions(&self, seat: Seat) -> Vec<Action> {
        let state = self.player(seat);
        let mana = state.current_mana();
        state
            .wizard()
            .all_actions()
            .into_iter()
            .filter(|action| action.mana_cost() > mana)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Defend, Heal, Spell};
    use crate::element::Element;
    use crate::rng::SequenceRng;
    use crate::state::StatusEffect;
    use crate::wizard::{Wizard, WizardStats};

    fn battle() -> GameState {
        let alpha = Wizard::new(
            "Alpha",
            Element::Fire,
            Element::Death,
            WizardStats::default(),
            vec![
                Spell::new("Flare", SpellType::Damage, "", Element::Fire, 0.0),
                Spell::new("Rally", SpellType::Buff, "", Element::Fire, 0.0),
                Spell::new("Sap", SpellType::Debuff, "", Element::Death, 0.0),
            ],
            "",
        );
        let beta = Wizard::new(
            "Beta",
            Element::Ice,
            Element::Storm,
            WizardStats::default(),
            vec![Spell::new("Gale", SpellType::Damage, "", Element::Storm, 1.0)],
            "",
        );
        GameState::initialize(alpha, beta, &mut SequenceRng::new(vec![0.9, 0.5, 0.5, 0.5, 0.5]))
    }

    #[test]
    fn health_tiers() {
        let mut state = battle();
        // Gale tops out at 220 * 1.1 = 242.
        assert_eq!(state.health_level(Seat::First), HealthLevel::High);
        state.player_mut(Seat::First).set_health(330);
        assert_eq!(state.health_level(Seat::First), HealthLevel::Medium);
        state.player_mut(Seat::First).set_health(300);
        assert_eq!(state.health_level(Seat::First), HealthLevel::Medium);
        state.player_mut(Seat::First).set_health(242);
        assert_eq!(state.health_level(Seat::First), HealthLevel::ExtremelyLow);
        state.player_mut(Seat::First).set_health(243);
        assert_eq!(state.health_level(Seat::First), HealthLevel::Medium);
    }

    #[test]
    fn low_health_without_lethal_threat() {
        let mut state = battle();
        // Alpha's Flare tops out at 121.
        state.player_mut(Seat::Second).set_health(166);
        assert_eq!(state.health_level(Seat::Second), HealthLevel::Low);
        state.player_mut(Seat::Second).set_health(121);
        assert_eq!(state.health_level(Seat::Second), HealthLevel::ExtremelyLow);
    }

    #[test]
    fn mana_tiers() {
        let mut state = battle();
        state.player_mut(Seat::First).set_mana(17);
        assert_eq!(state.mana_level(Seat::First), ManaLevel::High);
        state.player_mut(Seat::First).set_mana(16);
        assert_eq!(state.mana_level(Seat::First), ManaLevel::Medium);
        state.player_mut(Seat::First).set_mana(8);
        assert_eq!(state.mana_level(Seat::First), ManaLevel::Low);
    }

    #[test]
    fn offensive_and_defensive_tiers() {
        let mut state = battle();
        assert_eq!(state.offensive_level(Seat::First), OffensiveLevel::Medium);
        assert_eq!(state.defensive_level(Seat::First), DefensiveLevel::Medium);

        // FIRE shield vs ICE (+3) and STORM (-1) = +2
        state
            .player_mut(Seat::First)
            .effects_mut()
            .apply(StatusEffect::shield(Element::Fire, 3));
        assert_eq!(state.shield_score(Seat::First), 2);
        assert_eq!(state.defensive_level(Seat::First), DefensiveLevel::High);

        state.player_mut(Seat::First).effects_mut().apply(StatusEffect::new(
            "Rally",
            StatusEffectKind::Buff,
            0.1,
            4,
        ));
        assert_eq!(state.offensive_level(Seat::First), OffensiveLevel::High);
        assert_eq!(state.defensive_level(Seat::First), DefensiveLevel::ExtremelyHigh);

        state.player_mut(Seat::First).effects_mut().apply(StatusEffect::new(
            "Sap",
            StatusEffectKind::Debuff,
            0.3,
            3,
        ));
        assert_eq!(state.offensive_level(Seat::First), OffensiveLevel::Low);
        // Negative net against positive shields cancels out.
        assert_eq!(state.defensive_level(Seat::First), DefensiveLevel::Medium);
    }

    #[test]
    fn weak_shield_with_debuff_is_extremely_low() {
        let mut state = battle();
        // Seat 1 faces FIRE/DEATH; an ICE shield scores -1 + 1 = 0.
        state
            .player_mut(Seat::Second)
            .effects_mut()
            .apply(StatusEffect::shield(Element::Ice, 3));
        assert_eq!(state.shield_score(Seat::Second), 0);
        state.player_mut(Seat::Second).effects_mut().apply(StatusEffect::new(
            "Sap",
            StatusEffectKind::Debuff,
            0.1,
            3,
        ));
        assert_eq!(state.defensive_level(Seat::Second), DefensiveLevel::Low);

        // Seat 0 faces ICE/STORM; a LIFE shield scores -1 twice.
        state
            .player_mut(Seat::First)
            .effects_mut()
            .apply(StatusEffect::shield(Element::Life, 3));
        assert_eq!(state.shield_score(Seat::First), -2);
        assert_eq!(state.defensive_level(Seat::First), DefensiveLevel::Low);
        state.player_mut(Seat::First).effects_mut().apply(StatusEffect::new(
            "Sap",
            StatusEffectKind::Debuff,
            0.1,
            3,
        ));
        assert_eq!(state.defensive_level(Seat::First), DefensiveLevel::ExtremelyLow);
    }

    #[test]
    fn element_effectiveness() {
        let mut state = battle();
        let flare = Action::Spell(Spell::new("Flare", SpellType::Damage, "", Element::Fire, 0.0));
        assert_eq!(
            state.action_element_effectiveness(Seat::First, &flare),
            EffectivenessLevel::Medium
        );

        state
            .player_mut(Seat::Second)
            .effects_mut()
            .apply(StatusEffect::shield(Element::Ice, 3));
        assert_eq!(
            state.action_element_effectiveness(Seat::First, &flare),
            EffectivenessLevel::High
        );

        state
            .player_mut(Seat::Second)
            .effects_mut()
            .apply(StatusEffect::shield(Element::Storm, 3));
        // +1 (ICE) - 2 (STORM)
        assert_eq!(
            state.action_element_effectiveness(Seat::First, &flare),
            EffectivenessLevel::Low
        );

        // Beta only casts STORM: FIRE is weak to it, DEATH is neutral.
        let fire_shield = Action::Defend(Defend::new(Element::Fire));
        let death_shield = Action::Defend(Defend::new(Element::Death));
        assert_eq!(
            state.action_element_effectiveness(Seat::First, &fire_shield),
            EffectivenessLevel::Low
        );
        assert_eq!(
            state.action_element_effectiveness(Seat::First, &death_shield),
            EffectivenessLevel::Medium
        );
        assert_eq!(
            state.action_element_effectiveness(Seat::First, &Action::Pass),
            EffectivenessLevel::Medium
        );
    }

    #[test]
    fn redundancy_rules() {
        let mut state = battle();
        let heal = Action::Heal(Heal::new(0.0));
        let shield = Action::Defend(Defend::new(Element::Fire));
        let rally = Action::Spell(Spell::new("Rally", SpellType::Buff, "", Element::Fire, 0.0));
        let sap = Action::Spell(Spell::new("Sap", SpellType::Debuff, "", Element::Death, 0.0));

        assert!(state.is_redundant(Seat::First, &heal));
        assert!(!state.is_redundant(Seat::First, &shield));
        assert!(!state.is_redundant(Seat::First, &Action::Pass));

        state.player_mut(Seat::First).change_health(-1);
        assert!(!state.is_redundant(Seat::First, &heal));

        let effects = state.player_mut(Seat::First).effects_mut();
        effects.apply(StatusEffect::shield(Element::Fire, 1));
        effects.apply(StatusEffect::new("rally", StatusEffectKind::Buff, 0.1, 1));
        assert!(state.is_redundant(Seat::First, &shield));
        assert!(!state.is_redundant(Seat::First, &rally));

        state.player_mut(Seat::First).effects_mut().apply(StatusEffect::new(
            "rally",
            StatusEffectKind::Buff,
            0.1,
            2,
        ));
        assert!(state.is_redundant(Seat::First, &rally));

        assert!(!state.is_redundant(Seat::First, &sap));
        state.player_mut(Seat::Second).effects_mut().apply(StatusEffect::new(
            "SAP",
            StatusEffectKind::Debuff,
            0.1,
            1,
        ));
        assert!(state.is_redundant(Seat::First, &sap));
    }

    #[test]
    fn kill_detection_and_ranges() {
        let mut state = battle();
        let flare = Action::Spell(Spell::new("Flare", SpellType::Damage, "", Element::Fire, 0.0));
        assert_eq!(state.action_effect_range(Seat::First, &flare), Some((99.0, 121.0)));
        assert!(!state.can_kill(Seat::First, &flare));

        state.player_mut(Seat::Second).set_health(121);
        assert!(state.can_kill(Seat::First, &flare));
        assert!(!state.can_kill(Seat::First, &Action::Pass));
        assert_eq!(state.action_effect_range(Seat::First, &Action::Pass), None);
    }

    #[test]
    fn affordable_partition() {
        let mut state = battle();
        state.player_mut(Seat::First).set_mana(1);
        let affordable = state.affordable_actions(Seat::First);
        let unaffordable = state.unaffordable_actions(Seat::First);
        assert_eq!(
            affordable.iter().map(Action::label).collect::<Vec<_>>(),
            ["Rally", "Sap", "Pass"]
        );
        assert_eq!(affordable.len() + unaffordable.len(), 7);
        assert!(unaffordable.iter().all(|action| action.mana_cost() > 1));
    }
}
