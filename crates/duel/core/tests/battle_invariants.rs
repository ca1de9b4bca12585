// Property-based tests: health, mana and effect-uniqueness invariants hold over
// arbitrary battles.
use duel_core::{
    Action, Element, GameEngine, GameState, PcgRng, Seat, Spell, SpellType,
    StatusEffectKind, Wizard, WizardStats,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn element() -> impl Strategy<Value = Element> {
    prop::sample::select(vec![
        Element::Fire,
        Element::Ice,
        Element::Storm,
        Element::Life,
        Element::Death,
        Element::Myth,
        Element::Balance,
    ])
}

fn spell_type() -> impl Strategy<Value = SpellType> {
    prop::sample::select(vec![SpellType::Damage, SpellType::Buff, SpellType::Debuff])
}

fn spell() -> impl Strategy<Value = Spell> {
    ("[a-z]{3,8}", spell_type(), element(), 0.0f64..=1.0)
        .prop_map(|(name, kind, element, strength)| Spell::new(name, kind, "", element, strength))
}

fn wizard() -> impl Strategy<Value = Wizard> {
    (
        "[A-Z][a-z]{2,8}",
        element(),
        element(),
        (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0),
        prop::collection::vec(spell(), 1..5),
    )
        .prop_map(|(name, primary, secondary, stats, spells)| {
            let (attack, defense, health, healing, arcane) = stats;
            Wizard::new(
                name,
                primary,
                secondary,
                WizardStats {
                    attack,
                    defense,
                    health,
                    healing,
                    arcane,
                },
                spells,
                "",
            )
        })
}

fn assert_invariants(state: &GameState) -> Result<(), TestCaseError> {
    for seat in Seat::BOTH {
        let player = state.player(seat);
        prop_assert!(player.current_health() <= player.max_health());
        prop_assert!(player.current_mana() <= 25);

        let names: HashSet<&str> = player.effects().iter().map(|e| e.name.as_str()).collect();
        prop_assert_eq!(names.len(), player.effects().len());
        prop_assert!(player.effects().iter().all(|e| e.remaining_turns > 0));
    }
    Ok(())
}

proptest! {
    #[test]
    fn proptest_battles_preserve_invariants(
        a in wizard(),
        b in wizard(),
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..80),
    ) {
        let mut rng = PcgRng::new(seed);
        let mut state = GameState::initialize(a, b, &mut rng);
        assert_invariants(&state)?;

        for pick in picks {
            if state.get_winner().is_some() {
                break;
            }
            let seat = state.turn.current;
            let affordable = state.affordable_actions(seat);
            let mut engine = GameEngine::new(&mut state);
            if affordable.is_empty() {
                engine.skip_turn().expect("skip is valid for the current seat");
            } else {
                let action = pick.get(&affordable).clone();
                engine.execute(seat, &action, &mut rng).expect("affordable catalog action");
            }
            assert_invariants(&state)?;
        }
    }

    #[test]
    fn proptest_shield_only_decays_when_owner_is_defender(
        a in wizard(),
        b in wizard(),
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..30),
    ) {
        let mut rng = PcgRng::new(seed);
        let mut state = GameState::initialize(a, b, &mut rng);
        let element = state.wizard(Seat::First).primary_element;
        let shield = Action::Defend(duel_core::Defend::new(element));
        state.player_mut(Seat::First).set_mana(25);
        GameEngine::new(&mut state)
            .execute(Seat::First, &shield, &mut rng)
            .expect("defend is affordable");

        for pick in picks {
            if state.get_winner().is_some() {
                break;
            }
            let seat = state.turn.current;
            let shield_turns = |state: &GameState| {
                state
                    .player(Seat::First)
                    .effects()
                    .get(element.name())
                    .map(|e| e.remaining_turns)
            };
            let before = shield_turns(&state);
            let affordable = state.affordable_actions(seat);
            let action = pick.get(&affordable).clone();
            let raises_shield = seat == Seat::First && action == shield;
            GameEngine::new(&mut state)
                .execute(seat, &action, &mut rng)
                .expect("affordable catalog action");
            let after = shield_turns(&state);

            if seat == Seat::First && !raises_shield {
                prop_assert_eq!(before, after);
            }
            if seat == Seat::Second {
                if let Some(turns) = before {
                    prop_assert_eq!(after, turns.checked_sub(1).filter(|&t| t > 0));
                }
            }
        }
    }

    #[test]
    fn proptest_buffs_never_stack(value_a in 0.0f64..0.3, value_b in 0.0f64..0.3, seed in any::<u64>()) {
        let buff = Spell::new("Surge", SpellType::Buff, "", Element::Life, 0.5);
        let caster = Wizard::new("Caster", Element::Life, Element::Myth, WizardStats::default(), vec![buff.clone()], "");
        let foe = Wizard::new("Foe", Element::Ice, Element::Fire, WizardStats::default(), Vec::new(), "");
        let mut rng = PcgRng::new(seed);
        let mut state = GameState::initialize(caster, foe, &mut rng);
        let caster_seat = if state.wizard(Seat::First).name == "Caster" { Seat::First } else { Seat::Second };

        // Two successful casts: accuracy roll 0.0 then a variance sample.
        let mut scripted = duel_core::SequenceRng::new(vec![0.0, value_a, 0.0, value_b]);
        state.player_mut(caster_seat).set_mana(25);
        let action = Action::Spell(buff);
        state.perform_action(caster_seat, &action, &mut scripted).expect("affordable");
        state.perform_action(caster_seat, &action, &mut scripted).expect("affordable");

        let buffs: Vec<_> = state
            .player(caster_seat)
            .effects()
            .iter()
            .filter(|e| e.kind == StatusEffectKind::Buff)
            .collect();
        prop_assert_eq!(buffs.len(), 1);
        prop_assert_eq!(buffs[0].remaining_turns, 3);
    }
}
