//! Authoritative battle state.
//!
//! [`GameState`] holds exactly two [`PlayerState`]s whose seat order is fixed
//! at [`GameState::initialize`], the action log and the turn position. All
//! mutation goes through `&mut self`, so resolutions are serialized by
//! construction.

mod player;
mod record;
mod status;
mod turn;

pub use player::{Player, PlayerState, Seat, SeatError};
pub use record::{ActionRecord, RecordOutcome};
pub use status::{EffectGroup, StatusEffect, StatusEffectKind, StatusEffects};
pub use turn::TurnState;

use core::fmt;

use crate::action::{Action, ActionOutcome, ActionTarget, Resolution, SpellType};
use crate::combat::calculate_damage;
use crate::config::BattleConfig;
use crate::engine::ExecuteError;
use crate::rng::{RngOracle, shuffle};
use crate::wizard::Wizard;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    players: [PlayerState; 2],
    action_log: Vec<ActionRecord>,
    pub turn: TurnState,
}

impl GameState {
    /// Starts a battle.
    ///
    /// Randomizes seat order once (one sample), then rolls max HP and starting
    /// mana for seat 0 followed by seat 1.
    pub fn initialize(first: Wizard, second: Wizard, rng: &mut dyn RngOracle) -> Self {
        let mut order = [first, second];
        shuffle(&mut order, rng);
        let [a, b] = order;

        let first_state = Self::seat_state(Seat::First, a, rng);
        let second_state = Self::seat_state(Seat::Second, b, rng);

        Self {
            players: [first_state, second_state],
            action_log: Vec::new(),
            turn: TurnState::new(),
        }
    }

    fn seat_state(seat: Seat, wizard: Wizard, rng: &mut dyn RngOracle) -> PlayerState {
        let max_hp = wizard.roll_max_hp(rng);
        let mana = wizard.roll_starting_mana(rng);
        PlayerState::new(Player { seat, wizard }, max_hp, mana)
    }

    pub fn player(&self, seat: Seat) -> &PlayerState {
        &self.players[seat.index()]
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut PlayerState {
        &mut self.players[seat.index()]
    }

    pub fn players(&self) -> &[PlayerState; 2] {
        &self.players
    }

    pub fn wizard(&self, seat: Seat) -> &Wizard {
        self.player(seat).wizard()
    }

    pub fn action_log(&self) -> &[ActionRecord] {
        &self.action_log
    }

    /// Spends mana, rolls and applies `action` for `actor`, runs the decay
    /// pass and returns the announcement.
    ///
    /// Does not enforce turn order; see [`GameEngine`](crate::GameEngine).
    pub fn perform_action(
        &mut self,
        actor: Seat,
        action: &Action,
        rng: &mut dyn RngOracle,
    ) -> Result<ActionOutcome, ExecuteError> {
        let cost = action.mana_cost();
        let available = self.player(actor).current_mana();
        if cost > available {
            return Err(ExecuteError::InsufficientMana {
                seat: actor,
                cost,
                available,
            });
        }
        self.player_mut(actor).change_mana(-i64::from(cost));

        let wizard_name = self.wizard(actor).name.clone();
        let defender = actor.opponent();

        let value = match action.resolve(rng) {
            Resolution::Failed => {
                self.record(actor, action, action.target(), RecordOutcome::Failed);
                self.decay_effects(actor);
                return Ok(ActionOutcome {
                    succeeded: false,
                    value: 0.0,
                    announcement: action.failure_announcement(&wizard_name),
                });
            }
            Resolution::Succeeded { value, .. } => value,
        };

        let applied = match action {
            Action::Heal(_) => {
                let healed = self.player_mut(actor).heal(value as u32);
                self.record(actor, action, ActionTarget::Caster, RecordOutcome::Healed(healed));
                f64::from(healed)
            }
            Action::Defend(defend) => {
                self.player_mut(actor)
                    .effects_mut()
                    .apply(StatusEffect::shield(defend.element, BattleConfig::SHIELD_TURNS));
                self.record(
                    actor,
                    action,
                    ActionTarget::Caster,
                    RecordOutcome::RaisedShield(defend.element),
                );
                0.0
            }
            Action::Spell(spell) => match spell.spell_type {
                SpellType::Damage => {
                    let damage = calculate_damage(
                        self.player(actor),
                        self.player(defender),
                        spell.element,
                        value,
                    );
                    self.player_mut(defender).take_damage(damage);
                    self.record(actor, action, ActionTarget::Enemy, RecordOutcome::Dealt(damage));
                    f64::from(damage)
                }
                SpellType::Buff => {
                    self.player_mut(actor).effects_mut().apply(StatusEffect::new(
                        spell.name.clone(),
                        StatusEffectKind::Buff,
                        value,
                        BattleConfig::BUFF_TURNS,
                    ));
                    self.record(
                        actor,
                        action,
                        ActionTarget::Caster,
                        RecordOutcome::Buff(spell.name.clone()),
                    );
                    value
                }
                SpellType::Debuff => {
                    self.player_mut(defender).effects_mut().apply(StatusEffect::new(
                        spell.name.clone(),
                        StatusEffectKind::Debuff,
                        value,
                        BattleConfig::DEBUFF_TURNS,
                    ));
                    self.record(
                        actor,
                        action,
                        ActionTarget::Enemy,
                        RecordOutcome::Debuff(spell.name.clone()),
                    );
                    value
                }
            },
            Action::Pass => {
                self.record(actor, action, ActionTarget::Caster, RecordOutcome::Passed);
                0.0
            }
        };

        self.decay_effects(actor);

        Ok(ActionOutcome {
            succeeded: true,
            value: applied,
            announcement: action.success_announcement(&wizard_name, applied),
        })
    }

    /// The actor's buffs/debuffs and the defender's shields lose one turn.
    fn decay_effects(&mut self, actor: Seat) {
        self.player_mut(actor)
            .effects_mut()
            .decay(EffectGroup::BuffsAndDebuffs);
        self.player_mut(actor.opponent())
            .effects_mut()
            .decay(EffectGroup::Defenses);
    }

    fn record(&mut self, actor: Seat, action: &Action, target: ActionTarget, outcome: RecordOutcome) {
        self.action_log.push(ActionRecord {
            actor,
            action_type: action.action_type(),
            target,
            outcome,
        });
    }

    /// Round-boundary gain: each seat gains its own mana per round, clamped
    /// to the cap. Returns the mana each seat actually gained.
    pub fn increment_mana(&mut self) -> [u32; 2] {
        Seat::BOTH.map(|seat| {
            let gain = self.wizard(seat).mana_per_round();
            let before = self.player(seat).current_mana();
            self.player_mut(seat).change_mana(i64::from(gain)) - before
        })
    }

    /// Seat 0 at zero health loses first; otherwise seat 1 at zero loses.
    pub fn get_winner(&self) -> Option<Seat> {
        if self.player(Seat::First).is_defeated() {
            Some(Seat::Second)
        } else if self.player(Seat::Second).is_defeated() {
            Some(Seat::First)
        } else {
            None
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.players {
            writeln!(f, "{}: {}", state.seat(), state)?;
        }
        write!(f, "Actions:")?;
        if self.action_log.is_empty() {
            return write!(f, "\n  (none)");
        }
        for (idx, record) in self.action_log.iter().enumerate() {
            write!(f, "\n  {}. {}", idx + 1, record)?;
        }
        Ok(())
    }
}
