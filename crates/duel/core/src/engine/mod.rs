//! Turn protocol and action execution.
//!
//! [`GameEngine`] is the authoritative reducer for [`GameState`]. It layers
//! the turn protocol on top of [`GameState::perform_action`]: only the current
//! seat may act, only with an action from its own catalog, and once seat 1 has
//! acted (or been skipped) both seats gain mana and the round advances.

mod errors;

pub use errors::ExecuteError;

use crate::action::{Action, ActionOutcome};
use crate::rng::RngOracle;
use crate::state::{GameState, Seat};

/// Mana bookkeeping performed when a round closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundEnd {
    /// The round that just closed.
    pub round: u32,
    /// Mana actually gained by each seat after the cap, indexed by seat.
    pub mana_gained: [u32; 2],
}

/// Everything that happened during one seat's turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    pub actor: Seat,
    /// `None` when the turn was skipped.
    pub action: Option<ActionOutcome>,
    pub round_end: Option<RoundEnd>,
    pub winner: Option<Seat>,
}

pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Resolves `action` for `seat` and advances the turn.
    ///
    /// Validation happens before any mutation: the battle must not be over,
    /// `seat` must be the current actor, the action must come from the
    /// actor's catalog and be affordable.
    pub fn execute(
        &mut self,
        seat: Seat,
        action: &Action,
        rng: &mut dyn RngOracle,
    ) -> Result<TurnOutcome, ExecuteError> {
        self.validate_actor(seat)?;

        if !self.state.wizard(seat).all_actions().contains(action) {
            return Err(ExecuteError::ActionNotInCatalog {
                seat,
                action: action.label(),
            });
        }

        let outcome = self.state.perform_action(seat, action, rng)?;

        let winner = self.state.get_winner();
        let round_end = match winner {
            Some(_) => None,
            None => self.end_turn(seat),
        };

        Ok(TurnOutcome {
            actor: seat,
            action: Some(outcome),
            round_end,
            winner,
        })
    }

    /// Skips the current seat's turn.
    ///
    /// Only a seat with no affordable action may be skipped. Skipping seat 1
    /// still closes the round with its mana gain.
    pub fn skip_turn(&mut self) -> Result<TurnOutcome, ExecuteError> {
        let seat = self.state.turn.current;
        self.validate_actor(seat)?;
        let available = self.state.affordable_actions(seat).len();
        if available > 0 {
            return Err(ExecuteError::HasAffordableActions { seat, available });
        }
        let round_end = self.end_turn(seat);
        Ok(TurnOutcome {
            actor: seat,
            action: None,
            round_end,
            winner: None,
        })
    }

    fn validate_actor(&self, seat: Seat) -> Result<(), ExecuteError> {
        if let Some(winner) = self.state.get_winner() {
            return Err(ExecuteError::BattleOver { winner });
        }
        let current = self.state.turn.current;
        if seat != current {
            return Err(ExecuteError::NotCurrentActor { seat, current });
        }
        Ok(())
    }

    fn end_turn(&mut self, seat: Seat) -> Option<RoundEnd> {
        let round = self.state.turn.round;
        let round_end = (seat == Seat::Second).then(|| RoundEnd {
            round,
            mana_gained: self.state.increment_mana(),
        });
        self.state.turn.advance();
        round_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Defend, Spell, SpellType};
    use crate::element::Element;
    use crate::error::GameError;
    use crate::rng::SequenceRng;
    use crate::wizard::{Wizard, WizardStats};

    fn battle() -> GameState {
        let spells = vec![Spell::new("Flare", SpellType::Damage, "", Element::Fire, 0.0)];
        let alpha = Wizard::new(
            "Alpha",
            Element::Fire,
            Element::Life,
            WizardStats::default(),
            spells.clone(),
            "",
        );
        let beta = Wizard::new(
            "Beta",
            Element::Ice,
            Element::Storm,
            WizardStats::default(),
            spells,
            "",
        );
        GameState::initialize(alpha, beta, &mut SequenceRng::new(vec![0.9, 0.5, 0.5, 0.5, 0.5]))
    }

    #[test]
    fn full_round_grants_mana_and_advances() {
        let mut state = battle();
        let mut rng = SequenceRng::constant(0.0);
        let mut engine = GameEngine::new(&mut state);

        let first = engine.execute(Seat::First, &Action::Pass, &mut rng).expect("valid");
        assert_eq!(first.round_end, None);

        let second = engine.execute(Seat::Second, &Action::Pass, &mut rng).expect("valid");
        assert_eq!(
            second.round_end,
            Some(RoundEnd {
                round: 1,
                mana_gained: [2, 2]
            })
        );
        assert_eq!(state.turn.round, 2);
        assert_eq!(state.turn.current, Seat::First);
        assert_eq!(state.player(Seat::First).current_mana(), 12);
    }

    #[test]
    fn out_of_turn_is_rejected() {
        let mut state = battle();
        let before = state.clone();
        let err = GameEngine::new(&mut state)
            .execute(Seat::Second, &Action::Pass, &mut SequenceRng::constant(0.0))
            .unwrap_err();
        assert_eq!(
            err,
            ExecuteError::NotCurrentActor {
                seat: Seat::Second,
                current: Seat::First
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn foreign_action_is_rejected() {
        let mut state = battle();
        let err = GameEngine::new(&mut state)
            .execute(
                Seat::First,
                &Action::Defend(Defend::new(Element::Myth)),
                &mut SequenceRng::constant(0.0),
            )
            .unwrap_err();
        assert!(matches!(err, ExecuteError::ActionNotInCatalog { .. }));
    }

    #[test]
    fn skip_rejected_while_actions_are_affordable() {
        let mut state = battle();
        let before = state.clone();
        let available = state.affordable_actions(Seat::First).len();
        assert!(available > 0);

        let err = GameEngine::new(&mut state).skip_turn().unwrap_err();
        assert_eq!(
            err,
            ExecuteError::HasAffordableActions {
                seat: Seat::First,
                available
            }
        );
        assert_eq!(err.error_code(), "HAS_AFFORDABLE_ACTIONS");
        assert_eq!(state, before);

        // Pass costs nothing, so even a seat drained of mana cannot skip.
        state.player_mut(Seat::First).set_mana(0);
        let err = GameEngine::new(&mut state).skip_turn().unwrap_err();
        assert!(matches!(
            err,
            ExecuteError::HasAffordableActions { available: 1, .. }
        ));
        assert_eq!(state.turn.current, Seat::First);
        assert_eq!(state.turn.round, 1);
    }

    #[test]
    fn round_closes_only_after_second_seat() {
        let mut state = battle();
        let mut engine = GameEngine::new(&mut state);

        assert_eq!(engine.end_turn(Seat::First), None);
        assert_eq!(
            engine.end_turn(Seat::Second),
            Some(RoundEnd {
                round: 1,
                mana_gained: [2, 2]
            })
        );
        assert_eq!(state.turn.round, 2);
        assert_eq!(state.turn.current, Seat::First);
        assert_eq!(state.player(Seat::Second).current_mana(), 12);
    }

    #[test]
    fn lethal_hit_ends_the_battle() {
        let mut state = battle();
        state.player_mut(Seat::Second).set_health(50);
        let flare = Action::Spell(Spell::new("Flare", SpellType::Damage, "", Element::Fire, 0.0));
        let mut rng = SequenceRng::new(vec![0.0, 0.5]);
        let mut engine = GameEngine::new(&mut state);

        let outcome = engine.execute(Seat::First, &flare, &mut rng).expect("valid");
        assert_eq!(outcome.winner, Some(Seat::First));
        assert_eq!(outcome.round_end, None);

        let err = engine.skip_turn().unwrap_err();
        assert_eq!(err, ExecuteError::BattleOver { winner: Seat::First });
    }
}
