//! Turn hand-off types exchanged between the battle worker and its callers.

use duel_core::{BattleContext, GameState, Seat, TurnOutcome, Wizard};

use super::providers::DecisionRequest;
use crate::events::BattleLogEntry;

/// Identifies one decision request within one battle generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TicketId {
    pub generation: u64,
    pub ticket: u64,
}

/// An outstanding request for the acting seat to choose an action.
///
/// Only the most recently issued ticket of the current generation can be
/// executed.
#[derive(Clone, Debug, PartialEq)]
pub struct DecisionTicket {
    pub id: TicketId,
    pub seat: Seat,
    pub context: BattleContext,
    pub wizard: Wizard,
}

impl DecisionTicket {
    pub fn request(&self) -> DecisionRequest {
        DecisionRequest::new(self.seat, self.wizard.clone(), self.context.clone())
    }
}

/// Result of asking the worker to prepare the next turn.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnPreparation {
    /// The acting seat must decide.
    Decide(DecisionTicket),
    /// The acting seat had no affordable action and its turn was skipped.
    Skipped(TurnOutcome),
    /// The battle already has a winner.
    Finished { winner: Seat },
}

/// Read-only copy of the worker's battle.
#[derive(Clone, Debug, PartialEq)]
pub struct BattleView {
    pub generation: u64,
    pub state: GameState,
    pub log: Vec<BattleLogEntry>,
}

impl BattleView {
    pub fn winner(&self) -> Option<Seat> {
        self.state.get_winner()
    }
}
