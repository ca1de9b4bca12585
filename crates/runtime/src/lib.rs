//! Runtime orchestration for two-wizard battles.
//!
//! This crate wires together the decision provider abstraction, the battle
//! worker and the event stream into a cohesive runtime API. Consumers embed
//! [`Duel`] to drive turns, subscribe to the battle log, and interact with the
//! battle through [`BattleHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] defines battle log entries and broadcast events
//! - [`prompts`] renders requests for a remote decision service
//! - [`providers`] bundles local decision providers
//! - `workers` keeps the background task internal to the crate
pub mod api;
pub mod events;
pub mod prompts;
pub mod providers;
pub mod rng;
pub mod runtime;

mod workers;

pub use api::turn::{BattleView, DecisionTicket, TicketId, TurnPreparation};
pub use api::{
    BattleHandle, DecisionError, DecisionProvider, DecisionRequest, DecisionResponse, Result,
    RuntimeError, parse_action_index,
};
pub use events::{BattleEvent, BattleLogEntry, LogKind};
pub use providers::{HeuristicProvider, PassProvider, ScriptedProvider};
pub use rng::SystemRng;
pub use runtime::{Duel, DuelBuilder, DuelConfig, StepOutcome};
