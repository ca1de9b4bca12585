//! Deterministic combat engine for two-wizard elemental duels.
//!
//! The crate owns the authoritative battle state and everything needed to
//! advance it: the element chart, action formulas, status-effect lifecycle,
//! the turn protocol and the decision-support queries that summarize a
//! battle for an external action-selection collaborator.
//!
//! Every random sample is drawn through an injected [`RngOracle`], so battles
//! can be replayed exactly with [`PcgRng`] or scripted with [`SequenceRng`].
pub mod action;
pub mod combat;
pub mod config;
pub mod element;
pub mod engine;
pub mod error;
pub mod intel;
pub mod rng;
pub mod state;
pub mod wizard;

pub use action::{
    Action, ActionCard, ActionOutcome, ActionTarget, ActionType, Defend, Heal, Resolution, Spell,
    SpellType, UnknownSpellType,
};
pub use combat::{calculate_damage, shield_multiplier};
pub use config::BattleConfig;
pub use element::{Element, UnknownElement};
pub use engine::{ExecuteError, GameEngine, RoundEnd, TurnOutcome};
pub use error::{ErrorSeverity, GameError};
pub use intel::{
    ActionSummary, ActorInfo, BattleContext, DefensiveLevel, EffectivenessLevel, EnemyInfo,
    HealthLevel, ManaLevel, OffensiveLevel, SelectionError,
};
pub use rng::{PcgRng, RngOracle, SequenceRng};
pub use state::{
    ActionRecord, EffectGroup, GameState, Player, PlayerState, RecordOutcome, Seat, SeatError,
    StatusEffect, StatusEffectKind, StatusEffects, TurnState,
};
pub use wizard::{Wizard, WizardStats};
