//! Worker task that backs the duel orchestration.
//!
//! The battle worker is the single owner of battle state; everything else
//! talks to it through commands.

mod battle;

pub use battle::{BattleWorker, Command};
