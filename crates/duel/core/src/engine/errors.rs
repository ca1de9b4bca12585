//! Error types for the action execution pipeline.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Seat;

/// Contract violations surfaced while executing an action.
///
/// Accuracy failures are not errors; they resolve normally with a failure
/// announcement.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("{seat} has {available} mana but the action costs {cost}")]
    InsufficientMana {
        seat: Seat,
        cost: u32,
        available: u32,
    },

    #[error("it is {current}'s turn, not {seat}'s")]
    NotCurrentActor { seat: Seat, current: Seat },

    #[error("`{action}` is not in {seat}'s action catalog")]
    ActionNotInCatalog { seat: Seat, action: String },

    #[error("{seat} has {available} affordable actions and cannot skip")]
    HasAffordableActions { seat: Seat, available: usize },

    #[error("the battle is over; {winner} already won")]
    BattleOver { winner: Seat },
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientMana { .. }
            | Self::NotCurrentActor { .. }
            | Self::ActionNotInCatalog { .. }
            | Self::HasAffordableActions { .. } => ErrorSeverity::Validation,
            Self::BattleOver { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientMana { .. } => "INSUFFICIENT_MANA",
            Self::NotCurrentActor { .. } => "NOT_CURRENT_ACTOR",
            Self::ActionNotInCatalog { .. } => "ACTION_NOT_IN_CATALOG",
            Self::HasAffordableActions { .. } => "HAS_AFFORDABLE_ACTIONS",
            Self::BattleOver { .. } => "BATTLE_OVER",
        }
    }
}
