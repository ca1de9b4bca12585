//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, the engine, and decision
//! providers so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use duel_core::{ErrorSeverity, ExecuteError, GameError, Seat, SelectionError};

use super::providers::DecisionError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{seat} decision provider not set")]
    ProviderNotSet { seat: Seat },

    #[error("battle worker command channel closed")]
    CommandChannelClosed,

    #[error("battle worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("battle worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("no battle has been started")]
    BattleNotStarted,

    #[error("decision ticket {ticket} (generation {generation}) is no longer current")]
    StaleTicket { generation: u64, ticket: u64 },

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Decision(#[from] DecisionError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Execute(e) => e.severity(),
            Self::Selection(e) => e.severity(),
            Self::Decision(_) | Self::StaleTicket { .. } => ErrorSeverity::Recoverable,
            Self::ProviderNotSet { .. } | Self::BattleNotStarted => ErrorSeverity::Validation,
            Self::CommandChannelClosed | Self::ReplyChannelClosed(_) | Self::WorkerJoin(_) => {
                ErrorSeverity::Fatal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ProviderNotSet { .. } => "PROVIDER_NOT_SET",
            Self::CommandChannelClosed => "COMMAND_CHANNEL_CLOSED",
            Self::ReplyChannelClosed(_) => "REPLY_CHANNEL_CLOSED",
            Self::WorkerJoin(_) => "WORKER_JOIN",
            Self::BattleNotStarted => "BATTLE_NOT_STARTED",
            Self::StaleTicket { .. } => "STALE_TICKET",
            Self::Execute(e) => e.error_code(),
            Self::Selection(e) => e.error_code(),
            Self::Decision(e) => e.error_code(),
        }
    }
}
