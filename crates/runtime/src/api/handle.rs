//! Cloneable façade for issuing commands to the battle worker.
//!
//! [`BattleHandle`] hides channel plumbing and offers async helpers for
//! driving a battle turn by turn or streaming its events.
use tokio::sync::{broadcast, mpsc, oneshot, watch};

use duel_core::{TurnOutcome, Wizard};

use super::errors::{Result, RuntimeError};
use super::turn::{BattleView, TicketId, TurnPreparation};
use crate::events::{BattleEvent, BattleLogEntry};
use crate::workers::Command;

/// Client-facing handle to interact with the battle worker.
#[derive(Clone)]
pub struct BattleHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<BattleEvent>,
    generation_rx: watch::Receiver<u64>,
}

impl BattleHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<BattleEvent>,
        generation_rx: watch::Receiver<u64>,
    ) -> Self {
        Self {
            command_tx,
            event_tx,
            generation_rx,
        }
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Start a new battle, cancelling any battle in progress.
    ///
    /// Returns the new battle generation.
    pub async fn start(&self, first: Wizard, second: Wizard) -> Result<u64> {
        self.request(|reply| Command::Start {
            first,
            second,
            reply,
        })
        .await
    }

    /// Restart the current battle with the same wizards.
    ///
    /// Any outstanding decision ticket becomes stale.
    pub async fn reset(&self) -> Result<u64> {
        self.request(|reply| Command::Reset { reply }).await?
    }

    /// Prepare the acting seat's turn.
    pub async fn prepare_turn(&self) -> Result<TurnPreparation> {
        self.request(|reply| Command::PrepareTurn { reply }).await?
    }

    /// Resolve the 1-based affordable action `index` for `ticket`'s seat.
    pub async fn execute(&self, ticket: TicketId, index: i64) -> Result<TurnOutcome> {
        self.request(|reply| Command::Execute {
            ticket,
            index,
            reply,
        })
        .await?
    }

    /// Query the current battle (read-only snapshot).
    pub async fn query_state(&self) -> Result<BattleView> {
        self.request(|reply| Command::QueryState { reply }).await?
    }

    /// Append a log entry to the battle of `generation`.
    ///
    /// Entries for a battle that has since been reset are dropped.
    pub async fn log(&self, generation: u64, entry: BattleLogEntry) -> Result<()> {
        self.command_tx
            .send(Command::Log { generation, entry })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Subscribe to battle events.
    pub fn subscribe(&self) -> broadcast::Receiver<BattleEvent> {
        self.event_tx.subscribe()
    }

    /// Generation of the battle currently held by the worker.
    pub fn generation(&self) -> u64 {
        *self.generation_rx.borrow()
    }

    /// Receiver notified whenever a battle is started or reset.
    pub fn watch_generation(&self) -> watch::Receiver<u64> {
        self.generation_rx.clone()
    }
}
