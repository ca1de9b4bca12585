//! High-level battle orchestrator.
//!
//! The duel owns the battle worker, wires up command/event channels, and
//! drives turns by asking each seat's [`DecisionProvider`] for an action.

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use duel_core::{PcgRng, RngOracle, Seat, TurnOutcome, Wizard};

use crate::api::turn::TurnPreparation;
use crate::api::{BattleHandle, DecisionProvider, Result, RuntimeError};
use crate::events::{BattleEvent, BattleLogEntry};
use crate::rng::SystemRng;
use crate::workers::{BattleWorker, Command};

/// Configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct DuelConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Upper bound on [`Duel::run`] steps, including rejected ones.
    pub max_steps: usize,
    /// Seed for a reproducible [`PcgRng`] when no RNG is supplied.
    pub seed: Option<u64>,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
            max_steps: 1_000,
            seed: None,
        }
    }
}

/// What a single [`Duel::step`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// The acting seat resolved an action.
    Acted(TurnOutcome),
    /// The acting seat could afford nothing and was skipped.
    Skipped(TurnOutcome),
    /// The battle already has a winner.
    Finished { winner: Seat },
    /// The battle was reset while the provider was deciding; its answer was
    /// discarded.
    Cancelled,
    /// The provider failed or picked an invalid index. Nothing changed; the
    /// same seat acts again on the next step.
    Rejected { reason: String },
}

/// Main orchestrator for one battle at a time.
///
/// Design: the duel owns the worker and the providers.
/// [`BattleHandle`] provides a cloneable façade for clients.
pub struct Duel {
    handle: BattleHandle,
    providers: [Option<Box<dyn DecisionProvider>>; 2],
    config: DuelConfig,
    worker_handle: JoinHandle<()>,
}

impl Duel {
    /// Create a new duel builder
    pub fn builder() -> DuelBuilder {
        DuelBuilder::new()
    }

    /// Get a cloneable handle to the battle worker
    pub fn handle(&self) -> BattleHandle {
        self.handle.clone()
    }

    /// Subscribe to battle events
    pub fn subscribe(&self) -> broadcast::Receiver<BattleEvent> {
        self.handle.subscribe()
    }

    /// Start a new battle; returns its generation.
    pub async fn start(&self, first: Wizard, second: Wizard) -> Result<u64> {
        self.handle.start(first, second).await
    }

    /// Play one turn.
    ///
    /// Requires a provider for the acting seat. At most one decision is in
    /// flight per duel; a reset while it is pending yields
    /// [`StepOutcome::Cancelled`] and the late answer is never applied.
    pub async fn step(&self) -> Result<StepOutcome> {
        let ticket = match self.handle.prepare_turn().await? {
            TurnPreparation::Finished { winner } => return Ok(StepOutcome::Finished { winner }),
            TurnPreparation::Skipped(outcome) => return Ok(StepOutcome::Skipped(outcome)),
            TurnPreparation::Decide(ticket) => ticket,
        };

        let provider = self.providers[ticket.seat.index()]
            .as_deref()
            .ok_or(RuntimeError::ProviderNotSet { seat: ticket.seat })?;

        let generation = ticket.id.generation;
        let mut generation_rx = self.handle.watch_generation();
        let request = ticket.request();

        let decision = tokio::select! {
            decision = provider.decide(&request) => decision,
            _ = generation_changed(&mut generation_rx, generation) => {
                info!(generation, seat = %ticket.seat, "decision cancelled by reset");
                return Ok(StepOutcome::Cancelled);
            }
        };

        let index = match decision.and_then(|response| {
            debug!(seat = %ticket.seat, "justification: {}", response.justification);
            response.index()
        }) {
            Ok(index) => index,
            Err(e) => {
                warn!(seat = %ticket.seat, "decision failed: {e}");
                self.handle
                    .log(generation, BattleLogEntry::error(e.to_string()))
                    .await?;
                return Ok(StepOutcome::Rejected {
                    reason: e.to_string(),
                });
            }
        };

        match self.handle.execute(ticket.id, index).await {
            Ok(outcome) => Ok(StepOutcome::Acted(outcome)),
            Err(RuntimeError::StaleTicket { .. }) => Ok(StepOutcome::Cancelled),
            Err(RuntimeError::Selection(e)) => {
                warn!(seat = %ticket.seat, "{e}");
                Ok(StepOutcome::Rejected {
                    reason: e.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Step until the battle has a winner or `max_steps` is reached.
    ///
    /// Returns the winner, if any.
    pub async fn run(&self) -> Result<Option<Seat>> {
        for _ in 0..self.config.max_steps {
            match self.step().await? {
                StepOutcome::Acted(TurnOutcome {
                    winner: Some(winner),
                    ..
                })
                | StepOutcome::Finished { winner } => return Ok(Some(winner)),
                StepOutcome::Cancelled => return Ok(None),
                _ => {}
            }
        }
        warn!(max_steps = self.config.max_steps, "battle stopped at step limit");
        Ok(None)
    }

    /// Set the decision provider for `seat`
    pub fn set_provider(&mut self, seat: Seat, provider: impl DecisionProvider + 'static) {
        self.providers[seat.index()] = Some(Box::new(provider));
    }

    /// Shutdown the duel gracefully
    ///
    /// Waits for the worker, which stops once every [`BattleHandle`] clone
    /// has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Resolves once the published generation differs from `generation`.
async fn generation_changed(rx: &mut watch::Receiver<u64>, generation: u64) {
    if rx.wait_for(|current| *current != generation).await.is_err() {
        // Worker gone: never cancel, the execute call reports the failure.
        std::future::pending::<()>().await;
    }
}

/// Builder for [`Duel`] with flexible configuration.
pub struct DuelBuilder {
    config: DuelConfig,
    rng: Option<Box<dyn RngOracle>>,
    providers: [Option<Box<dyn DecisionProvider>>; 2],
}

impl DuelBuilder {
    fn new() -> Self {
        Self {
            config: DuelConfig::default(),
            rng: None,
            providers: [None, None],
        }
    }

    /// Override duel configuration
    pub fn config(mut self, config: DuelConfig) -> Self {
        self.config = config;
        self
    }

    /// Randomness source for seat shuffling and rolls.
    ///
    /// Defaults to [`PcgRng`] when [`DuelConfig::seed`] is set, otherwise
    /// [`SystemRng`].
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Set the decision provider for `seat`
    pub fn provider(mut self, seat: Seat, provider: impl DecisionProvider + 'static) -> Self {
        self.providers[seat.index()] = Some(Box::new(provider));
        self
    }

    /// Build the duel and spawn its worker.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn build(self) -> Duel {
        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (event_tx, _event_rx) =
            broadcast::channel::<BattleEvent>(self.config.event_buffer_size);
        let (generation_tx, generation_rx) = watch::channel(0);

        let handle = BattleHandle::new(command_tx, event_tx.clone(), generation_rx);

        let seed = self.config.seed;
        let rng = self.rng.unwrap_or_else(|| match seed {
            Some(seed) => Box::new(PcgRng::new(seed)),
            None => Box::new(SystemRng::from_entropy()),
        });
        let worker = BattleWorker::new(rng, command_rx, event_tx, generation_tx);

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Duel {
            handle,
            providers: self.providers,
            config: self.config,
            worker_handle,
        }
    }
}
