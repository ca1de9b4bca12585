//! Battle worker that owns the authoritative [`duel_core::GameState`].
//!
//! Receives commands from [`BattleHandle`](crate::api::BattleHandle), runs
//! turns through [`duel_core::GameEngine`], keeps the battle log and
//! publishes every log line to subscribers.

use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use duel_core::{GameEngine, GameState, RngOracle, Seat, TurnOutcome, Wizard};

use crate::api::turn::{BattleView, DecisionTicket, TicketId, TurnPreparation};
use crate::api::{Result, RuntimeError};
use crate::events::{BattleEvent, BattleLogEntry, LogKind};

/// Commands that can be sent to the battle worker.
pub enum Command {
    /// Start a new battle between two wizards. Replies with the new generation.
    Start {
        first: Wizard,
        second: Wizard,
        reply: oneshot::Sender<u64>,
    },
    /// Restart the current battle with the same wizards.
    Reset { reply: oneshot::Sender<Result<u64>> },
    /// Skip a seat with nothing affordable, or issue a decision ticket.
    PrepareTurn {
        reply: oneshot::Sender<Result<TurnPreparation>>,
    },
    /// Resolve the ticket's seat's 1-based affordable action `index`.
    Execute {
        ticket: TicketId,
        index: i64,
        reply: oneshot::Sender<Result<TurnOutcome>>,
    },
    /// Query the battle (read-only).
    QueryState {
        reply: oneshot::Sender<Result<BattleView>>,
    },
    /// Append a log entry on behalf of `generation`; dropped if stale.
    Log {
        generation: u64,
        entry: BattleLogEntry,
    },
}

struct Battle {
    /// Wizards as passed to `Start`, before seat assignment.
    roster: [Wizard; 2],
    state: GameState,
}

/// Battle log plus the broadcast side of the event channel.
struct BattleLog {
    entries: Vec<BattleLogEntry>,
    event_tx: broadcast::Sender<BattleEvent>,
}

impl BattleLog {
    fn push(&mut self, entry: BattleLogEntry) {
        debug!(kind = %entry.kind, "{}", entry.message);
        self.entries.push(entry.clone());
        self.publish(BattleEvent::Log(entry));
    }

    fn publish(&self, event: BattleEvent) {
        // No subscribers is fine.
        let _ = self.event_tx.send(event);
    }
}

/// Background task that processes battle commands.
///
/// The worker is the single writer of battle state: every resolution runs
/// inside [`handle_command`](Self::handle_command), one command at a time.
/// Decision making happens outside, against the ticket it hands out.
pub struct BattleWorker {
    battle: Option<Battle>,
    rng: Box<dyn RngOracle>,
    generation: u64,
    generation_tx: watch::Sender<u64>,
    next_ticket: u64,
    outstanding: Option<TicketId>,
    log: BattleLog,
    command_rx: mpsc::Receiver<Command>,
}

impl BattleWorker {
    pub fn new(
        rng: Box<dyn RngOracle>,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<BattleEvent>,
        generation_tx: watch::Sender<u64>,
    ) -> Self {
        let generation = *generation_tx.borrow();
        Self {
            battle: None,
            rng,
            generation,
            generation_tx,
            next_ticket: 0,
            outstanding: None,
            log: BattleLog {
                entries: Vec::new(),
                event_tx,
            },
            command_rx,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                else => break,
            }
        }
        debug!("BattleWorker stopped (all handles dropped)");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Start {
                first,
                second,
                reply,
            } => {
                let generation = self.start(first, second);
                if reply.send(generation).is_err() {
                    debug!("Start reply channel closed (caller dropped)");
                }
            }
            Command::Reset { reply } => {
                let result = self.reset();
                if reply.send(result).is_err() {
                    debug!("Reset reply channel closed (caller dropped)");
                }
            }
            Command::PrepareTurn { reply } => {
                let result = self.prepare_turn();
                if reply.send(result).is_err() {
                    debug!("PrepareTurn reply channel closed (caller dropped)");
                }
            }
            Command::Execute {
                ticket,
                index,
                reply,
            } => {
                let result = self.execute(ticket, index);
                if reply.send(result).is_err() {
                    debug!("Execute reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                let view = self.battle.as_ref().map(|battle| BattleView {
                    generation: self.generation,
                    state: battle.state.clone(),
                    log: self.log.entries.clone(),
                });
                if reply.send(view.ok_or(RuntimeError::BattleNotStarted)).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::Log { generation, entry } => {
                if generation == self.generation {
                    self.log.push(entry);
                } else {
                    debug!(
                        generation,
                        current = self.generation,
                        "dropping log entry from a previous battle"
                    );
                }
            }
        }
    }

    fn start(&mut self, first: Wizard, second: Wizard) -> u64 {
        let roster = [first.clone(), second.clone()];
        let state = GameState::initialize(first, second, self.rng.as_mut());

        self.generation += 1;
        self.generation_tx.send_replace(self.generation);
        self.outstanding = None;
        self.log.entries.clear();

        let seats = Seat::BOTH.map(|seat| state.wizard(seat).name.clone());
        info!(
            generation = self.generation,
            "battle started: {} vs {}", seats[0], seats[1]
        );
        self.log.publish(BattleEvent::Started {
            generation: self.generation,
            seats,
        });

        self.battle = Some(Battle { roster, state });
        self.generation
    }

    fn reset(&mut self) -> Result<u64> {
        let [first, second] = self
            .battle
            .as_ref()
            .map(|battle| battle.roster.clone())
            .ok_or(RuntimeError::BattleNotStarted)?;
        if let Some(ticket) = self.outstanding {
            info!(ticket = ticket.ticket, "reset cancels outstanding decision");
        }
        Ok(self.start(first, second))
    }

    fn prepare_turn(&mut self) -> Result<TurnPreparation> {
        let battle = self.battle.as_mut().ok_or(RuntimeError::BattleNotStarted)?;

        if let Some(winner) = battle.state.get_winner() {
            return Ok(TurnPreparation::Finished { winner });
        }

        let seat = battle.state.turn.current;
        if battle.state.affordable_actions(seat).is_empty() {
            self.log
                .push(BattleLogEntry::error("No valid actions available. Skipping turn."));
            self.outstanding = None;

            let outcome = GameEngine::new(&mut battle.state).skip_turn()?;
            if let Some(round_end) = &outcome.round_end {
                self.log
                    .push(BattleLogEntry::turn_end(round_end, seat_names(&battle.state)));
            }
            return Ok(TurnPreparation::Skipped(outcome));
        }

        self.next_ticket += 1;
        let id = TicketId {
            generation: self.generation,
            ticket: self.next_ticket,
        };
        if let Some(previous) = self.outstanding.replace(id) {
            debug!(
                previous = previous.ticket,
                current = id.ticket,
                "superseding outstanding decision ticket"
            );
        }

        debug!(
            generation = id.generation,
            ticket = id.ticket,
            %seat,
            "decision requested"
        );
        self.log.publish(BattleEvent::DecisionRequested {
            generation: id.generation,
            ticket: id.ticket,
            seat,
        });

        Ok(TurnPreparation::Decide(DecisionTicket {
            id,
            seat,
            context: battle.state.compact_battle_context(seat),
            wizard: battle.state.wizard(seat).clone(),
        }))
    }

    fn execute(&mut self, ticket: TicketId, index: i64) -> Result<TurnOutcome> {
        if self.outstanding != Some(ticket) {
            warn!(
                generation = ticket.generation,
                ticket = ticket.ticket,
                "rejecting stale decision ticket"
            );
            return Err(RuntimeError::StaleTicket {
                generation: ticket.generation,
                ticket: ticket.ticket,
            });
        }
        let battle = self.battle.as_mut().ok_or(RuntimeError::BattleNotStarted)?;

        let seat = battle.state.turn.current;
        let round = battle.state.turn.round;

        let action = match battle.state.select_affordable(seat, index) {
            Ok(action) => action,
            Err(e) => {
                self.log.push(BattleLogEntry::error(e.to_string()));
                return Err(e.into());
            }
        };

        let outcome =
            match GameEngine::new(&mut battle.state).execute(seat, &action, self.rng.as_mut()) {
                Ok(outcome) => outcome,
                Err(e) => {
                    self.log
                        .push(BattleLogEntry::error(format!("Action failed: {e}")));
                    return Err(e.into());
                }
            };
        self.outstanding = None;

        if seat == Seat::First {
            self.log.push(BattleLogEntry::turn_start(round));
        }
        if let Some(resolved) = &outcome.action {
            self.log
                .push(BattleLogEntry::new(LogKind::PlayerAction, &resolved.announcement));
        }
        if let Some(winner) = outcome.winner {
            let name = &battle.state.wizard(winner).name;
            info!(generation = self.generation, "{name} wins");
            self.log.push(BattleLogEntry::winner(name));
        }
        if let Some(round_end) = &outcome.round_end {
            self.log
                .push(BattleLogEntry::turn_end(round_end, seat_names(&battle.state)));
        }

        Ok(outcome)
    }
}

fn seat_names(state: &GameState) -> [&str; 2] {
    Seat::BOTH.map(|seat| state.wizard(seat).name.as_str())
}
