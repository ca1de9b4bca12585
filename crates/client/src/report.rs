//! Console output for a running battle.

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::warn;

use duel_core::{GameState, Seat};
use duel_runtime::{BattleEvent, LogKind};

/// Prints log events until the event channel closes.
pub fn spawn_printer(mut events: broadcast::Receiver<BattleEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(BattleEvent::Started { seats, .. }) => {
                    println!("{} vs {}\n", seats[0], seats[1]);
                }
                Ok(BattleEvent::Log(entry)) => match entry.kind {
                    LogKind::TurnStart => println!("== {} ==", entry.message),
                    LogKind::TurnEnd => println!("{}\n", entry.message),
                    LogKind::Error => println!("! {}", entry.message),
                    LogKind::PlayerAction | LogKind::Winner => println!("{}", entry.message),
                },
                Ok(BattleEvent::DecisionRequested { .. }) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!("battle printer lagged; {skipped} events skipped");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

/// Final summary printed after the battle ends.
pub fn summary(state: &GameState, snapshot: bool) -> String {
    let mut out = format!("{state}\n");
    if snapshot {
        for seat in Seat::BOTH {
            out.push_str(&format!("\n--- {seat} view ---\n{}\n", state.battle_snapshot(seat)));
        }
    }
    out
}
