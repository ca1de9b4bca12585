//! Battle log entries and the events broadcast to subscribers.
//!
//! The worker appends every [`BattleLogEntry`] to the battle log and
//! publishes it as [`BattleEvent::Log`] without blocking on consumers.

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

use duel_core::{RoundEnd, Seat};

/// Kind tag of a battle log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogKind {
    PlayerAction,
    TurnStart,
    TurnEnd,
    Winner,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLogEntry {
    #[serde(rename = "type")]
    pub kind: LogKind,
    pub message: String,
}

impl BattleLogEntry {
    pub fn new(kind: LogKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn turn_start(round: u32) -> Self {
        Self::new(LogKind::TurnStart, format!("Turn {round}"))
    }

    /// `End turn n, A gets x mana, B gets y mana`, names in seat order.
    pub fn turn_end(round_end: &RoundEnd, names: [&str; 2]) -> Self {
        let [first, second] = round_end.mana_gained;
        Self::new(
            LogKind::TurnEnd,
            format!(
                "End turn {}, {} gets {first} mana, {} gets {second} mana",
                round_end.round, names[0], names[1]
            ),
        )
    }

    pub fn winner(name: &str) -> Self {
        Self::new(LogKind::Winner, format!("{name} wins!"))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogKind::Error, message)
    }
}

impl std::fmt::Display for BattleLogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Events emitted by the battle worker.
#[derive(Clone, Debug, PartialEq)]
pub enum BattleEvent {
    /// A battle was (re)started; `seats` holds wizard names in seat order.
    Started {
        generation: u64,
        seats: [String; 2],
    },
    /// A line was appended to the battle log.
    Log(BattleLogEntry),
    /// A seat was asked to decide.
    DecisionRequested {
        generation: u64,
        ticket: u64,
        seat: Seat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_log_format() {
        let round_end = RoundEnd {
            round: 3,
            mana_gained: [4, 0],
        };
        assert_eq!(
            BattleLogEntry::turn_end(&round_end, ["Ignis", "Nerissa"]).message,
            "End turn 3, Ignis gets 4 mana, Nerissa gets 0 mana"
        );
        assert_eq!(BattleLogEntry::turn_start(2).message, "Turn 2");
        assert_eq!(BattleLogEntry::winner("Ignis").message, "Ignis wins!");
        assert_eq!(LogKind::PlayerAction.to_string(), "PLAYER_ACTION");
        assert_eq!(
            BattleLogEntry::error("boom").to_string(),
            "[ERROR] boom"
        );
    }
}
