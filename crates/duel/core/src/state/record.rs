use core::fmt;

use super::Seat;
use crate::action::{ActionTarget, ActionType};
use crate::element::Element;

/// How a logged action turned out.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordOutcome {
    Failed,
    Healed(u32),
    RaisedShield(Element),
    Dealt(u32),
    Buff(String),
    Debuff(String),
    Passed,
}

impl fmt::Display for RecordOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed => f.write_str("Failed :("),
            Self::Healed(amount) => write!(f, "Healed {amount}"),
            Self::RaisedShield(element) => write!(f, "Raised {element} shield"),
            Self::Dealt(amount) => write!(f, "Dealt {amount}"),
            Self::Buff(name) => write!(f, "Buff {name}"),
            Self::Debuff(name) => write!(f, "Debuff {name}"),
            Self::Passed => f.write_str("Passed"),
        }
    }
}

/// One entry of the battle's action log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRecord {
    pub actor: Seat,
    pub action_type: ActionType,
    pub target: ActionTarget,
    pub outcome: RecordOutcome,
}

impl fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}) | {}",
            self.actor, self.action_type, self.target, self.outcome
        )
    }
}
