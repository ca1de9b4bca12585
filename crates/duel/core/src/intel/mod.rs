//! Decision-support queries.
//!
//! Read-only summaries of a [`GameState`](crate::GameState) consumed by the
//! external action-selection service: coarse tier labels for health, mana,
//! offense and defense, per-action hints (redundancy, lethality, elemental
//! effectiveness) and the numbered affordable-action list whose 1-based
//! positions the service's reply must refer to.

mod context;
mod queries;

pub use context::{ActionSummary, ActorInfo, BattleContext, EnemyInfo, SelectionError};

use strum::{Display, IntoStaticStr};

/// How close a player is to defeat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthLevel {
    /// An enemy damage spell could finish this player right now.
    #[strum(serialize = "Extremely low")]
    #[cfg_attr(feature = "serde", serde(rename = "Extremely low"))]
    ExtremelyLow,
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ManaLevel {
    High,
    Medium,
    Low,
}

/// Sign of the player's net buff value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OffensiveLevel {
    High,
    Medium,
    Low,
}

/// Net buffs combined with shield effectiveness against the enemy's elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefensiveLevel {
    #[strum(serialize = "Extremely high")]
    #[cfg_attr(feature = "serde", serde(rename = "Extremely high"))]
    ExtremelyHigh,
    High,
    Medium,
    Low,
    #[strum(serialize = "Extremely low")]
    #[cfg_attr(feature = "serde", serde(rename = "Extremely low"))]
    ExtremelyLow,
}

/// Elemental match-up quality of an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum EffectivenessLevel {
    High,
    Medium,
    Low,
}

impl EffectivenessLevel {
    fn from_score(score: i32) -> Self {
        match score.signum() {
            1 => Self::High,
            0 => Self::Medium,
            _ => Self::Low,
        }
    }
}
