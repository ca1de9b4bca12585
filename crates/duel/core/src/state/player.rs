use core::fmt;

use super::StatusEffects;
use crate::config::BattleConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::wizard::Wizard;

/// One of the two fixed battle positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    First,
    Second,
}

/// Raised when a raw seat index is not 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("seat index {0} is out of range (expected 0 or 1)")]
pub struct SeatError(pub usize);

impl GameError for SeatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "INVALID_SEAT"
    }
}

impl Seat {
    pub const BOTH: [Seat; 2] = [Seat::First, Seat::Second];

    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    pub const fn from_index(index: usize) -> Result<Self, SeatError> {
        match index {
            0 => Ok(Self::First),
            1 => Ok(Self::Second),
            other => Err(SeatError(other)),
        }
    }
}

impl TryFrom<usize> for Seat {
    type Error = SeatError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// A wizard bound to a seat.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub seat: Seat,
    pub wizard: Wizard,
}

/// Mutable combat state of one seat.
///
/// Health stays within `0..=max_health` and mana within `0..=MANA_CAP`; every
/// mutator clamps.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub player: Player,
    max_health: u32,
    current_health: u32,
    current_mana: u32,
    effects: StatusEffects,
}

impl PlayerState {
    pub fn new(player: Player, max_health: u32, starting_mana: u32) -> Self {
        let max_health = max_health.max(1);
        Self {
            player,
            max_health,
            current_health: max_health,
            current_mana: starting_mana.min(BattleConfig::MANA_CAP),
            effects: StatusEffects::new(),
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.player.wizard
    }

    pub fn seat(&self) -> Seat {
        self.player.seat
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn current_mana(&self) -> u32 {
        self.current_mana
    }

    pub fn effects(&self) -> &StatusEffects {
        &self.effects
    }

    pub(crate) fn effects_mut(&mut self) -> &mut StatusEffects {
        &mut self.effects
    }

    pub fn is_defeated(&self) -> bool {
        self.current_health == 0
    }

    pub fn set_health(&mut self, value: i64) -> u32 {
        self.current_health = value.clamp(0, i64::from(self.max_health)) as u32;
        self.current_health
    }

    pub fn change_health(&mut self, delta: i64) -> u32 {
        self.set_health(i64::from(self.current_health) + delta)
    }

    pub fn set_mana(&mut self, value: i64) -> u32 {
        self.current_mana = value.clamp(0, i64::from(BattleConfig::MANA_CAP)) as u32;
        self.current_mana
    }

    pub fn change_mana(&mut self, delta: i64) -> u32 {
        self.set_mana(i64::from(self.current_mana) + delta)
    }

    /// Restores up to `amount` health without exceeding max; returns the
    /// amount actually restored.
    pub(crate) fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current_health;
        self.current_health = before.saturating_add(amount).min(self.max_health);
        self.current_health - before
    }

    pub(crate) fn take_damage(&mut self, amount: u32) {
        self.current_health = self.current_health.saturating_sub(amount);
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: HP {}/{}, Mana {}, Effects: {}",
            self.player.wizard.name,
            self.current_health,
            self.max_health,
            self.current_mana,
            self.effects
        )
    }
}
