//! Combat resolution system.
//!
//! Pure functions turning a rolled spell value into damage. Nothing here
//! mutates battle state.
//!
//! # Core Functions
//!
//! - `calculate_damage`: attacker/defender multipliers plus elemental shields
//! - `shield_multiplier`: a single shield's effect on a spell element

pub mod damage;

pub use damage::{calculate_damage, combatant_multiplier, shield_multiplier};
