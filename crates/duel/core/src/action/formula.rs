//! Pure power-law formulas behind every action and derived wizard stat.
//!
//! Each function takes a normalized `[0, 1]` strength and returns the
//! un-jittered base value. Variance is applied separately by the caller.

/// Base damage of a damage spell: `100 * 2^(s^2)`.
pub fn damage_base(strength: f64) -> f64 {
    100.0 * 2f64.powf(strength.powi(2))
}

/// Base magnitude of a buff or debuff: `0.1 * 2.5^(s^1.8)`.
pub fn modifier_base(strength: f64) -> f64 {
    0.1 * (0.25f64 / 0.1).powf(strength.powf(1.8))
}

/// Base healing: `150 * (5/3)^(s^1.8)`.
pub fn heal_base(strength: f64) -> f64 {
    150.0 * (5.0f64 / 3.0).powf(strength.powf(1.8))
}

/// Mana cost of a damage spell: `round(3 * (10/3)^(s^1.15))`.
pub fn damage_mana_cost(strength: f64) -> u32 {
    round_count(3.0 * (10.0f64 / 3.0).powf(strength.powf(1.15)))
}

/// Mana cost of a buff or debuff: `round(3.4^(s^1.15))`.
pub fn modifier_mana_cost(strength: f64) -> u32 {
    round_count(3.4f64.powf(strength.powf(1.15)))
}

/// Un-jittered max HP: `500 * 2^(health^2)`.
pub fn max_hp_base(health: f64) -> f64 {
    500.0 * 2f64.powf(health.powi(2))
}

/// Outgoing damage multiplier: `1.25^(attack^2)`.
pub fn damage_multiplier(attack: f64) -> f64 {
    1.25f64.powf(attack.powi(2))
}

/// Incoming damage multiplier: `1.1 * (8/11)^(defense^1.8)`.
pub fn damage_reduction(defense: f64) -> f64 {
    1.1 * (8.0f64 / 11.0).powf(defense.powf(1.8))
}

/// Un-jittered starting mana: `10 * 2^(arcane^1.3)`.
pub fn starting_mana_base(arcane: f64) -> f64 {
    10.0 * 2f64.powf(arcane.powf(1.3))
}

/// Mana gained each round: `round(2 * 2.5^(arcane^1.15))`.
pub fn mana_per_round(arcane: f64) -> u32 {
    round_count(2.0 * 2.5f64.powf(arcane.powf(1.15)))
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Rounds to the nearest non-negative integer.
pub fn round_count(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.round() as u32
    }
}
