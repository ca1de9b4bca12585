/// Balance constants for a duel.
///
/// Every value here is a fixed rule of the game rather than a tunable; the
/// type exists so the constants have one home and read by name at call sites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BattleConfig;

impl BattleConfig {
    // ========================================================================
    // Mana economy
    // ========================================================================

    /// Hard ceiling on a player's mana pool.
    pub const MANA_CAP: u32 = 25;
    /// Mana above this is reported as a "high" mana level.
    pub const MANA_HIGH_THRESHOLD: u32 = 16;
    /// Mana above this (and not high) is reported as "medium".
    pub const MANA_MEDIUM_THRESHOLD: u32 = 8;

    // ========================================================================
    // Status effect durations
    // ========================================================================

    pub const SHIELD_TURNS: u32 = 3;
    pub const BUFF_TURNS: u32 = 4;
    pub const DEBUFF_TURNS: u32 = 3;

    // ========================================================================
    // Elemental shields
    // ========================================================================

    /// Spell element overwhelms the shield element.
    pub const SHIELD_OVERWHELMED: f64 = 1.05;
    /// Shield element resists the spell element.
    pub const SHIELD_RESISTS: f64 = 0.5;
    /// Any other active shield.
    pub const SHIELD_BASELINE: f64 = 0.9;

    // ========================================================================
    // Fixed actions
    // ========================================================================

    pub const DEFEND_MANA_COST: u32 = 2;
    pub const HEAL_MANA_COST: u32 = 5;
    pub const HEAL_ACCURACY: f64 = 0.95;
    pub const HEAL_VARIANCE: f64 = 0.1;

    // ========================================================================
    // Wizard derivation
    // ========================================================================

    /// Jitter applied to rolled max HP and starting mana.
    pub const SETUP_VARIANCE: f64 = 0.1;

    pub const fn new() -> Self {
        Self
    }
}
