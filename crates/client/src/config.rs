//! Client configuration loaded from the environment.

use std::env;

use duel_runtime::DuelConfig;

/// Settings for a command-line battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Fixed seed for reproducible battles; entropy when unset.
    pub seed: Option<u64>,
    pub max_steps: usize,
    pub event_buffer: usize,
    pub command_buffer: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let duel = DuelConfig::default();
        Self {
            seed: None,
            max_steps: duel.max_steps,
            event_buffer: duel.event_buffer_size,
            command_buffer: duel.command_buffer_size,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_SEED` - RNG seed (default: unset, random battles)
    /// - `DUEL_MAX_STEPS` - Turn limit for one battle (default: 1000)
    /// - `DUEL_EVENT_BUFFER` - Event channel capacity (default: 100)
    /// - `DUEL_COMMAND_BUFFER` - Command channel capacity (default: 32)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>(&lookup, "DUEL_SEED") {
            config.seed = Some(seed);
        }
        if let Some(steps) = read_env::<usize>(&lookup, "DUEL_MAX_STEPS") {
            config.max_steps = steps.max(1);
        }
        if let Some(capacity) = read_env::<usize>(&lookup, "DUEL_EVENT_BUFFER") {
            config.event_buffer = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>(&lookup, "DUEL_COMMAND_BUFFER") {
            config.command_buffer = capacity.max(1);
        }

        config
    }

    pub fn duel_config(&self) -> DuelConfig {
        DuelConfig {
            event_buffer_size: self.event_buffer,
            command_buffer_size: self.command_buffer,
            max_steps: self.max_steps,
            seed: self.seed,
        }
    }
}

fn read_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
