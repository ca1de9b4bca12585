//! Command-line client for running wizard battles.
//!
//! The binary is the composition root: it reads configuration, resolves the
//! two wizards, installs a decision policy per seat and prints the battle log
//! as it streams from the runtime.

pub mod cli;
pub mod config;
pub mod report;

pub use cli::{Args, Policy, resolve_wizard};
pub use config::ClientConfig;
