//! Command-line arguments.

use std::path::Path;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use duel_content::{builtin_wizard, load_wizard_file};
use duel_core::{Seat, Wizard};
use duel_runtime::{DuelBuilder, HeuristicProvider, PassProvider};

use crate::config::ClientConfig;

#[derive(Debug, Parser)]
#[command(name = "duel")]
#[command(about = "Run a battle between two wizards", long_about = None)]
#[command(version)]
pub struct Args {
    /// First wizard: a bundled wizard name or a path to a JSON definition
    #[arg(value_name = "WIZARD", required_unless_present = "list")]
    pub first: Option<String>,

    /// Second wizard: a bundled wizard name or a path to a JSON definition
    #[arg(value_name = "WIZARD", required_unless_present = "list")]
    pub second: Option<String>,

    /// Policy choosing actions for the first seat
    #[arg(long, value_enum, default_value_t = Policy::Heuristic)]
    pub first_policy: Policy,

    /// Policy choosing actions for the second seat
    #[arg(long, value_enum, default_value_t = Policy::Heuristic)]
    pub second_policy: Policy,

    /// RNG seed (overrides DUEL_SEED)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Turn limit (overrides DUEL_MAX_STEPS)
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Print the final battle state from each seat's point of view
    #[arg(long)]
    pub snapshot: bool,

    /// List bundled wizards and exit
    #[arg(long)]
    pub list: bool,
}

/// Local decision policy for one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// Strategy-driven choice over the battle context
    Heuristic,
    /// Always pass
    Pass,
}

impl Policy {
    pub fn install(self, builder: DuelBuilder, seat: Seat) -> DuelBuilder {
        match self {
            Self::Heuristic => builder.provider(seat, HeuristicProvider),
            Self::Pass => builder.provider(seat, PassProvider),
        }
    }
}

impl Args {
    /// Apply command-line overrides on top of environment configuration.
    pub fn apply(&self, config: &mut ClientConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(steps) = self.max_steps {
            config.max_steps = steps.max(1);
        }
    }
}

/// Resolves a wizard argument: an existing file is loaded as JSON, anything
/// else is looked up among the bundled wizards.
pub fn resolve_wizard(arg: &str) -> Result<Wizard> {
    let path = Path::new(arg);
    if path.is_file() {
        load_wizard_file(path)
    } else {
        Ok(builtin_wizard(arg)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wizards_and_overrides() {
        let args = Args::try_parse_from([
            "duel",
            "ignis",
            "nerissa",
            "--second-policy",
            "pass",
            "--seed",
            "7",
        ])
        .unwrap();

        assert_eq!(args.first.as_deref(), Some("ignis"));
        assert_eq!(args.first_policy, Policy::Heuristic);
        assert_eq!(args.second_policy, Policy::Pass);

        let mut config = ClientConfig::default();
        args.apply(&mut config);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn wizards_required_unless_listing() {
        assert!(Args::try_parse_from(["duel", "ignis"]).is_err());
        assert!(Args::try_parse_from(["duel", "--list"]).is_ok());
    }

    #[test]
    fn resolves_bundled_names_and_files() {
        assert_eq!(resolve_wizard("morvane").unwrap().name, "Morvane the Hollow");
        assert!(resolve_wizard("nobody").is_err());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        std::fs::write(&path, duel_content::BUILTIN_WIZARDS[0].1).unwrap();
        let wizard = resolve_wizard(path.to_str().unwrap()).unwrap();
        assert_eq!(wizard.name, "Ignis Ashcaller");
    }
}
