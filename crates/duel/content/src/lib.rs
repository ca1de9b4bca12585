//! Wizard definitions for the duel engine.
//!
//! This crate turns external wizard descriptions into [`duel_core::Wizard`]
//! values:
//! - JSON definitions (the shape produced by the wizard generation service)
//! - Bundled sample wizards, addressable by name
//!
//! With the `loaders` feature (default), definitions can also be read from
//! disk.

pub mod builtin;
pub mod definition;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::{BUILTIN_WIZARDS, builtin_names, builtin_wizard};
pub use definition::{DefinitionError, parse_wizard, wizard_from_value};

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, WizardLoader, load_wizard_file};
