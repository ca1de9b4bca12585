//! File-based loaders for wizard definitions.

pub mod wizard;

pub use wizard::{WizardLoader, load_wizard_file};

/// Result type for loader operations.
pub type LoadResult<T> = anyhow::Result<T>;
