//! Wizard definition loader.

use std::path::Path;

use duel_core::Wizard;
use tracing::debug;

use crate::definition::parse_wizard;
use crate::loaders::LoadResult;

/// Loader for wizard definitions stored as JSON files.
pub struct WizardLoader;

impl WizardLoader {
    /// Load a single wizard from a JSON file.
    pub fn load(path: &Path) -> LoadResult<Wizard> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Cannot read wizard definition {}: {}", path.display(), e)
        })?;
        let wizard = parse_wizard(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse wizard definition {}: {}", path.display(), e)
        })?;

        debug!(
            name = %wizard.name,
            spells = wizard.spells.len(),
            "loaded wizard from {}",
            path.display()
        );
        Ok(wizard)
    }

    /// Load every `*.json` wizard in a directory, sorted by file name.
    pub fn load_dir(dir: &Path) -> LoadResult<Vec<Wizard>> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        paths.iter().map(|path| Self::load(path)).collect()
    }
}

/// Reads and parses a wizard definition file.
pub fn load_wizard_file(path: impl AsRef<Path>) -> LoadResult<Wizard> {
    WizardLoader::load(path.as_ref())
}
