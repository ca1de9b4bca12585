//! Sample wizards bundled with the crate.

use duel_core::Wizard;

use crate::definition::{DefinitionError, parse_wizard};

/// Bundled wizard definitions as `(name, json)` pairs.
pub const BUILTIN_WIZARDS: &[(&str, &str)] = &[
    (
        "Ignis Ashcaller",
        include_str!("../data/wizards/ignis.json"),
    ),
    (
        "Nerissa Frostmere",
        include_str!("../data/wizards/nerissa.json"),
    ),
    (
        "Morvane the Hollow",
        include_str!("../data/wizards/morvane.json"),
    ),
];

/// Names of every bundled wizard.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_WIZARDS.iter().map(|(name, _)| *name)
}

/// Looks up a bundled wizard by name (case-insensitive).
///
/// The first word of a name is accepted as a short form, so `"ignis"`
/// resolves to "Ignis Ashcaller".
pub fn builtin_wizard(name: &str) -> Result<Wizard, DefinitionError> {
    let wanted = name.trim();
    BUILTIN_WIZARDS
        .iter()
        .find(|(full, _)| {
            full.eq_ignore_ascii_case(wanted)
                || full
                    .split_whitespace()
                    .next()
                    .is_some_and(|short| short.eq_ignore_ascii_case(wanted))
        })
        .ok_or_else(|| DefinitionError::UnknownWizard(wanted.to_owned()))
        .and_then(|(_, json)| parse_wizard(json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bundled_wizard_parses_under_its_name() {
        for (name, json) in BUILTIN_WIZARDS {
            let wizard = parse_wizard(json).unwrap();
            assert_eq!(wizard.name, *name);
            assert!(!wizard.spells.is_empty());
        }
    }

    #[test]
    fn lookup_accepts_short_and_case_insensitive_names() {
        assert_eq!(builtin_wizard("ignis").unwrap().name, "Ignis Ashcaller");
        assert_eq!(
            builtin_wizard("NERISSA FROSTMERE").unwrap().name,
            "Nerissa Frostmere"
        );
    }

    #[test]
    fn unknown_name_is_reported() {
        assert_eq!(
            builtin_wizard("Merlin").unwrap_err(),
            DefinitionError::UnknownWizard("Merlin".into())
        );
    }
}
