//! JSON wizard definitions.
//!
//! A definition is a flat object:
//!
//! ```json
//! {
//!   "name": "...", "primary_element": "FIRE", "secondary_element": "STORM",
//!   "attack": 0.7, "defense": 0.4, "health": 0.5, "healing": 0.3, "arcane": 0.6,
//!   "combat_style": "...",
//!   "spells": [
//!     { "name": "...", "spell_type": "DAMAGE", "description": "...",
//!       "element": "FIRE", "strength": 0.8 }
//!   ]
//! }
//! ```
//!
//! Every missing key is reported at once. Element and spell type names are
//! case-insensitive; stats and spell strength must lie in `[0, 1]`.

use duel_core::{
    Element, ErrorSeverity, GameError, Spell, SpellType, UnknownElement, UnknownSpellType,
    Wizard, WizardStats,
};
use serde_json::{Map, Value};

const WIZARD_KEYS: [&str; 10] = [
    "name",
    "primary_element",
    "secondary_element",
    "attack",
    "defense",
    "health",
    "healing",
    "arcane",
    "combat_style",
    "spells",
];

const SPELL_KEYS: [&str; 5] = ["name", "spell_type", "description", "element", "strength"];

/// Errors raised while building a wizard from a definition.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DefinitionError {
    #[error("Invalid wizard JSON: {0}")]
    Json(String),

    #[error("Missing keys for {owner}: {}", .keys.join(", "))]
    MissingKeys {
        owner: &'static str,
        keys: Vec<&'static str>,
    },

    #[error("Wizard 'spells' must be a list")]
    SpellsNotList,

    #[error("'{field}' must be {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    #[error("'{field}' must be a finite number in [0, 1], got {value}")]
    OutOfRange { field: String, value: f64 },

    #[error(transparent)]
    UnknownElement(#[from] UnknownElement),

    #[error(transparent)]
    UnknownSpellType(#[from] UnknownSpellType),

    #[error("no bundled wizard named '{0}'")]
    UnknownWizard(String),
}

impl GameError for DefinitionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownWizard(_) => ErrorSeverity::Validation,
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Json(_) => "DEFINITION_INVALID_JSON",
            Self::MissingKeys { .. } => "DEFINITION_MISSING_KEYS",
            Self::SpellsNotList => "DEFINITION_SPELLS_NOT_LIST",
            Self::WrongType { .. } => "DEFINITION_WRONG_TYPE",
            Self::OutOfRange { .. } => "DEFINITION_OUT_OF_RANGE",
            Self::UnknownElement(e) => e.error_code(),
            Self::UnknownSpellType(e) => e.error_code(),
            Self::UnknownWizard(_) => "UNKNOWN_WIZARD",
        }
    }
}

/// Parses a wizard from JSON text.
pub fn parse_wizard(json: &str) -> Result<Wizard, DefinitionError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| DefinitionError::Json(e.to_string()))?;
    wizard_from_value(&value)
}

/// Builds a wizard from an already-parsed JSON value.
pub fn wizard_from_value(value: &Value) -> Result<Wizard, DefinitionError> {
    let object = as_object(value, "wizard")?;
    require_keys(object, "Wizard", &WIZARD_KEYS)?;

    let stats = WizardStats {
        attack: unit_number(object, "attack")?,
        defense: unit_number(object, "defense")?,
        health: unit_number(object, "health")?,
        healing: unit_number(object, "healing")?,
        arcane: unit_number(object, "arcane")?,
    };

    let spells = object["spells"]
        .as_array()
        .ok_or(DefinitionError::SpellsNotList)?
        .iter()
        .enumerate()
        .map(|(index, spell)| spell_from_value(spell, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Wizard::new(
        string(object, "name")?,
        element(object, "primary_element")?,
        element(object, "secondary_element")?,
        stats,
        spells,
        string(object, "combat_style")?,
    ))
}

fn spell_from_value(value: &Value, index: usize) -> Result<Spell, DefinitionError> {
    let object = as_object(value, &format!("spells[{index}]"))?;
    require_keys(object, "Spell", &SPELL_KEYS)?;

    let spell_type = SpellType::from_name(string(object, "spell_type")?)?;
    Ok(Spell::new(
        string(object, "name")?,
        spell_type,
        string(object, "description")?,
        element(object, "element")?,
        unit_number(object, "strength")?,
    ))
}

fn as_object<'v>(value: &'v Value, field: &str) -> Result<&'v Map<String, Value>, DefinitionError> {
    value.as_object().ok_or_else(|| DefinitionError::WrongType {
        field: field.to_owned(),
        expected: "an object",
    })
}

fn require_keys(
    object: &Map<String, Value>,
    owner: &'static str,
    keys: &[&'static str],
) -> Result<(), DefinitionError> {
    let missing: Vec<_> = keys
        .iter()
        .copied()
        .filter(|key| !object.contains_key(*key))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DefinitionError::MissingKeys {
            owner,
            keys: missing,
        })
    }
}

fn string<'v>(object: &'v Map<String, Value>, key: &str) -> Result<&'v str, DefinitionError> {
    object[key].as_str().ok_or_else(|| DefinitionError::WrongType {
        field: key.to_owned(),
        expected: "a string",
    })
}

fn element(object: &Map<String, Value>, key: &str) -> Result<Element, DefinitionError> {
    Ok(Element::from_name(string(object, key)?)?)
}

fn unit_number(object: &Map<String, Value>, key: &str) -> Result<f64, DefinitionError> {
    let value = object[key]
        .as_f64()
        .ok_or_else(|| DefinitionError::WrongType {
            field: key.to_owned(),
            expected: "a number",
        })?;
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(DefinitionError::OutOfRange {
            field: key.to_owned(),
            value,
        })
    }
}
