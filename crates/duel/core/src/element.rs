//! The static element chart.
//!
//! Seven elements, each with two elements it is strong against, two it is weak
//! against and a base accuracy used by every spell of that element. Relations
//! are asymmetric; an element is neutral toward itself and toward anything not
//! listed.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// One of the seven magical elements.
///
/// Parsing is case-insensitive (`"fire"`, `"Fire"` and `"FIRE"` all resolve);
/// `Display` renders the canonical upper-case name.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum Element {
    Fire,
    Ice,
    Storm,
    Life,
    Death,
    Myth,
    Balance,
}

/// Static definition of an element's match-ups.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementProfile {
    pub display_name: &'static str,
    pub description: &'static str,
    pub strengths: [Element; 2],
    pub weaknesses: [Element; 2],
    pub accuracy: f64,
}

/// Raised when an element name is not in the chart.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown element `{0}`")]
pub struct UnknownElement(pub String);

impl crate::GameError for UnknownElement {
    fn severity(&self) -> crate::ErrorSeverity {
        crate::ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        "UNKNOWN_ELEMENT"
    }
}

const FIRE: ElementProfile = ElementProfile {
    display_name: "Fire",
    description: "Represents destruction, passion, and energy.",
    strengths: [Element::Ice, Element::Death],
    weaknesses: [Element::Storm, Element::Myth],
    accuracy: 0.75,
};

const ICE: ElementProfile = ElementProfile {
    display_name: "Ice",
    description: "Represents control, patience, and slow movements.",
    strengths: [Element::Storm, Element::Myth],
    weaknesses: [Element::Fire, Element::Life],
    accuracy: 0.8,
};

const STORM: ElementProfile = ElementProfile {
    display_name: "Storm",
    description: "Represents chaos, unpredictability, and raw power.",
    strengths: [Element::Fire, Element::Life],
    weaknesses: [Element::Ice, Element::Balance],
    accuracy: 0.7,
};

const LIFE: ElementProfile = ElementProfile {
    display_name: "Life",
    description: "Represents healing, vitality, and growth.",
    strengths: [Element::Death, Element::Myth],
    weaknesses: [Element::Storm, Element::Ice],
    accuracy: 0.9,
};

const DEATH: ElementProfile = ElementProfile {
    display_name: "Death",
    description: "Represents decay, sacrifice, and inevitability.",
    strengths: [Element::Life, Element::Balance],
    weaknesses: [Element::Fire, Element::Myth],
    accuracy: 0.85,
};

const MYTH: ElementProfile = ElementProfile {
    display_name: "Myth",
    description: "Represents illusions, trickery, and ancient power.",
    strengths: [Element::Fire, Element::Death],
    weaknesses: [Element::Ice, Element::Life],
    accuracy: 0.8,
};

const BALANCE: ElementProfile = ElementProfile {
    display_name: "Balance",
    description: "Represents harmony, control, and versatility.",
    strengths: [Element::Storm, Element::Myth],
    weaknesses: [Element::Death, Element::Life],
    accuracy: 0.85,
};

impl Element {
    /// Looks up an element by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self, UnknownElement> {
        name.trim()
            .parse()
            .map_err(|_| UnknownElement(name.to_owned()))
    }

    pub const fn profile(self) -> &'static ElementProfile {
        match self {
            Self::Fire => &FIRE,
            Self::Ice => &ICE,
            Self::Storm => &STORM,
            Self::Life => &LIFE,
            Self::Death => &DEATH,
            Self::Myth => &MYTH,
            Self::Balance => &BALANCE,
        }
    }

    pub const fn strengths(self) -> [Element; 2] {
        self.profile().strengths
    }

    pub const fn weaknesses(self) -> [Element; 2] {
        self.profile().weaknesses
    }

    /// Base accuracy of every spell cast with this element.
    pub const fn accuracy(self) -> f64 {
        self.profile().accuracy
    }

    pub const fn display_name(self) -> &'static str {
        self.profile().display_name
    }

    pub const fn description(self) -> &'static str {
        self.profile().description
    }

    pub fn is_strong_against(self, other: Element) -> bool {
        self.strengths().contains(&other)
    }

    pub fn is_weak_against(self, other: Element) -> bool {
        self.weaknesses().contains(&other)
    }

    /// Canonical upper-case name, e.g. `"FIRE"`.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Joins element names with `", "` for human-readable listings.
pub(crate) fn join_names(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|element| element.name())
        .collect::<Vec<_>>()
        .join(", ")
}
