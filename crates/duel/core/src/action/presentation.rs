//! Player-facing text for actions: effect summaries, overviews, cards and
//! battle announcements.

use super::{Action, SpellType};
use crate::element::{Element, join_names};

/// Display card for an action in a wizard's catalog.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionCard {
    /// `DAMAGE`, `BUFF`, `DEBUFF`, `HEAL` or `DEFENSE`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    pub name: String,
    pub element: Option<Element>,
    pub range: String,
    pub description: String,
    pub accuracy: f64,
    pub mana_cost: u32,
}

fn percent(value: f64) -> String {
    format!("{:.1}", value * 100.0)
}

impl Action {
    /// One-line effect text shown to the decision service.
    pub fn compact_effect(&self) -> String {
        match self {
            Self::Spell(spell) => {
                let (min, max) = spell.range();
                match spell.spell_type {
                    SpellType::Damage => format!("Deals {min}-{max} damage"),
                    SpellType::Buff => format!(
                        "Increase attack and defense by {}-{}%",
                        percent(min),
                        percent(max)
                    ),
                    SpellType::Debuff => format!(
                        "Reduces enemy attack and defense by {}-{}%",
                        percent(min),
                        percent(max)
                    ),
                }
            }
            Self::Heal(heal) => {
                let (min, max) = heal.range();
                format!("Restore {min}-{max} health")
            }
            Self::Defend(_) => "Reduces incoming damage".to_owned(),
            Self::Pass => "Do nothing.".to_owned(),
        }
    }

    /// Long comma-separated description used by the battle snapshot.
    pub fn overview(&self) -> String {
        let accuracy = format!("Accuracy: {}%", (self.accuracy() * 100.0).round());
        let target = format!("Target: {}", self.target());
        let mana = format!("Mana Cost: {}", self.mana_cost());

        let parts = match self {
            Self::Spell(spell) => {
                let (min, max) = spell.range();
                let description = match spell.spell_type {
                    SpellType::Damage => format!("Deals {min}-{max} damage"),
                    SpellType::Buff => format!(
                        "Increases your attack and defense by {}-{}% for {} rounds",
                        percent(min),
                        percent(max),
                        crate::BattleConfig::BUFF_TURNS
                    ),
                    SpellType::Debuff => format!(
                        "Reduces enemy attack and defense by {}-{}% for {} rounds",
                        percent(min),
                        percent(max),
                        crate::BattleConfig::DEBUFF_TURNS
                    ),
                };
                vec![
                    "Action Type: 'CAST_SPELL'".to_owned(),
                    format!("Spell Type: {}", spell.spell_type),
                    format!("Element: {}", spell.element),
                    accuracy,
                    target,
                    mana,
                    format!("Description: {description}"),
                    format!(
                        "Elements strong against: {}",
                        join_names(&spell.element.strengths())
                    ),
                    format!(
                        "Elements weak against: {}",
                        join_names(&spell.element.weaknesses())
                    ),
                ]
            }
            Self::Defend(defend) => vec![
                "Action Type: 'DEFEND'".to_owned(),
                format!("Element: {}", defend.element),
                accuracy,
                target,
                mana,
                format!(
                    "Description: Puts up a {} shield to greatly reduce incoming damage",
                    defend.element
                ),
                format!(
                    "Elements strong against: {}",
                    join_names(&defend.element.strengths())
                ),
                format!(
                    "Elements weak against: {}",
                    join_names(&defend.element.weaknesses())
                ),
            ],
            Self::Heal(heal) => {
                let (min, max) = heal.range();
                vec![
                    "Action Type: 'HEAL'".to_owned(),
                    accuracy,
                    target,
                    mana,
                    format!("Description: Restores {min} to {max} hp"),
                ]
            }
            Self::Pass => vec!["Action Type: 'PASS'".to_owned()],
        };

        parts.join(", ")
    }

    /// Card shown next to a wizard's portrait. Pass has no card.
    pub fn card(&self) -> Option<ActionCard> {
        match self {
            Self::Spell(spell) => {
                let (min, max) = spell.range();
                let range = match spell.spell_type {
                    SpellType::Damage => format!("{min}-{max}"),
                    SpellType::Buff | SpellType::Debuff => {
                        format!("{}-{}%", percent(min), percent(max))
                    }
                };
                Some(ActionCard {
                    kind: spell.spell_type.to_string(),
                    name: spell.name.clone(),
                    element: Some(spell.element),
                    range,
                    description: spell.description.clone(),
                    accuracy: spell.accuracy(),
                    mana_cost: spell.mana_cost(),
                })
            }
            Self::Defend(defend) => {
                let element = defend.element;
                Some(ActionCard {
                    kind: "DEFENSE".to_owned(),
                    name: self.label(),
                    element: Some(element),
                    range: "0-50%".to_owned(),
                    description: format!(
                        "Raises a {} shield (strong against {}, weak against {})",
                        element.display_name(),
                        join_names(&element.strengths()),
                        join_names(&element.weaknesses())
                    ),
                    accuracy: self.accuracy(),
                    mana_cost: self.mana_cost(),
                })
            }
            Self::Heal(heal) => {
                let (min, max) = heal.range();
                Some(ActionCard {
                    kind: "HEAL".to_owned(),
                    name: "Heal".to_owned(),
                    element: None,
                    range: format!("{min}-{max}"),
                    description: format!("Restores {min}-{max} health."),
                    accuracy: self.accuracy(),
                    mana_cost: self.mana_cost(),
                })
            }
            Self::Pass => None,
        }
    }

    /// Announcement for a failed accuracy roll.
    pub fn failure_announcement(&self, wizard: &str) -> String {
        match self {
            Self::Spell(spell) => format!("{wizard} casts {}... but it failed!", spell.name),
            Self::Heal(_) => format!("{wizard} casts heal... but it failed!"),
            Self::Defend(_) => format!("{wizard} failed a defense? How?!?!?"),
            Self::Pass => format!("{wizard} passes."),
        }
    }

    /// Announcement for a successful action; `value` is the applied amount.
    pub fn success_announcement(&self, wizard: &str, value: f64) -> String {
        match self {
            Self::Spell(spell) => match spell.spell_type {
                SpellType::Damage => format!(
                    "{wizard} casts {} dealing {} damage!",
                    spell.name,
                    value.round()
                ),
                SpellType::Buff => format!(
                    "{wizard} casts {}. Their attack and defense increase by {}%!",
                    spell.name,
                    percent(value)
                ),
                SpellType::Debuff => format!(
                    "{wizard} casts {}. Their opponent's attack and defense decrease by {}%!",
                    spell.name,
                    percent(value)
                ),
            },
            Self::Heal(_) => format!("{wizard} casts heal. {} health was restored!", value.trunc()),
            Self::Defend(defend) => format!("{wizard} put up a {} shield!", defend.element),
            Self::Pass => format!("{wizard} passes."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Defend, Heal, Spell};

    #[test]
    fn compact_effects() {
        let damage = Action::from(Spell::new("Bolt", SpellType::Damage, "", Element::Storm, 0.0));
        assert_eq!(damage.compact_effect(), "Deals 90-110 damage");

        let buff = Action::from(Spell::new("Focus", SpellType::Buff, "", Element::Life, 0.0));
        assert_eq!(buff.compact_effect(), "Increase attack and defense by 9.5-10.5%");

        let debuff = Action::from(Spell::new("Hex", SpellType::Debuff, "", Element::Myth, 0.0));
        assert_eq!(
            debuff.compact_effect(),
            "Reduces enemy attack and defense by 9.5-10.5%"
        );

        assert_eq!(Action::Heal(Heal::new(0.0)).compact_effect(), "Restore 135-165 health");
        assert_eq!(
            Action::Defend(Defend::new(Element::Fire)).compact_effect(),
            "Reduces incoming damage"
        );
        assert_eq!(Action::Pass.compact_effect(), "Do nothing.");
    }

    #[test]
    fn announcements() {
        let bolt = Action::from(Spell::new("Bolt", SpellType::Damage, "", Element::Storm, 0.0));
        assert_eq!(bolt.success_announcement("Zed", 104.0), "Zed casts Bolt dealing 104 damage!");
        assert_eq!(bolt.failure_announcement("Zed"), "Zed casts Bolt... but it failed!");

        let buff = Action::from(Spell::new("Focus", SpellType::Buff, "", Element::Life, 0.0));
        assert_eq!(
            buff.success_announcement("Ana", 0.123),
            "Ana casts Focus. Their attack and defense increase by 12.3%!"
        );

        let shield = Action::Defend(Defend::new(Element::Ice));
        assert_eq!(shield.success_announcement("Ana", 0.0), "Ana put up a ICE shield!");
        assert_eq!(
            Action::Heal(Heal::new(0.0)).success_announcement("Ana", 150.0),
            "Ana casts heal. 150 health was restored!"
        );
        assert_eq!(Action::Pass.success_announcement("Ana", 0.0), "Ana passes.");
    }

    #[test]
    fn cards() {
        assert!(Action::Pass.card().is_none());
        let card = Action::Defend(Defend::new(Element::Fire))
            .card()
            .expect("defend has a card");
        assert_eq!(card.kind, "DEFENSE");
        assert_eq!(card.name, "Fire Defense");
        assert_eq!(
            card.description,
            "Raises a Fire shield (strong against ICE, DEATH, weak against STORM, MYTH)"
        );
    }

    #[test]
    fn overview_lists_matchups() {
        let overview = Action::Defend(Defend::new(Element::Fire)).overview();
        assert!(overview.starts_with("Action Type: 'DEFEND', Element: FIRE, Accuracy: 100%"));
        assert!(overview.ends_with("Elements weak against: STORM, MYTH"));
        assert_eq!(Action::Pass.overview(), "Action Type: 'PASS'");
    }
}
