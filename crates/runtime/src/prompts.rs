//! Prompt text for the remote decision service.
//!
//! The system prompt is fixed per wizard. The user prompt is rendered from a
//! [`BattleContext`]; its numbered list is the index space the service must
//! answer in.

use duel_core::{ActionSummary, BattleContext, Wizard};

pub fn system_prompt(wizard: &Wizard) -> String {
    format!(
        r#"You are {name}, a wizard in a turn-based PvP combat game.
You engage in combat with the following style: "{style}".

YOUR ROLE
- Pick the INDEX of the BEST action from the numbered list of actions.
- Output JSON only. Put every explanation in "justification".

GAME CONTEXT
- Action types:
  - DAMAGE: reduces enemy health
  - BUFF: raises your offensive and defensive level
  - DEBUFF: lowers the enemy's offensive and defensive level
  - DEFEND: raises your defensive level with an elemental shield
  - HEAL: restores your health
  - PASS: does nothing
- Mana gates actions; both wizards gain mana after each round.
- Each element has 2 strengths and 2 weaknesses; all others are neutral.
- Every action has an accuracy; on failure nothing happens.
- You win by dropping the enemy's health to 0.

INPUT
- your_health_level, your_mana_level, your_offensive_level, your_defensive_level
- enemy_health_level, enemy_mana_level, enemy_offensive_level, enemy_defensive_level
- Actions you cannot take (not enough mana)
- Actions you can take, each with:
  - type (DAMAGE, BUFF, DEBUFF, DEFEND, HEAL, PASS)
  - effect (short summary)
  - accuracy (0..1)
  - element_effectiveness (low, medium, high)
  - is_redundant (true|false)
  - can_kill (true|false)

INPUTS EXPLAINED
- element_effectiveness: how well the action's element fares against the opponent's elements
- is_redundant: the effect is already active and casting it again wastes the turn
- can_kill: the action can knock out the opponent this turn

BASIC STRATEGY
- Never pick an action with is_redundant=true. Do not heal at high health.
- If any damage spell has can_kill=true, pick it; among several, pick the most accurate.
- If your_health_level is "Extremely low", HEAL. Favor healing at low or medium health.
- Deal damage when mana is high and you are not in danger, or when the enemy's health is low.
- BUFF to raise your levels, DEBUFF to lower the enemy's, DEFEND when the enemy's offense is high.
- Prefer the action with the higher element_effectiveness, especially among DEFEND actions.
- PASS only to save mana for a clearly better action next turn.
- Weigh the basic strategy at about 60% and your combat style at about 40%.

OUTPUT
- action_index: the number of the chosen action
- justification: a concise explanation of the choice"#,
        name = wizard.name,
        style = wizard.combat_style,
    )
}

pub fn user_prompt(wizard: &Wizard, context: &BattleContext) -> String {
    let actor = &context.actor;
    let enemy = &context.enemy;

    let mut prompt = format!(
        "- your_health_level: {}\n\
         - your_mana_level: {}\n\
         - your_offensive_level: {}\n\
         - your_defensive_level: {}\n\
         \n\
         - enemy_health_level: {}\n\
         - enemy_mana_level: {}\n\
         - enemy_offensive_level: {}\n\
         - enemy_defensive_level: {}",
        actor.health_level,
        actor.mana_level,
        actor.offensive_level,
        actor.defensive_level,
        enemy.health_level,
        enemy.mana_level,
        enemy.offensive_level,
        enemy.defensive_level,
    );

    if !actor.unavailable_actions.is_empty() {
        prompt.push_str("\n\nYour Unaffordable Actions:");
        for action in &actor.unavailable_actions {
            prompt.push_str("\n- ");
            prompt.push_str(&render(action));
        }
    }

    prompt.push_str("\n\nChoose ONE of the following actions to take:");
    for (position, action) in actor.available_actions.iter().enumerate() {
        prompt.push_str(&format!("\n- {}: {}", position + 1, render(action)));
    }

    prompt.push_str(&format!(
        "\n\nMake sure you act in accordance with your combat style: \"{}\"",
        wizard.combat_style
    ));
    prompt
}

fn render(action: &ActionSummary) -> String {
    serde_json::to_string(action).unwrap_or_else(|_| format!("{action:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{Element, GameState, PcgRng, Seat, Spell, SpellType, WizardStats};

    fn wizard(name: &str, style: &str) -> Wizard {
        Wizard::new(
            name,
            Element::Fire,
            Element::Storm,
            WizardStats::default(),
            vec![Spell::new(
                "Cinder",
                SpellType::Damage,
                "Burns.",
                Element::Fire,
                0.5,
            )],
            style,
        )
    }

    #[test]
    fn system_prompt_names_wizard_and_style() {
        let prompt = system_prompt(&wizard("Ignis", "Reckless"));
        assert!(prompt.starts_with("You are Ignis,"));
        assert!(prompt.contains(r#"following style: "Reckless""#));
    }

    #[test]
    fn user_prompt_numbers_affordable_actions_from_one() {
        let state = GameState::initialize(
            wizard("Ignis", "Reckless"),
            wizard("Vela", "Careful"),
            &mut PcgRng::new(7),
        );
        let seat = Seat::First;
        let context = state.compact_battle_context(seat);
        let prompt = user_prompt(state.wizard(seat), &context);

        let numbered: Vec<_> = prompt
            .lines()
            .filter(|line| line.starts_with("- ") && line[2..].contains(": {"))
            .collect();
        assert_eq!(numbered.len(), context.actor.available_actions.len());
        assert!(numbered[0].starts_with("- 1: {\"type\":"));
        assert!(prompt.contains("Choose ONE of the following actions to take:"));
        assert!(prompt.ends_with(&format!(
            "your combat style: \"{}\"",
            state.wizard(seat).combat_style
        )));
    }
}
