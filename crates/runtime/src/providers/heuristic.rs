//! Deterministic local policy over the compact battle context.
//!
//! Mirrors the basic strategy given to the remote decision service:
//! 1. take a lethal damage spell (most accurate first)
//! 2. heal when health is extremely low
//! 3. otherwise score every non-redundant action by situation, element
//!    effectiveness and accuracy, keeping the earliest index on ties

use async_trait::async_trait;

use duel_core::{
    ActionSummary, BattleContext, DefensiveLevel, EffectivenessLevel, HealthLevel, ManaLevel,
    OffensiveLevel,
};

use crate::api::{DecisionError, DecisionProvider, DecisionRequest, DecisionResponse};

/// Policy-driven provider that never calls out of process.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicProvider;

impl HeuristicProvider {
    /// Returns the chosen 0-based position and a justification.
    pub fn choose(context: &BattleContext) -> Option<(usize, String)> {
        let actions = &context.actor.available_actions;

        let lethal = actions
            .iter()
            .enumerate()
            .filter(|(_, action)| action.can_kill == Some(true))
            .fold(None, |best: Option<(usize, f64)>, (position, action)| {
                let accuracy = accuracy(action);
                match best {
                    Some((_, best_accuracy)) if best_accuracy >= accuracy => best,
                    _ => Some((position, accuracy)),
                }
            });
        if let Some((position, _)) = lethal {
            return Some((position, "A damage spell can finish the enemy.".to_owned()));
        }

        if context.actor.health_level == HealthLevel::ExtremelyLow {
            if let Some(position) = actions
                .iter()
                .position(|action| action.kind == "HEAL" && action.is_redundant != Some(true))
            {
                return Some((position, "Health is critical; healing.".to_owned()));
            }
        }

        let mut best: Option<(usize, f64)> = None;
        for (position, action) in actions.iter().enumerate() {
            if action.is_redundant == Some(true) {
                continue;
            }
            let Some(score) = situational_score(action, context) else {
                continue;
            };
            let score = (score + effectiveness_bonus(action)) * accuracy(action);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((position, score));
            }
        }

        best.map(|(position, score)| {
            let kind = &actions[position].kind;
            (position, format!("{kind} scored highest ({score:.2})."))
        })
        .or_else(|| {
            actions
                .len()
                .checked_sub(1)
                .map(|last| (last, "Nothing useful to do; passing.".to_owned()))
        })
    }
}

#[async_trait]
impl DecisionProvider for HeuristicProvider {
    async fn decide(&self, request: &DecisionRequest) -> Result<DecisionResponse, DecisionError> {
        let (position, justification) = Self::choose(&request.context)
            .ok_or_else(|| DecisionError::Failed("no affordable actions".to_owned()))?;
        Ok(DecisionResponse::new(position as i64 + 1, justification))
    }
}

fn accuracy(action: &ActionSummary) -> f64 {
    action.accuracy.unwrap_or(1.0)
}

fn effectiveness_bonus(action: &ActionSummary) -> f64 {
    match action.element_effectiveness {
        Some(EffectivenessLevel::High) => 1.5,
        Some(EffectivenessLevel::Low) => -1.0,
        Some(EffectivenessLevel::Medium) | None => 0.0,
    }
}

/// Base desirability of an action kind, `None` when it should not be taken.
fn situational_score(action: &ActionSummary, context: &BattleContext) -> Option<f64> {
    let actor = &context.actor;
    let enemy = &context.enemy;

    let score = match action.kind.as_str() {
        "DAMAGE" => {
            let mut score = 3.0;
            if actor.mana_level == ManaLevel::High {
                score += 0.5;
            }
            if matches!(
                enemy.health_level,
                HealthLevel::Low | HealthLevel::ExtremelyLow
            ) {
                score += 1.5;
            }
            score
        }
        "HEAL" => match actor.health_level {
            HealthLevel::ExtremelyLow => 10.0,
            HealthLevel::Low => 4.5,
            HealthLevel::Medium => 2.0,
            HealthLevel::High => return None,
        },
        "BUFF" => match actor.offensive_level {
            OffensiveLevel::High => return None,
            OffensiveLevel::Medium => 2.5,
            OffensiveLevel::Low => 3.0,
        },
        "DEBUFF" => match enemy.defensive_level {
            DefensiveLevel::Low | DefensiveLevel::ExtremelyLow => 1.0,
            _ => 2.5,
        },
        "DEFEND" => {
            if enemy.offensive_level == OffensiveLevel::High
                || matches!(
                    actor.defensive_level,
                    DefensiveLevel::Low | DefensiveLevel::ExtremelyLow
                )
            {
                3.0
            } else {
                1.5
            }
        }
        "PASS" => 0.0,
        _ => return None,
    };
    Some(score)
}
