//! Asynchronous abstraction for sourcing a wizard's next action.
//!
//! Runtime users plug in [`DecisionProvider`] implementations so a battle can
//! be driven by a remote decision service, a local policy, or scripted
//! fixtures. Providers answer with a 1-based index into the acting seat's
//! affordable actions, exactly as numbered in the prompt.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use duel_core::{BattleContext, ErrorSeverity, GameError, Seat, Wizard};

use crate::prompts;

/// Failures reported by a decision provider.
///
/// These never touch battle state; the runtime logs them and the turn can be
/// retried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("Invalid action index returned: {response}")]
    InvalidIndex { response: String },

    #[error("Error during action generation: {0}")]
    Failed(String),
}

impl GameError for DecisionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidIndex { .. } => "INVALID_ACTION_INDEX",
            Self::Failed(_) => "DECISION_FAILED",
        }
    }
}

/// Everything a provider needs to pick an action for one turn.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DecisionRequest {
    pub seat: Seat,
    pub wizard: Wizard,
    pub context: BattleContext,
    pub system_prompt: String,
    pub user_prompt: String,
}

impl DecisionRequest {
    pub fn new(seat: Seat, wizard: Wizard, context: BattleContext) -> Self {
        let system_prompt = prompts::system_prompt(&wizard);
        let user_prompt = prompts::user_prompt(&wizard, &context);
        Self {
            seat,
            wizard,
            context,
            system_prompt,
            user_prompt,
        }
    }

    /// Number of affordable actions the reply may choose from.
    pub fn choices(&self) -> usize {
        self.context.actor.available_actions.len()
    }
}

/// Reply of the decision service: `{action_index, justification}`.
///
/// `action_index` is kept as raw JSON because services send both numbers and
/// numeric strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub action_index: Value,
    #[serde(default)]
    pub justification: String,
}

impl DecisionResponse {
    pub fn new(action_index: i64, justification: impl Into<String>) -> Self {
        Self {
            action_index: Value::from(action_index),
            justification: justification.into(),
        }
    }

    /// The 1-based index, or [`DecisionError::InvalidIndex`] if it is not
    /// numeric.
    pub fn index(&self) -> Result<i64, DecisionError> {
        parse_action_index(&self.action_index).ok_or_else(|| DecisionError::InvalidIndex {
            response: serde_json::to_string(self).unwrap_or_else(|_| self.action_index.to_string()),
        })
    }
}

/// Reads an action index from a JSON value.
///
/// Integers are taken as-is. Strings contribute their leading integer
/// (`" 3"` and `"3rd"` both give 3). Anything else is not an index.
pub fn parse_action_index(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => {
            let text = text.trim_start();
            let sign_len = usize::from(text.starts_with(['+', '-']));
            let digits_len = text[sign_len..]
                .bytes()
                .take_while(u8::is_ascii_digit)
                .count();
            if digits_len == 0 {
                return None;
            }
            text[..sign_len + digits_len].parse().ok()
        }
        _ => None,
    }
}

/// Trait for choosing an action given the acting seat's battle context.
///
/// Different implementations can handle:
/// - A remote decision service fed with the request's prompts
/// - Local deterministic policies
/// - Scripted replies for tests
#[async_trait]
pub trait DecisionProvider: Send + Sync {
    /// Pick one of the request's affordable actions.
    async fn decide(&self, request: &DecisionRequest) -> Result<DecisionResponse, DecisionError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_numbers_and_numeric_strings() {
        assert_eq!(parse_action_index(&json!(3)), Some(3));
        assert_eq!(parse_action_index(&json!("2")), Some(2));
        assert_eq!(parse_action_index(&json!(" 4 ")), Some(4));
        assert_eq!(parse_action_index(&json!("5th")), Some(5));
        assert_eq!(parse_action_index(&json!("-1")), Some(-1));
    }

    #[test]
    fn rejects_non_numeric_indices() {
        assert_eq!(parse_action_index(&json!("fireball")), None);
        assert_eq!(parse_action_index(&json!("")), None);
        assert_eq!(parse_action_index(&json!(null)), None);
        assert_eq!(parse_action_index(&json!(1.5)), None);
        assert_eq!(parse_action_index(&json!([1])), None);
    }

    #[test]
    fn invalid_index_reports_whole_response() {
        let response: DecisionResponse =
            serde_json::from_value(json!({ "action_index": "none", "justification": "?" }))
                .unwrap();

        let err = response.index().unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Invalid action index returned: {"action_index":"none","justification":"?"}"#
        );
        assert!(err.severity().is_recoverable());
    }

    #[test]
    fn justification_is_optional() {
        let response: DecisionResponse =
            serde_json::from_value(json!({ "action_index": 1 })).unwrap();
        assert_eq!(response.index(), Ok(1));
        assert!(response.justification.is_empty());
    }
}
