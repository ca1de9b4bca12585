//! Replays queued decisions; intended for tests and replays.

use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::api::{DecisionError, DecisionProvider, DecisionRequest, DecisionResponse};

type Scripted = Result<DecisionResponse, DecisionError>;

/// Provider answering from a queue of prepared responses.
///
/// Once the queue is empty every call fails with [`DecisionError::Failed`].
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Scripted>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue of 1-based indices, answered in order.
    pub fn from_indices(indices: impl IntoIterator<Item = i64>) -> Self {
        let script = indices
            .into_iter()
            .map(|index| Ok(DecisionResponse::new(index, "scripted")))
            .collect();
        Self {
            script: Mutex::new(script),
        }
    }

    pub async fn push_index(&self, index: i64) {
        self.push(Ok(DecisionResponse::new(index, "scripted"))).await;
    }

    /// Queue a raw `action_index` value, e.g. a string or `null`.
    pub async fn push_raw(&self, action_index: Value) {
        self.push(Ok(DecisionResponse {
            action_index,
            justification: "scripted".to_owned(),
        }))
        .await;
    }

    pub async fn push_error(&self, message: impl Into<String>) {
        self.push(Err(DecisionError::Failed(message.into()))).await;
    }

    pub async fn remaining(&self) -> usize {
        self.script.lock().await.len()
    }

    async fn push(&self, entry: Scripted) {
        self.script.lock().await.push_back(entry);
    }
}

#[async_trait]
impl DecisionProvider for ScriptedProvider {
    async fn decide(&self, _request: &DecisionRequest) -> Result<DecisionResponse, DecisionError> {
        self.script
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(DecisionError::Failed("decision script exhausted".to_owned())))
    }
}
