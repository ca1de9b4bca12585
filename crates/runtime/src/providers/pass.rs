use async_trait::async_trait;

use crate::api::{DecisionError, DecisionProvider, DecisionRequest, DecisionResponse};

/// Always picks the last affordable action, which is Pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassProvider;

#[async_trait]
impl DecisionProvider for PassProvider {
    async fn decide(&self, request: &DecisionRequest) -> Result<DecisionResponse, DecisionError> {
        let last = request.choices().max(1);
        Ok(DecisionResponse::new(last as i64, "Passing."))
    }
}
