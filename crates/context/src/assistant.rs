//! The chat pipeline: aggregate, build prompt, ask the model.

use crate::aggregator::ContextAggregator;
use crate::prompt;
use alumnet_core::error::Result;
use alumnet_core::provider::{Provider, ProviderRequest};
use std::sync::Arc;
use tracing::{debug, info};

/// Answers questions about the alumni network from stored records.
///
/// Cheap to share: every collaborator sits behind an `Arc`, and each call
/// is independent of every other.
pub struct AlumniAssistant {
    aggregator: ContextAggregator,
    provider: Arc<dyn Provider>,
    model: String,
}

impl AlumniAssistant {
    pub fn new(
        aggregator: ContextAggregator,
        provider: Arc<dyn Provider>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            aggregator,
            provider,
            model: model.into(),
        }
    }

    /// Build the model request for `question` without sending it.
    async fn preview(&self, question: &str) -> ProviderRequest {
        let bundle = self.aggregator.collect().await;
        prompt::build_request(&self.model, &bundle, question)
    }

    /// Run the full pipeline and return the model's reply text.
    pub async fn answer(&self, question: &str) -> Result<String> {
        let request = self.preview(question).await;
        debug!(
            provider = self.provider.name(),
            model = %self.model,
            prompt_chars = request.messages.iter().map(|m| m.content.len()).sum::<usize>(),
            "Sending chat request"
        );

        let response = self.provider.complete(request).await?;

        if let Some(usage) = &response.usage {
            info!(
                model = %response.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Chat completed"
            );
        } else {
            info!(model = %response.model, "Chat completed");
        }

        Ok(response.message.content)
    }
}
