use std::sync::Arc;

use tracing::{debug, warn};

use super::{LlmProvider, LlmRequest};
use crate::domain::DomainError;

/// Default sampling temperature for summaries
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
/// Default completion budget
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Prompt-in, text-out handle over a chat provider
#[derive(Debug, Clone)]
pub struct LlmClient {
    provider: Arc<dyn LlmProvider>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl LlmClient {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// Send a single user prompt and return the trimmed reply
    pub async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        let request = LlmRequest::builder()
            .user(prompt)
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build();

        let response = self.provider.chat(&self.model, request).await?;

        if let Some(usage) = &response.usage {
            debug!(
                provider = self.provider.provider_name(),
                model = %self.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Completion received"
            );
        }

        if response.is_truncated() {
            warn!(
                model = %self.model,
                max_tokens = self.max_tokens,
                "Completion hit the token limit and may be cut off"
            );
        }

        Ok(response.content().trim().to_string())
    }
}
