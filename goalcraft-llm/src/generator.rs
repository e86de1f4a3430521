//! The text generation capability.
//!
//! The agent needs exactly one thing from a model: role-tagged messages and
//! sampling parameters in, trimmed text out. Every [`LlmProvider`] provides it
//! through the blanket impl below; tests implement [`TextGenerator`] directly
//! with scripted replies.

use crate::error::{Error, Result};
use crate::provider::{ChatMessage, CompletionRequest, FinishReason, LlmProvider};
use tracing::{debug, warn};

/// Sampling parameters applied to every generation in a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    /// In `[0, 1]`
    pub temperature: f32,
    pub max_tokens: usize,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            max_tokens: 600,
        }
    }
}

impl SamplingParams {
    pub fn new(temperature: f32, max_tokens: usize) -> Result<Self> {
        if !(0.0..=1.0).contains(&temperature) {
            return Err(Error::invalid_argument(format!(
                "temperature {} outside [0, 1]",
                temperature
            ))
            .with_operation("generator::sampling"));
        }
        if max_tokens == 0 {
            return Err(Error::invalid_argument("max_tokens must be positive")
                .with_operation("generator::sampling"));
        }
        Ok(Self {
            temperature,
            max_tokens,
        })
    }
}

/// Generate text from role-tagged messages.
#[allow(async_fn_in_trait)]
pub trait TextGenerator {
    /// Returns the generated text with surrounding whitespace trimmed.
    ///
    /// Fails with `EmptyResponse` when the backend produced no text at all.
    async fn generate(&self, messages: Vec<ChatMessage>, params: &SamplingParams) -> Result<String>;
}

impl<P: LlmProvider> TextGenerator for P {
    async fn generate(&self, messages: Vec<ChatMessage>, params: &SamplingParams) -> Result<String> {
        let request = CompletionRequest::new(messages)
            .with_temperature(params.temperature)
            .with_max_tokens(params.max_tokens);

        let response = self
            .complete(request)
            .await
            .map_err(|e| Error::from(e).with_context("provider", self.name().to_string()))?;

        debug!(
            provider = self.name(),
            model = %response.model,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "completion received"
        );
        if response.finish_reason == FinishReason::Length {
            warn!(
                provider = self.name(),
                max_tokens = params.max_tokens,
                "completion truncated at max_tokens"
            );
        }

        let content = response.content.ok_or_else(|| {
            Error::empty_response("no text in completion")
                .with_operation("generator::generate")
                .with_context("provider", self.name().to_string())
        })?;

        Ok(content.trim().to_string())
    }
}
