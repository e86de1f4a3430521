//! # goalcraft LLM
//!
//! Everything goalcraft needs to talk to a language model.
//!
//! ## Core Concepts
//! - **Messages**: Role-tagged chat turns (system instruction + user prompt)
//! - **Provider**: Trait-based LLM communication (Groq, OpenAI, local OpenAI-compatible, Anthropic)
//! - **Generator**: The one capability the agent consumes: messages + sampling in, trimmed text out

pub mod error;
pub mod generator;
pub mod provider;

pub use error::{Error, ErrorKind, ErrorStatus, Result};
pub use generator::{SamplingParams, TextGenerator};
pub use provider::{
    AnthropicProvider, ChatMessage, CompletionRequest, CompletionResponse, FinishReason,
    LlmProvider, OpenAIProvider, ProviderConfig, ProviderError, ProviderType, Role, Usage,
};
