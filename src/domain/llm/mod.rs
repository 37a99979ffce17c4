//! LLM provider domain models and traits

mod client;
mod message;
mod provider;
mod request;
mod response;

pub use client::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, LlmClient};
pub use message::{Message, MessageRole};
pub use provider::LlmProvider;
pub use request::{LlmRequest, LlmRequestBuilder};
pub use response::{FinishReason, LlmResponse, Usage};

#[cfg(test)]
pub use provider::mock::MockLlmProvider;
