//! All AI/LLM functionality

pub mod client;
pub mod prompt_builder;

use async_trait::async_trait;

use crate::errors::SummarizerError;

// Re-export main types for convenience
pub use client::LlmClient;
pub use prompt_builder::build_chunk_prompt;

/// A text completion service: one prompt in, one completion out.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, SummarizerError>;
}
