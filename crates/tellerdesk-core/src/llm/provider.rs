//! LlmProvider trait definition.
//!
//! The seam between the conversation loop and the hosted completion
//! endpoint. The production implementation lives in tellerdesk-infra
//! (`MistralProvider`); tests substitute stubs.

use tellerdesk_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for hosted completion backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). One
/// completion per call; streaming is deliberately absent from this surface.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "mistral").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
