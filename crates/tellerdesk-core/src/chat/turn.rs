//! Turn execution: one completion request per user submission.
//!
//! `TurnEngine` owns the Processing half of the conversation loop's state
//! machine. It builds the request from the session context, awaits the
//! provider under a bounded timeout and a cancellation token tied to session
//! teardown, and decides how failures surface: every provider error degrades
//! to an inline diagnostic string that becomes the assistant message, so the
//! loop keeps running. Only cancellation aborts the turn.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::warn;

use tellerdesk_types::config::{ChatConfig, ErrorTruncation};
use tellerdesk_types::llm::{CompletionResponse, LlmError};

use super::context::ChatContext;
use crate::llm::provider::LlmProvider;

/// Outcome of one turn.
#[derive(Debug)]
pub enum TurnOutcome {
    /// The model replied.
    Reply(CompletionResponse),
    /// The completion failed; the diagnostic becomes the assistant message.
    Degraded(String),
    /// Session teardown was requested while the request was in flight.
    /// The caller rolls back the pending user message.
    Cancelled,
}

/// Executes completion turns for one session.
pub struct TurnEngine {
    request_timeout: Duration,
    error_truncation: ErrorTruncation,
}

impl TurnEngine {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            error_truncation: config.error_truncation,
        }
    }

    /// Run one turn: build the request from `context` and await the provider.
    ///
    /// The user message for this turn must already be in the context's
    /// history. On success or degradation the caller appends the returned
    /// content as the assistant message.
    pub async fn run_turn(
        &self,
        provider: &impl LlmProvider,
        context: &ChatContext,
        cancel: &CancellationToken,
    ) -> TurnOutcome {
        let request = context.build_request();

        tokio::select! {
            _ = cancel.cancelled() => TurnOutcome::Cancelled,
            result = tokio::time::timeout(self.request_timeout, provider.complete(&request)) => {
                match result {
                    Ok(Ok(response)) => TurnOutcome::Reply(response),
                    Ok(Err(err)) => {
                        warn!(provider = provider.name(), error = %err, "completion failed");
                        TurnOutcome::Degraded(self.degrade(&err))
                    }
                    Err(_) => {
                        let err = LlmError::Timeout {
                            secs: self.request_timeout.as_secs(),
                        };
                        warn!(provider = provider.name(), error = %err, "completion failed");
                        TurnOutcome::Degraded(self.degrade(&err))
                    }
                }
            }
        }
    }

    /// Format a provider error as the inline diagnostic message.
    fn degrade(&self, err: &LlmError) -> String {
        let diagnostic = format!("Error: {err}");
        match self.error_truncation {
            ErrorTruncation::None => diagnostic,
            ErrorTruncation::Chars(n) => diagnostic.chars().take(n).collect(),
        }
    }
}
