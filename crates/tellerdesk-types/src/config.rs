//! Chat configuration types.
//!
//! `ChatConfig` represents `tellerdesk.toml` plus CLI overrides. The five
//! source deployments of this assistant disagreed on two behaviors -- how
//! much history to send per request and whether to truncate error
//! diagnostics -- so both are configuration here rather than hard-coded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How much conversation history is sent with each completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HistoryWindow {
    /// Send the full conversation history.
    All,
    /// Send only the most recent N messages.
    Last(usize),
}

impl fmt::Display for HistoryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryWindow::All => write!(f, "all"),
            HistoryWindow::Last(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for HistoryWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(HistoryWindow::All),
            other => other
                .parse::<usize>()
                .map(HistoryWindow::Last)
                .map_err(|_| format!("invalid history window: '{s}' (expected 'all' or a count)")),
        }
    }
}

impl TryFrom<String> for HistoryWindow {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HistoryWindow> for String {
    fn from(w: HistoryWindow) -> String {
        w.to_string()
    }
}

/// Whether error diagnostics surfaced in the conversation are truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ErrorTruncation {
    /// Surface the full diagnostic.
    None,
    /// Truncate the diagnostic to N characters.
    Chars(usize),
}

impl fmt::Display for ErrorTruncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorTruncation::None => write!(f, "none"),
            ErrorTruncation::Chars(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for ErrorTruncation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(ErrorTruncation::None),
            other => other
                .parse::<usize>()
                .map(ErrorTruncation::Chars)
                .map_err(|_| {
                    format!("invalid error truncation: '{s}' (expected 'none' or a length)")
                }),
        }
    }
}

impl TryFrom<String> for ErrorTruncation {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ErrorTruncation> for String {
    fn from(t: ErrorTruncation) -> String {
        t.to_string()
    }
}

/// Top-level configuration for a chat session.
///
/// Loaded from `tellerdesk.toml` in the working directory. All fields have
/// defaults, so a missing or partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Model identifier sent with every completion request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens the model may generate per reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// History window sent per request: `"all"` or a quoted message count
    /// (e.g. `"5"`).
    #[serde(default = "default_history_window")]
    pub history_window: HistoryWindow,

    /// Error diagnostic truncation: `"none"` or a quoted character length
    /// (e.g. `"100"`).
    #[serde(default = "default_error_truncation")]
    pub error_truncation: ErrorTruncation,

    /// Upper bound on a single completion request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Explicit FAQ file path. When unset, the default candidates are tried.
    #[serde(default)]
    pub faq_path: Option<PathBuf>,
}

fn default_model() -> String {
    "mistral-large-latest".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_history_window() -> HistoryWindow {
    HistoryWindow::Last(5)
}

fn default_error_truncation() -> ErrorTruncation {
    ErrorTruncation::Chars(100)
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            history_window: default_history_window(),
            error_truncation: default_error_truncation(),
            request_timeout_secs: default_request_timeout_secs(),
            faq_path: None,
        }
    }
}
