//! FAQ table types.
//!
//! The FAQ source is a two-column CSV (question, answer) loaded once per
//! session. Loading failures are typed so the caller decides whether to
//! degrade to a no-context session or surface the error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One question/answer row from the FAQ table.
///
/// Parsed positionally from the first two columns of the source file.
/// A row with fewer than two columns yields an empty `answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Errors from loading the FAQ table.
#[derive(Debug, Error)]
pub enum FaqError {
    #[error("no FAQ file found at any candidate path")]
    NotFound,

    #[error("failed to read FAQ file: {0}")]
    Io(String),

    #[error("malformed FAQ file: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_entry_new() {
        let entry = FaqEntry::new("How do I open an account?", "Visit any branch.");
        assert_eq!(entry.question, "How do I open an account?");
        assert_eq!(entry.answer, "Visit any branch.");
    }

    #[test]
    fn test_faq_entry_serde_roundtrip() {
        let entry = FaqEntry::new("What are your hours?", "9-5 weekdays.");
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: FaqEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_faq_error_display() {
        assert_eq!(
            FaqError::NotFound.to_string(),
            "no FAQ file found at any candidate path"
        );
        assert!(FaqError::Io("permission denied".to_string())
            .to_string()
            .contains("permission denied"));
    }
}
