//! System prompt assembly from the FAQ table.
//!
//! When FAQ entries are present, the system prompt is a fixed instructional
//! preamble followed by every entry serialized as a `Q:/A:` block, in file
//! order, blank-line separated. There is no ranking, filtering, or
//! truncation -- the whole table ships with every request, which only works
//! for small tables.

use tellerdesk_types::faq::FaqEntry;

/// Fixed instructional text that precedes the FAQ block.
pub const FAQ_PREAMBLE: &str = "You are the HBDB banking assistant. Answer customer questions about \
accounts, cards, loans, and transfers. Use the reference questions and \
answers below when they apply, and say so when they do not.";

/// Builds the system prompt for a session from its FAQ table.
pub struct FaqPromptBuilder;

impl FaqPromptBuilder {
    /// Build the system prompt, or `None` when there are no FAQ entries.
    ///
    /// With no entries the request carries no system prompt at all -- the
    /// no-context degradation mode.
    pub fn build(entries: &[FaqEntry]) -> Option<String> {
        if entries.is_empty() {
            return None;
        }

        let blocks: Vec<String> = entries
            .iter()
            .map(|e| format!("Q: {}\nA: {}", e.question, e.answer))
            .collect();

        Some(format!("{FAQ_PREAMBLE}\n\n{}", blocks.join("\n\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_contains_entries_verbatim_in_order() {
        let entries = vec![
            FaqEntry::new("How do I open an account?", "Visit any branch."),
            FaqEntry::new("What are your hours?", "9-5 weekdays."),
        ];

        let prompt = FaqPromptBuilder::build(&entries).unwrap();

        assert!(prompt.starts_with(FAQ_PREAMBLE));
        assert!(prompt.contains("Q: How do I open an account?\nA: Visit any branch."));
        assert!(prompt.contains("Q: What are your hours?\nA: 9-5 weekdays."));

        // File order is preserved
        let first = prompt.find("How do I open an account?").unwrap();
        let second = prompt.find("What are your hours?").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_build_blank_line_separators() {
        let entries = vec![
            FaqEntry::new("Q1", "A1"),
            FaqEntry::new("Q2", "A2"),
        ];

        let prompt = FaqPromptBuilder::build(&entries).unwrap();
        assert!(prompt.contains("Q: Q1\nA: A1\n\nQ: Q2\nA: A2"));
    }

    #[test]
    fn test_build_empty_returns_none() {
        assert!(FaqPromptBuilder::build(&[]).is_none());
    }

    #[test]
    fn test_build_empty_answer_still_renders() {
        let entries = vec![FaqEntry::new("Orphan question?", "")];
        let prompt = FaqPromptBuilder::build(&entries).unwrap();
        assert!(prompt.contains("Q: Orphan question?\nA: "));
    }
}
