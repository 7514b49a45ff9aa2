//! Session-scoped conversation context.
//!
//! `ChatContext` holds everything one session needs to build completion
//! requests: the configuration, the FAQ table (loaded once, cached for the
//! session lifetime), and the running conversation history. There are no
//! process-wide singletons; the loop owns its context and drops it at
//! session end.

use tellerdesk_types::config::{ChatConfig, HistoryWindow};
use tellerdesk_types::faq::FaqEntry;
use tellerdesk_types::llm::{CompletionRequest, Message};

use super::prompt::FaqPromptBuilder;

/// Holds all state for one chat session.
#[derive(Debug, Clone)]
pub struct ChatContext {
    /// Session configuration.
    pub config: ChatConfig,
    /// FAQ entries loaded at session start. Empty means no-context mode.
    pub faq_entries: Vec<FaqEntry>,
    /// Running conversation history (user + assistant messages).
    pub conversation_history: Vec<Message>,
    /// System prompt assembled once from the FAQ table.
    system_prompt: Option<String>,
}

impl ChatContext {
    /// Create a context for a new session.
    ///
    /// The system prompt is built immediately; the FAQ table is assumed
    /// immutable for the session, so it is never rebuilt.
    pub fn new(config: ChatConfig, faq_entries: Vec<FaqEntry>) -> Self {
        let system_prompt = FaqPromptBuilder::build(&faq_entries);
        Self {
            config,
            faq_entries,
            conversation_history: Vec::new(),
            system_prompt,
        }
    }

    /// Append a user message to the history.
    pub fn add_user_message(&mut self, content: String) {
        self.conversation_history.push(Message::user(content));
    }

    /// Append an assistant message to the history.
    pub fn add_assistant_message(&mut self, content: String) {
        self.conversation_history.push(Message::assistant(content));
    }

    /// Number of FAQ entries grounding this session.
    pub fn faq_count(&self) -> usize {
        self.faq_entries.len()
    }

    /// The trailing slice of history included in the next request.
    pub fn window(&self) -> &[Message] {
        match self.config.history_window {
            HistoryWindow::All => &self.conversation_history,
            HistoryWindow::Last(n) => {
                let start = self.conversation_history.len().saturating_sub(n);
                &self.conversation_history[start..]
            }
        }
    }

    /// Build the completion request for the current state.
    pub fn build_request(&self) -> CompletionRequest {
        CompletionRequest {
            model: self.config.model.clone(),
            messages: self.window().to_vec(),
            system: self.system_prompt.clone(),
            max_tokens: self.config.max_tokens,
            temperature: Some(self.config.temperature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tellerdesk_types::llm::MessageRole;

    fn window_config(window: HistoryWindow) -> ChatConfig {
        ChatConfig {
            history_window: window,
            ..ChatConfig::default()
        }
    }

    #[test]
    fn test_add_messages_ordering() {
        let mut ctx = ChatContext::new(ChatConfig::default(), vec![]);

        ctx.add_user_message("Hello!".to_string());
        ctx.add_assistant_message("Hi, how can I help?".to_string());

        assert_eq!(ctx.conversation_history.len(), 2);
        assert_eq!(ctx.conversation_history[0].role, MessageRole::User);
        assert_eq!(ctx.conversation_history[0].content, "Hello!");
        assert_eq!(ctx.conversation_history[1].role, MessageRole::Assistant);
    }

    #[test]
    fn test_window_full_history() {
        let mut ctx = ChatContext::new(window_config(HistoryWindow::All), vec![]);
        for i in 0..8 {
            ctx.add_user_message(format!("m{i}"));
        }
        assert_eq!(ctx.window().len(), 8);
    }

    #[test]
    fn test_window_last_n() {
        let mut ctx = ChatContext::new(window_config(HistoryWindow::Last(5)), vec![]);
        for i in 0..8 {
            ctx.add_user_message(format!("m{i}"));
        }
        let window = ctx.window();
        assert_eq!(window.len(), 5);
        assert_eq!(window[0].content, "m3");
        assert_eq!(window[4].content, "m7");
    }

    #[test]
    fn test_window_shorter_than_limit() {
        let mut ctx = ChatContext::new(window_config(HistoryWindow::Last(5)), vec![]);
        ctx.add_user_message("only one".to_string());
        assert_eq!(ctx.window().len(), 1);
    }

    #[test]
    fn test_build_request_with_faq_has_system_prompt() {
        let entries = vec![FaqEntry::new("How do I open an account?", "Visit any branch.")];
        let mut ctx = ChatContext::new(ChatConfig::default(), entries);
        ctx.add_user_message("hi".to_string());

        let request = ctx.build_request();
        let system = request.system.unwrap();
        assert!(system.contains("Q: How do I open an account?"));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.model, "mistral-large-latest");
    }

    #[test]
    fn test_build_request_without_faq_has_no_system_prompt() {
        let mut ctx = ChatContext::new(ChatConfig::default(), vec![]);
        ctx.add_user_message("hi".to_string());

        let request = ctx.build_request();
        assert!(request.system.is_none());
    }

    #[test]
    fn test_build_request_applies_window() {
        let mut ctx = ChatContext::new(window_config(HistoryWindow::Last(2)), vec![]);
        ctx.add_user_message("first".to_string());
        ctx.add_assistant_message("reply".to_string());
        ctx.add_user_message("second".to_string());

        let request = ctx.build_request();
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].content, "reply");
        assert_eq!(request.messages[1].content, "second");
    }

    #[test]
    fn test_faq_count() {
        let entries = vec![
            FaqEntry::new("q1", "a1"),
            FaqEntry::new("q2", "a2"),
        ];
        let ctx = ChatContext::new(ChatConfig::default(), entries);
        assert_eq!(ctx.faq_count(), 2);
    }
}
