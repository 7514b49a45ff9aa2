//! Terminal markdown rendering for assistant replies.
//!
//! Prose goes through `termimad`. FAQ answers are plain text or light
//! markdown, so there is no code-block highlighting path here.

use termimad::MadSkin;

/// Terminal markdown renderer.
pub struct ChatRenderer {
    skin: MadSkin,
}

impl ChatRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);
        skin.bold
            .set_fg(termimad::crossterm::style::Color::Cyan);

        Self { skin }
    }

    /// Render a complete markdown reply for terminal display.
    pub fn render_final(&self, markdown: &str) -> String {
        self.skin.term_text(markdown).to_string()
    }

    /// Print the stats footer after an assistant reply.
    pub fn print_stats_footer(&self, output_tokens: u32, response_ms: u64, model: &str) {
        let seconds = response_ms as f64 / 1000.0;
        let footer = format!(
            "  {} {} tokens {} {:.1}s {} {}",
            console::style("|").dim(),
            console::style(output_tokens).dim(),
            console::style("\u{00b7}").dim(),
            console::style(seconds).dim(),
            console::style("\u{00b7}").dim(),
            console::style(model).dim(),
        );
        println!("{footer}");
    }
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}
