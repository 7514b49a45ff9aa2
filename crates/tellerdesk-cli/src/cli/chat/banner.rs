//! Welcome banner display for chat sessions.

use console::style;

/// Print the welcome banner at the start of a chat session.
///
/// Shows the assistant identity, model, session id, and how many FAQ
/// entries are grounding the session.
pub fn print_welcome_banner(model: &str, session_id: &str, faq_count: usize) {
    println!();
    println!("  {}", style("HBDB Teller Desk").cyan().bold());
    println!(
        "  {}",
        style("Banking assistant for accounts, cards, loans, and transfers").dim()
    );
    println!();
    println!("  {}  {}", style("Model:").bold(), style(model).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    if faq_count > 0 {
        println!(
            "  {}  {} FAQ entries loaded",
            style("FAQ:").bold(),
            style(faq_count).green()
        );
    } else {
        println!(
            "  {}  {}",
            style("FAQ:").bold(),
            style("none found, answering without grounding").yellow()
        );
    }
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
