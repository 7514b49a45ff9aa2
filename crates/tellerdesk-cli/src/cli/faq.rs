//! FAQ inspection command: print the table the assistant would be grounded on.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use tellerdesk_infra::faq::{candidate_paths, load_first};

/// Load and print the FAQ table.
///
/// A missing or unreadable table is not an error here -- the command reports
/// the same degraded state the chat session would start in.
pub fn show_faq(override_path: Option<PathBuf>) -> Result<()> {
    let candidates = candidate_paths(override_path.as_deref());

    let entries = match load_first(&candidates) {
        Ok(entries) => entries,
        Err(err) => {
            println!();
            println!(
                "  {} No FAQ available ({err}). Chat sessions will run without grounding.",
                style("i").blue().bold()
            );
            println!();
            return Ok(());
        }
    };

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Question").fg(Color::White),
        Cell::new("Answer").fg(Color::White),
    ]);

    for entry in &entries {
        table.add_row(vec![
            Cell::new(&entry.question).fg(Color::Cyan),
            Cell::new(&entry.answer),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} FAQ entr{}",
        style(entries.len()).bold(),
        if entries.len() == 1 { "y" } else { "ies" }
    );
    println!();

    Ok(())
}
