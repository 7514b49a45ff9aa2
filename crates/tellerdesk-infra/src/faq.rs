//! FAQ table loader.
//!
//! Reads the first existing candidate CSV into a list of [`FaqEntry`].
//! The first column is the question, the second the answer; the header row
//! is skipped. Failures come back as typed [`FaqError`] values -- the CLI
//! decides whether to degrade to a no-context session.

use std::path::{Path, PathBuf};

use tellerdesk_types::faq::{FaqEntry, FaqError};

/// Relative paths tried, in order, when no explicit path is configured.
pub const DEFAULT_FAQ_PATHS: &[&str] = &["hbdb_faqs.csv", "data/hbdb_faqs.csv"];

/// Build the candidate list: the override (if any) first, then the defaults.
pub fn candidate_paths(override_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = override_path {
        candidates.push(path.to_path_buf());
    }
    candidates.extend(DEFAULT_FAQ_PATHS.iter().map(PathBuf::from));
    candidates
}

/// Load the FAQ table from the first candidate path that exists.
///
/// Returns [`FaqError::NotFound`] when no candidate exists. A candidate
/// that exists but cannot be read or parsed surfaces its own error rather
/// than falling through to later candidates -- a present-but-broken file is
/// worth telling the user about.
pub fn load_first(candidates: &[PathBuf]) -> Result<Vec<FaqEntry>, FaqError> {
    for path in candidates {
        if path.exists() {
            return load_file(path);
        }
    }
    Err(FaqError::NotFound)
}

/// Parse one CSV file into FAQ entries.
///
/// Rows with fewer than two columns get an empty answer; rows with an empty
/// question are skipped.
fn load_file(path: &Path) -> Result<Vec<FaqEntry>, FaqError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| FaqError::Io(e.to_string()))?;

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| FaqError::Malformed(e.to_string()))?;
        let question = record.get(0).unwrap_or("").trim();
        if question.is_empty() {
            continue;
        }
        let answer = record.get(1).unwrap_or("").trim();
        entries.push(FaqEntry::new(question, answer));
    }

    Ok(entries)
}
