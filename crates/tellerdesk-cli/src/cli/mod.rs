//! CLI command definitions for the `tdesk` binary.
//!
//! Uses clap derive macros for argument parsing. `tdesk chat` is the main
//! entry point; `tdesk faq` inspects the FAQ table the assistant would be
//! grounded on.

pub mod chat;
pub mod faq;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Terminal assistant for HBDB banking support.
#[derive(Parser)]
#[command(name = "tdesk", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat {
        /// Path to the FAQ CSV (overrides the default candidates).
        #[arg(long)]
        faq: Option<PathBuf>,

        /// Model identifier to use.
        #[arg(long)]
        model: Option<String>,

        /// Send the full conversation history with every request.
        #[arg(long, conflicts_with = "history_window")]
        full_history: bool,

        /// Number of trailing messages sent with each request.
        #[arg(long)]
        history_window: Option<usize>,

        /// Surface full error diagnostics instead of truncating them.
        #[arg(long)]
        no_truncate: bool,

        /// API key for scripted use (prompted interactively when omitted).
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Show the FAQ entries that would ground the assistant.
    Faq {
        /// Path to the FAQ CSV (overrides the default candidates).
        #[arg(long)]
        faq: Option<PathBuf>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
