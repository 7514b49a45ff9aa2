//! tellerdesk CLI entry point.
//!
//! Binary name: `tdesk`
//!
//! Parses CLI arguments, loads configuration, then dispatches to the chat
//! loop or one of the inspection commands.

mod cli;

use std::path::Path;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use tellerdesk_types::config::{ErrorTruncation, HistoryWindow};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,tellerdesk=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Chat {
            faq,
            model,
            full_history,
            history_window,
            no_truncate,
            api_key,
        } => {
            let mut config = tellerdesk_infra::config::load_chat_config(Path::new(".")).await;
            if let Some(model) = model {
                config.model = model;
            }
            if full_history {
                config.history_window = HistoryWindow::All;
            } else if let Some(n) = history_window {
                config.history_window = HistoryWindow::Last(n);
            }
            if no_truncate {
                config.error_truncation = ErrorTruncation::None;
            }
            if let Some(path) = faq {
                config.faq_path = Some(path);
            }

            cli::chat::run_chat_loop(config, api_key).await?;
        }

        Commands::Faq { faq } => {
            let config = tellerdesk_infra::config::load_chat_config(Path::new(".")).await;
            cli::faq::show_faq(faq.or(config.faq_path))?;
        }

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "tdesk", &mut std::io::stdout());
        }
    }

    Ok(())
}
