//! Main chat loop orchestration.
//!
//! Coordinates the complete session lifecycle: FAQ load, credential entry,
//! welcome banner, the input loop with turn execution, slash commands, and
//! session teardown. The loop alternates between two states -- idle
//! (awaiting input) and processing (one in-flight completion) -- and a
//! second submission cannot occur until the current turn finishes.

use std::time::Instant;

use console::style;
use dialoguer::Password;
use secrecy::SecretString;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use tellerdesk_core::chat::context::ChatContext;
use tellerdesk_core::chat::session::SessionManager;
use tellerdesk_core::chat::turn::{TurnEngine, TurnOutcome};
use tellerdesk_infra::faq::{candidate_paths, load_first};
use tellerdesk_infra::llm::mistral::MistralProvider;
use tellerdesk_types::chat::ChatSession;
use tellerdesk_types::config::ChatConfig;
use tellerdesk_types::llm::MessageRole;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Shown when a submission arrives and no API key was configured.
/// No request is issued and the history is left untouched.
const MISSING_KEY_NOTICE: &str =
    "No API key configured. Restart `tdesk chat` and enter one, or pass --api-key.";

/// Ask for the API key unless one came in on the command line.
///
/// The prompt is hidden and accepts an empty entry: the session still
/// starts, but every submission then surfaces the missing-key error
/// without a network call.
fn resolve_api_key(flag: Option<String>) -> anyhow::Result<Option<SecretString>> {
    let raw = match flag {
        Some(key) => key,
        None => Password::new()
            .with_prompt("Mistral API key (leave empty to start without one)")
            .allow_empty_password(true)
            .interact()?,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(SecretString::from(trimmed.to_string())))
    }
}

/// Run the interactive chat loop.
pub async fn run_chat_loop(config: ChatConfig, api_key: Option<String>) -> anyhow::Result<()> {
    // Load the FAQ table once; any failure degrades to a no-context session.
    let candidates = candidate_paths(config.faq_path.as_deref());
    let faq_entries = match load_first(&candidates) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(error = %err, "FAQ unavailable, continuing without grounding");
            Vec::new()
        }
    };

    let provider = match resolve_api_key(api_key)? {
        Some(key) => Some(MistralProvider::new(key, config.model.clone())?),
        None => None,
    };

    let session = ChatSession::new(config.model.clone());
    let session_id = session.id.to_string();
    info!(session = %session_id, faq_entries = faq_entries.len(), "chat session started");

    let mut session_manager = SessionManager::new(session);
    let mut context = ChatContext::new(config.clone(), faq_entries);
    let engine = TurnEngine::new(&config);

    // Cancellation is tied to session teardown: dropping out of the loop
    // cancels any turn still in flight.
    let cancel = CancellationToken::new();

    print_welcome_banner(&config.model, &session_id, context.faq_count());

    let renderer = ChatRenderer::new();
    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) =
        ChatInput::new(prompt).map_err(|e| anyhow::anyhow!("failed to initialize input: {e}"))?;

    loop {
        let event = chat_input.read_line().await;
        match event {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) => {
                // Empty or whitespace-only submissions are a no-op.
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                            continue;
                        }
                        ChatCommand::Clear => {
                            chat_input.clear();
                            continue;
                        }
                        ChatCommand::History => {
                            print_history(&context);
                            continue;
                        }
                        ChatCommand::Faq => {
                            print_faq_status(&context);
                            continue;
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                            continue;
                        }
                    }
                }

                // Blocking credential check: no provider, no call.
                let Some(provider) = provider.as_ref() else {
                    println!("\n  {} {}\n", style("!").red().bold(), MISSING_KEY_NOTICE);
                    continue;
                };

                context.add_user_message(text);

                let spinner = indicatif::ProgressBar::new_spinner();
                spinner.set_style(
                    indicatif::ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .unwrap(),
                );
                spinner.set_message("thinking...");
                spinner.enable_steady_tick(std::time::Duration::from_millis(80));

                let start_time = Instant::now();
                let outcome = engine.run_turn(provider, &context, &cancel).await;
                spinner.finish_and_clear();

                match outcome {
                    TurnOutcome::Reply(response) => {
                        let response_ms = start_time.elapsed().as_millis() as u64;
                        println!();
                        println!("  {}", style("Teller >").cyan().bold());
                        println!("  {}", renderer.render_final(&response.content).trim());
                        renderer.print_stats_footer(
                            response.usage.output_tokens,
                            response_ms,
                            &context.config.model,
                        );
                        println!();
                        context.add_assistant_message(response.content);
                        session_manager.record_exchange();
                    }
                    TurnOutcome::Degraded(diagnostic) => {
                        println!();
                        println!("  {} {}", style("!").yellow().bold(), &diagnostic);
                        println!();
                        context.add_assistant_message(diagnostic);
                        session_manager.record_exchange();
                    }
                    TurnOutcome::Cancelled => {
                        // Roll back the unanswered user message so history
                        // never ends on a dangling turn.
                        context.conversation_history.pop();
                        println!("\n  {}", style("Turn cancelled, session ending.").dim());
                        break;
                    }
                }
            }
        }
    }

    cancel.cancel();
    session_manager.mark_completed();
    info!(
        session = %session_id,
        turns = session_manager.turn_count(),
        "chat session ended"
    );
    Ok(())
}

/// Print the session's conversation history with truncated previews.
fn print_history(context: &ChatContext) {
    if context.conversation_history.is_empty() {
        println!("\n  {}\n", style("No messages yet.").dim());
        return;
    }

    println!();
    for msg in &context.conversation_history {
        let role_label = match msg.role {
            MessageRole::User => format!("{}", style("You").green()),
            MessageRole::Assistant => format!("{}", style("Teller").cyan()),
            MessageRole::System => "System".to_string(),
        };
        let preview: String = if msg.content.chars().count() > 100 {
            let head: String = msg.content.chars().take(97).collect();
            format!("{head}...")
        } else {
            msg.content.clone()
        };
        println!("  {} {}", style(role_label).bold(), preview);
    }
    println!();
}

/// Print how the session is grounded.
fn print_faq_status(context: &ChatContext) {
    println!();
    if context.faq_count() > 0 {
        println!(
            "  {} Grounded on {} FAQ entries. Run {} to inspect them.",
            style("*").cyan().bold(),
            style(context.faq_count()).bold(),
            style("tdesk faq").yellow()
        );
    } else {
        println!(
            "  {} No FAQ table loaded; answers are ungrounded.",
            style("i").blue().bold()
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_notice_mentions_remedies() {
        assert!(MISSING_KEY_NOTICE.contains("API key"));
        assert!(MISSING_KEY_NOTICE.contains("--api-key"));
    }
}
