//! Shared domain types for tellerdesk.
//!
//! Everything in this crate is plain data: message and request shapes for
//! the LLM provider, the FAQ table row, the session record, and the chat
//! configuration. No I/O lives here.

pub mod chat;
pub mod config;
pub mod faq;
pub mod llm;
