//! Infrastructure implementations for tellerdesk.
//!
//! Everything that touches the outside world lives here: the Mistral HTTP
//! provider, the CSV FAQ loader, and the TOML config loader.

pub mod config;
pub mod faq;
pub mod llm;
