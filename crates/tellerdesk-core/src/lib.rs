//! Business logic for tellerdesk.
//!
//! This crate defines the provider trait (the "port" the infrastructure
//! layer implements) and the conversation machinery built on it. It depends
//! only on `tellerdesk-types` -- never on `tellerdesk-infra` or any
//! HTTP/filesystem crate.

pub mod chat;
pub mod llm;
