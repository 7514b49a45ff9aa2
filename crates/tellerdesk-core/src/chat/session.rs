//! Session manager for chat sessions.
//!
//! Wraps a `ChatSession` with turn tracking and lifecycle management.

use chrono::Utc;
use tellerdesk_types::chat::{ChatSession, SessionStatus};

/// Manages the lifecycle and state of a single chat session.
pub struct SessionManager {
    session: ChatSession,
    /// Turn counter (incremented on each user+assistant exchange).
    turn_count: u32,
}

impl SessionManager {
    /// Create a new session manager wrapping an existing session.
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            turn_count: 0,
        }
    }

    /// Access the underlying chat session.
    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Current turn count within this session.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Record one completed exchange (user message + assistant reply).
    pub fn record_exchange(&mut self) {
        self.turn_count += 1;
        self.session.message_count += 2;
    }

    /// Mark the session as completed and stamp the end time.
    pub fn mark_completed(&mut self) {
        self.session.status = SessionStatus::Completed;
        self.session.ended_at = Some(Utc::now());
    }
}
