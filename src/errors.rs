//! # Error Types Module
//!
//! This module defines the domain error taxonomy shared by the stores, the
//! completion client, and the bot handlers. Every variant is recovered at the
//! handler boundary and turned into a user-facing message; none of them is
//! allowed to kill the dispatch loop.

/// Domain errors for the language learning bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuddyError {
    /// Empty or malformed user-supplied text
    Validation(String),
    /// A dictionary with that name already exists
    DuplicateName(String),
    /// The normalized word already exists in the dictionary
    DuplicateWord(String),
    /// Reference to an unknown dictionary or session
    NotFound(String),
    /// Action attempted before required setup (e.g. chatting before /start)
    Precondition(String),
    /// The external completion service failed or timed out
    CompletionUnavailable(String),
}

impl std::fmt::Display for BuddyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuddyError::Validation(msg) => write!(f, "Validation error: {msg}"),
            BuddyError::DuplicateName(msg) => write!(f, "Duplicate name error: {msg}"),
            BuddyError::DuplicateWord(msg) => write!(f, "Duplicate word error: {msg}"),
            BuddyError::NotFound(msg) => write!(f, "Not found error: {msg}"),
            BuddyError::Precondition(msg) => write!(f, "Precondition error: {msg}"),
            BuddyError::CompletionUnavailable(msg) => {
                write!(f, "Completion unavailable error: {msg}")
            }
        }
    }
}

impl std::error::Error for BuddyError {}
