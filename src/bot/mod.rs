//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `message_handler`: Handles commands, sub-dialogue input, and free-text chat
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `ui_builder`: Creates keyboards and formats messages

pub mod callback_handler;
pub mod message_handler;
pub mod ui_builder;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::dictionary::DictionaryStore;
use crate::session::SessionStore;

/// Session store shared across handler invocations
pub type SharedSessions = Arc<Mutex<SessionStore>>;

/// Dictionary store shared across handler invocations
pub type SharedDictionaries = Arc<Mutex<DictionaryStore>>;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;

// Re-export utility functions that might be used elsewhere
pub use ui_builder::{
    create_dictionary_keyboard, create_language_keyboard, format_word_list, greeting_message,
};
