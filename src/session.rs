//! # Session State Module
//!
//! Per-user conversation state: the selected learning language, the ordered
//! turn history, and whether the user has entered the free-form chat. Sessions
//! are created on first language selection and live for the process lifetime;
//! there is no eviction.

use std::collections::HashMap;

use crate::errors::BuddyError;
use crate::language::LearningLanguage;

/// Speaker role of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One message in a conversation. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

/// State for a single user
#[derive(Debug, Clone)]
pub struct Session {
    pub learning_language: LearningLanguage,
    turns: Vec<Turn>,
    chatting: bool,
}

impl Session {
    fn new(learning_language: LearningLanguage) -> Self {
        Self {
            learning_language,
            turns: Vec::new(),
            chatting: false,
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }
}

/// In-memory store of all user sessions, keyed by Telegram user id
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<u64, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select (or re-select) the learning language for a user.
    ///
    /// Creates the session if absent. Re-selecting overwrites the language
    /// but keeps the accumulated turn history.
    pub fn select_language(&mut self, user_id: u64, language: LearningLanguage) {
        self.sessions
            .entry(user_id)
            .and_modify(|session| session.learning_language = language)
            .or_insert_with(|| Session::new(language));
    }

    /// Append a turn to the user's history.
    ///
    /// The caller must have selected a language first.
    pub fn append_turn(
        &mut self,
        user_id: u64,
        role: Role,
        text: impl Into<String>,
    ) -> Result<(), BuddyError> {
        let session = self.session_mut(user_id)?;
        session.turns.push(Turn {
            role,
            text: text.into(),
        });
        Ok(())
    }

    /// Full ordered turn history; empty if the user has no session or no turns yet
    pub fn turns(&self, user_id: u64) -> &[Turn] {
        self.sessions
            .get(&user_id)
            .map(|session| session.turns())
            .unwrap_or(&[])
    }

    /// Mark the session as being in conversation (entered via /chat)
    pub fn begin_chat(&mut self, user_id: u64) -> Result<(), BuddyError> {
        self.session_mut(user_id)?.chatting = true;
        Ok(())
    }

    /// Whether free text from this user should continue a conversation
    pub fn is_chatting(&self, user_id: u64) -> bool {
        self.sessions
            .get(&user_id)
            .map(|session| session.chatting)
            .unwrap_or(false)
    }

    pub fn language(&self, user_id: u64) -> Option<LearningLanguage> {
        self.sessions
            .get(&user_id)
            .map(|session| session.learning_language)
    }

    fn session_mut(&mut self, user_id: u64) -> Result<&mut Session, BuddyError> {
        self.sessions.get_mut(&user_id).ok_or_else(|| {
            BuddyError::Precondition(format!("no session for user {user_id}; select a language first"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_without_session_is_a_precondition_error() {
        let mut store = SessionStore::new();
        let err = store.append_turn(1, Role::User, "hola").unwrap_err();
        assert!(matches!(err, BuddyError::Precondition(_)));
        assert!(store.turns(1).is_empty());
    }

    #[test]
    fn test_reselecting_language_keeps_history() {
        let mut store = SessionStore::new();
        store.select_language(1, LearningLanguage::Spanish);
        store.append_turn(1, Role::User, "hola").unwrap();
        store.append_turn(1, Role::Assistant, "¡Hola!").unwrap();

        store.select_language(1, LearningLanguage::French);

        assert_eq!(store.language(1), Some(LearningLanguage::French));
        assert_eq!(store.turns(1).len(), 2);
        assert_eq!(store.turns(1)[0].text, "hola");
    }

    #[test]
    fn test_turns_preserve_insertion_order() {
        let mut store = SessionStore::new();
        store.select_language(7, LearningLanguage::German);
        store.append_turn(7, Role::User, "first").unwrap();
        store.append_turn(7, Role::Assistant, "second").unwrap();
        store.append_turn(7, Role::User, "third").unwrap();

        let texts: Vec<&str> = store.turns(7).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_chatting_flag_requires_session() {
        let mut store = SessionStore::new();
        assert!(store.begin_chat(5).is_err());
        assert!(!store.is_chatting(5));

        store.select_language(5, LearningLanguage::Italian);
        assert!(!store.is_chatting(5));
        store.begin_chat(5).unwrap();
        assert!(store.is_chatting(5));
    }
}
