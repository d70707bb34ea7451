//! Add-word sub-dialogue: conversation state for saving a word into a dictionary.
//!
//! The sub-dialogue is an explicit state machine held in teloxide's in-memory
//! dialogue storage. It is consumed by the next inbound text message and never
//! touches the conversation state, which resumes untouched once the word is
//! saved.

use serde::{Deserialize, Serialize};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

use crate::errors::BuddyError;

/// Represents the state of the add-word sub-dialogue
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum WordDialogueState {
    #[default]
    Idle,
    /// Waiting for the name of a dictionary to create
    AwaitingDictionaryName,
    /// Waiting for a `word:translation` line to add to the chosen dictionary
    AwaitingWordEntry { dictionary: String },
}

/// Type alias for the add-word dialogue
pub type WordDialogue = Dialogue<WordDialogueState, InMemStorage<WordDialogueState>>;

/// Parse a `word:translation` input line.
///
/// The word comes back normalized (trimmed + lowercased), the translation
/// trimmed but case-preserving. A missing separator or an empty side is a
/// validation error; the caller re-prompts within the same dialogue state.
pub fn parse_word_entry(input: &str) -> Result<(String, String), BuddyError> {
    let (word, translation) = input
        .split_once(':')
        .ok_or_else(|| BuddyError::Validation("expected 'word:translation' format".to_string()))?;

    let word = word.trim().to_lowercase();
    let translation = translation.trim();
    if word.is_empty() || translation.is_empty() {
        return Err(BuddyError::Validation(
            "word and translation cannot be empty".to_string(),
        ));
    }

    Ok((word, translation.to_string()))
}
