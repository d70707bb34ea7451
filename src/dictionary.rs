//! # Dictionary Store Module
//!
//! Named collections of word→translation pairs. Dictionaries are globally
//! namespaced (not per-user) and live in memory for the process lifetime.
//! Words are normalized (trimmed + lowercased) on insert; translations are
//! trimmed but keep their case. Duplicate words are rejected, not overwritten.

use std::collections::HashMap;

use log::info;

use crate::errors::BuddyError;

/// Dictionaries every fresh install starts with
const DEFAULT_DICTIONARIES: [&str; 4] = [
    "My favorite dictionary",
    "Chinese dictionary",
    "Polish food words",
    "Italian pasta dictionary",
];

/// A single named word→translation collection, entries in insertion order
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<(String, String)>,
}

impl Dictionary {
    /// Entries as (word, translation) pairs, in insertion order
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn contains_word(&self, normalized: &str) -> bool {
        self.entries.iter().any(|(word, _)| word == normalized)
    }
}

/// In-memory store of all dictionaries, keyed by user-chosen name
#[derive(Debug, Default)]
pub struct DictionaryStore {
    // Creation order kept separately so listings stay deterministic.
    order: Vec<String>,
    dictionaries: HashMap<String, Dictionary>,
}

impl DictionaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with the stock dictionaries
    pub fn with_default_dictionaries() -> Self {
        let mut store = Self::new();
        for name in DEFAULT_DICTIONARIES {
            // Names are distinct literals, cannot collide.
            let _ = store.create(name);
        }
        store
    }

    /// Create an empty dictionary with the given (trimmed) name
    pub fn create(&mut self, name: &str) -> Result<(), BuddyError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BuddyError::Validation(
                "dictionary name cannot be empty".to_string(),
            ));
        }
        if self.dictionaries.contains_key(name) {
            return Err(BuddyError::DuplicateName(format!(
                "dictionary '{name}' already exists"
            )));
        }

        self.order.push(name.to_string());
        self.dictionaries
            .insert(name.to_string(), Dictionary::default());
        info!("Created dictionary: {}", name);
        Ok(())
    }

    /// Add a word/translation pair to an existing dictionary.
    ///
    /// The word is normalized to trimmed lowercase before the duplicate check
    /// and before storage; the translation is trimmed but case-preserving.
    pub fn add_word(
        &mut self,
        dictionary_name: &str,
        word: &str,
        translation: &str,
    ) -> Result<(), BuddyError> {
        let word = word.trim().to_lowercase();
        let translation = translation.trim();
        if word.is_empty() || translation.is_empty() {
            return Err(BuddyError::Validation(
                "word and translation cannot be empty".to_string(),
            ));
        }

        let dictionary = self.dictionary_mut(dictionary_name)?;
        if dictionary.contains_word(&word) {
            return Err(BuddyError::DuplicateWord(format!(
                "word '{word}' already exists in '{dictionary_name}'"
            )));
        }

        dictionary.entries.push((word, translation.to_string()));
        Ok(())
    }

    /// Dictionary names in creation order
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Entries of a dictionary, in insertion order
    pub fn words(&self, dictionary_name: &str) -> Result<&[(String, String)], BuddyError> {
        self.dictionaries
            .get(dictionary_name)
            .map(|dictionary| dictionary.entries())
            .ok_or_else(|| {
                BuddyError::NotFound(format!("dictionary '{dictionary_name}' not found"))
            })
    }

    fn dictionary_mut(&mut self, name: &str) -> Result<&mut Dictionary, BuddyError> {
        self.dictionaries
            .get_mut(name)
            .ok_or_else(|| BuddyError::NotFound(format!("dictionary '{name}' not found")))
    }
}
