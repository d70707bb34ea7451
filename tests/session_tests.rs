use langbuddy::errors::BuddyError;
use langbuddy::language::{LearningLanguage, SUPPORTED_LANGUAGES};
use langbuddy::session::{Role, SessionStore};

/// Selecting any supported language never clears accumulated history
#[test]
fn test_language_selection_preserves_history() {
    let mut store = SessionStore::new();
    store.select_language(42, LearningLanguage::Spanish);
    store.append_turn(42, Role::User, "hola").unwrap();
    store.append_turn(42, Role::Assistant, "¡Hola!").unwrap();

    for language in SUPPORTED_LANGUAGES {
        store.select_language(42, language);
        assert_eq!(store.language(42), Some(language));

        let turns = store.turns(42);
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].text, "hola");
        assert_eq!(turns[1].text, "¡Hola!");
    }
}

/// Appending a turn without a session is a precondition error
#[test]
fn test_append_turn_requires_session() {
    let mut store = SessionStore::new();

    let err = store.append_turn(1, Role::User, "hello").unwrap_err();
    assert!(matches!(err, BuddyError::Precondition(_)));
    assert!(store.turns(1).is_empty());
}

/// History is returned in insertion order and roles are preserved
#[test]
fn test_history_order_and_roles() {
    let mut store = SessionStore::new();
    store.select_language(9, LearningLanguage::French);
    store.append_turn(9, Role::User, "bonjour").unwrap();
    store.append_turn(9, Role::Assistant, "Bonjour !").unwrap();
    store.append_turn(9, Role::User, "ça va?").unwrap();

    let turns = store.turns(9);
    assert_eq!(turns[0].role, Role::User);
    assert_eq!(turns[1].role, Role::Assistant);
    assert_eq!(turns[2].role, Role::User);
    assert_eq!(turns[2].text, "ça va?");
}

/// Sessions are independent per user
#[test]
fn test_sessions_are_per_user() {
    let mut store = SessionStore::new();
    store.select_language(1, LearningLanguage::German);
    store.select_language(2, LearningLanguage::Polish);
    store.append_turn(1, Role::User, "hallo").unwrap();

    assert_eq!(store.turns(1).len(), 1);
    assert!(store.turns(2).is_empty());
    assert_eq!(store.language(2), Some(LearningLanguage::Polish));
}

/// An unknown user has no history and no language
#[test]
fn test_unknown_user_defaults() {
    let store = SessionStore::new();
    assert!(store.turns(999).is_empty());
    assert_eq!(store.language(999), None);
    assert!(!store.is_chatting(999));
}
