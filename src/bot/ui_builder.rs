//! UI Builder module for creating keyboards and formatting messages

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::language::{LearningLanguage, SUPPORTED_LANGUAGES};

/// Create the inline keyboard for picking a learning language
pub fn create_language_keyboard() -> InlineKeyboardMarkup {
    let buttons: Vec<Vec<InlineKeyboardButton>> = SUPPORTED_LANGUAGES
        .iter()
        .map(|lang| {
            vec![InlineKeyboardButton::callback(
                lang.as_str(),
                format!("learning_lang:{lang}"),
            )]
        })
        .collect();

    InlineKeyboardMarkup::new(buttons)
}

/// Create the inline keyboard for choosing where to save a new word.
///
/// One button per existing dictionary plus a final "Create New Dictionary"
/// button.
pub fn create_dictionary_keyboard(names: &[String]) -> InlineKeyboardMarkup {
    let mut buttons: Vec<Vec<InlineKeyboardButton>> = names
        .iter()
        .map(|name| {
            vec![InlineKeyboardButton::callback(
                name.clone(),
                format!("dictionary:{name}"),
            )]
        })
        .collect();

    buttons.push(vec![InlineKeyboardButton::callback(
        "Create New Dictionary",
        "new_dictionary",
    )]);

    InlineKeyboardMarkup::new(buttons)
}

/// Create the inline keyboard for viewing a dictionary's words
pub fn create_dictionary_list_keyboard(names: &[String]) -> InlineKeyboardMarkup {
    let buttons: Vec<Vec<InlineKeyboardButton>> = names
        .iter()
        .map(|name| {
            vec![InlineKeyboardButton::callback(
                name.clone(),
                format!("list_words:{name}"),
            )]
        })
        .collect();

    InlineKeyboardMarkup::new(buttons)
}

/// Greeting sent after the user picks a learning language (HTML markup)
pub fn greeting_message(language: LearningLanguage) -> String {
    format!(
        "<b>{}</b>! That's how you say \"Hello\" in {}. \nTo save the word in <b>dictionary</b> use <b>/neword</b>",
        language.greeting(),
        language
    )
}

/// Prompt asking for a `word:translation` line for the given dictionary (HTML markup)
pub fn word_entry_prompt(dictionary_name: &str) -> String {
    format!("Enter <b>word:translation</b> to add to {dictionary_name}:")
}

/// Format a dictionary's entries as an HTML word list, one entry per line
pub fn format_word_list(dictionary_name: &str, entries: &[(String, String)]) -> String {
    let word_list = entries
        .iter()
        .map(|(word, translation)| format!("<b>{word}</b>: {translation}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{dictionary_name}:\n{word_list}")
}
