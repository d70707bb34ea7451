//! Message Handler module for processing incoming Telegram messages

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::{debug, error, warn};

// Import the completion client seam
use crate::ai::CompletionClient;

// Import chat-turn orchestration
use crate::chat::chat_reply;

// Import dialogue types
use crate::dialogue::{parse_word_entry, WordDialogue, WordDialogueState};

use crate::errors::BuddyError;

// Import UI builder functions
use super::ui_builder::{
    create_dictionary_keyboard, create_dictionary_list_keyboard, create_language_keyboard,
    word_entry_prompt,
};

use super::{SharedDictionaries, SharedSessions};

const INTRO_MESSAGE: &str = "Hello! I am your Language Learning Buddy. \n\
    I can help you learn new languages in a fun and interactive way! \n\
    What language do you want to learn first?";

const FALLBACK_MESSAGE: &str =
    "I don't understand that command. Use /start, /neword, /dicts or /chat.";

const SELECT_LANGUAGE_FIRST: &str = "Select a language first using /start.";

const COMPLETION_FAILED: &str =
    "The language partner is unavailable right now. Please try again later.";

const GENERIC_FAILURE: &str = "An error occurred.";

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    dialogue: WordDialogue,
    sessions: SharedSessions,
    dictionaries: SharedDictionaries,
    completion: Arc<dyn CompletionClient>,
) -> Result<()> {
    let Some(text) = msg.text() else {
        // Photos, stickers, voice notes: nothing we can do with them
        bot.send_message(msg.chat.id, FALLBACK_MESSAGE).await?;
        return Ok(());
    };

    let Some(user) = msg.from.as_ref() else {
        debug!(chat_id = %msg.chat.id, "Ignoring message without a sender");
        return Ok(());
    };
    let user_id = user.id.0;

    debug!(user_id, message_length = text.len(), "Received text message");

    // A pending sub-dialogue consumes the text before command dispatch.
    match dialogue.get().await? {
        Some(WordDialogueState::AwaitingDictionaryName) => {
            handle_dictionary_name_input(&bot, &msg, dialogue, dictionaries, text).await
        }
        Some(WordDialogueState::AwaitingWordEntry { dictionary }) => {
            handle_word_entry_input(&bot, &msg, dialogue, dictionaries, text, &dictionary).await
        }
        Some(WordDialogueState::Idle) | None => {
            handle_command_or_chat(&bot, &msg, user_id, text, sessions, dictionaries, completion)
                .await
        }
    }
}

async fn handle_command_or_chat(
    bot: &Bot,
    msg: &Message,
    user_id: u64,
    text: &str,
    sessions: SharedSessions,
    dictionaries: SharedDictionaries,
    completion: Arc<dyn CompletionClient>,
) -> Result<()> {
    if text == "/start" {
        bot.send_message(msg.chat.id, INTRO_MESSAGE)
            .reply_markup(create_language_keyboard())
            .await?;
    } else if text == "/neword" {
        let names = dictionaries.lock().await.names().to_vec();
        bot.send_message(
            msg.chat.id,
            "<b>Select a dictionary or create</b> a new one to save the new word to:",
        )
        .parse_mode(ParseMode::Html)
        .reply_markup(create_dictionary_keyboard(&names))
        .await?;
    } else if text == "/dicts" {
        let names = dictionaries.lock().await.names().to_vec();
        if names.is_empty() {
            bot.send_message(msg.chat.id, "No dictionaries available yet.")
                .await?;
        } else {
            bot.send_message(msg.chat.id, "Choose a dictionary to view:")
                .reply_markup(create_dictionary_list_keyboard(&names))
                .await?;
        }
    } else if let Some(rest) = chat_command_text(text) {
        run_chat_turn(bot, msg.chat.id, user_id, rest, &sessions, &completion).await?;
    } else if text.starts_with('/') {
        bot.send_message(msg.chat.id, FALLBACK_MESSAGE).await?;
    } else if sessions.lock().await.is_chatting(user_id) {
        // Free text continues an open conversation
        run_chat_turn(bot, msg.chat.id, user_id, Some(text), &sessions, &completion).await?;
    } else {
        bot.send_message(msg.chat.id, FALLBACK_MESSAGE).await?;
    }

    Ok(())
}

/// Recognize the /chat command and extract its argument text, if any
fn chat_command_text(text: &str) -> Option<Option<&str>> {
    if text == "/chat" {
        return Some(None);
    }
    let rest = text.strip_prefix("/chat ")?.trim();
    if rest.is_empty() {
        Some(None)
    } else {
        Some(Some(rest))
    }
}

async fn run_chat_turn(
    bot: &Bot,
    chat_id: ChatId,
    user_id: u64,
    input: Option<&str>,
    sessions: &SharedSessions,
    completion: &Arc<dyn CompletionClient>,
) -> Result<()> {
    match chat_reply(sessions, completion.as_ref(), user_id, input).await {
        Ok(reply) => {
            bot.send_message(chat_id, reply).await?;
        }
        Err(BuddyError::Precondition(_)) => {
            bot.send_message(chat_id, SELECT_LANGUAGE_FIRST).await?;
        }
        Err(BuddyError::CompletionUnavailable(reason)) => {
            warn!(user_id, reason = %reason, "Completion service unavailable");
            bot.send_message(chat_id, COMPLETION_FAILED).await?;
        }
        Err(e) => {
            error!(user_id, error = %e, "Unexpected error during chat turn");
            bot.send_message(chat_id, GENERIC_FAILURE).await?;
        }
    }
    Ok(())
}

/// Handle the dictionary name entered while creating a new dictionary
async fn handle_dictionary_name_input(
    bot: &Bot,
    msg: &Message,
    dialogue: WordDialogue,
    dictionaries: SharedDictionaries,
    name_input: &str,
) -> Result<()> {
    let created = dictionaries.lock().await.create(name_input);
    match created {
        Ok(()) => {
            let name = name_input.trim().to_string();
            bot.send_message(msg.chat.id, word_entry_prompt(&name))
                .parse_mode(ParseMode::Html)
                .await?;
            dialogue
                .update(WordDialogueState::AwaitingWordEntry { dictionary: name })
                .await?;
        }
        Err(BuddyError::Validation(_)) => {
            bot.send_message(msg.chat.id, "Dictionary name cannot be empty. Try again:")
                .await?;
            // Keep dialogue active, user can try again
        }
        Err(BuddyError::DuplicateName(_)) => {
            bot.send_message(
                msg.chat.id,
                "A dictionary with that name already exists. Please choose another name.",
            )
            .await?;
            // Keep dialogue active, user can try again
        }
        Err(e) => {
            error!(chat_id = %msg.chat.id, error = %e, "Failed to create dictionary");
            bot.send_message(msg.chat.id, GENERIC_FAILURE).await?;
            dialogue.exit().await?;
        }
    }

    Ok(())
}

/// Handle a `word:translation` line entered during the add-word sub-dialogue
async fn handle_word_entry_input(
    bot: &Bot,
    msg: &Message,
    dialogue: WordDialogue,
    dictionaries: SharedDictionaries,
    entry_input: &str,
    dictionary_name: &str,
) -> Result<()> {
    let entry = parse_word_entry(entry_input);
    let (word, translation) = match entry {
        Ok(pair) => pair,
        Err(_) => {
            let complaint = if entry_input.contains(':') {
                "Word and translation cannot be empty. Please use the 'word:translation' format."
            } else {
                "Invalid input. Please use the 'word:translation' format."
            };
            bot.send_message(msg.chat.id, complaint).await?;
            bot.send_message(msg.chat.id, word_entry_prompt(dictionary_name))
                .parse_mode(ParseMode::Html)
                .await?;
            // Keep dialogue active, user can try again
            return Ok(());
        }
    };

    let added = dictionaries
        .lock()
        .await
        .add_word(dictionary_name, &word, &translation);
    match added {
        Ok(()) => {
            bot.send_message(
                msg.chat.id,
                format!(
                    "Added <b>'{word}':'{translation}' to {dictionary_name}</b>. \n\
                     To view saved dictionaries use <b>/dicts</b>."
                ),
            )
            .parse_mode(ParseMode::Html)
            .await?;
            dialogue.exit().await?;
        }
        Err(BuddyError::DuplicateWord(_)) => {
            bot.send_message(
                msg.chat.id,
                "Word already exists in this dictionary. Please enter a different word.",
            )
            .await?;
            bot.send_message(msg.chat.id, word_entry_prompt(dictionary_name))
                .parse_mode(ParseMode::Html)
                .await?;
            // Keep dialogue active, user can try again
        }
        Err(BuddyError::NotFound(_)) => {
            bot.send_message(msg.chat.id, "Dictionary not found.").await?;
            dialogue.exit().await?;
        }
        Err(e) => {
            error!(chat_id = %msg.chat.id, error = %e, "Failed to save word");
            bot.send_message(msg.chat.id, GENERIC_FAILURE).await?;
            dialogue.exit().await?;
        }
    }

    Ok(())
}
