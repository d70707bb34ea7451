//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::{debug, warn};

// Import dialogue types
use crate::dialogue::{WordDialogue, WordDialogueState};

use crate::language::LearningLanguage;

// Import UI builder functions
use super::ui_builder::{format_word_list, greeting_message, word_entry_prompt};

use super::{SharedDictionaries, SharedSessions};

/// Handle callback queries from inline keyboards
pub async fn callback_handler(
    bot: Bot,
    q: teloxide::types::CallbackQuery,
    dialogue: WordDialogue,
    sessions: SharedSessions,
    dictionaries: SharedDictionaries,
) -> Result<()> {
    debug!(user_id = %q.from.id, data = ?q.data, "Received callback query");

    let data = q.data.as_deref().unwrap_or("");
    if let Some(msg) = &q.message {
        let chat_id = msg.chat().id;

        if let Some(language) = data.strip_prefix("learning_lang:") {
            match language.parse::<LearningLanguage>() {
                Ok(language) => {
                    sessions.lock().await.select_language(q.from.id.0, language);
                    bot.send_message(chat_id, greeting_message(language))
                        .parse_mode(ParseMode::Html)
                        .await?;
                }
                Err(e) => {
                    // Stale or forged payload, nothing to select
                    warn!(user_id = %q.from.id, error = %e, "Ignoring invalid language callback");
                }
            }
        } else if data == "new_dictionary" {
            bot.send_message(chat_id, "Enter new dictionary name:").await?;
            dialogue
                .update(WordDialogueState::AwaitingDictionaryName)
                .await?;
        } else if let Some(name) = data.strip_prefix("dictionary:") {
            bot.send_message(chat_id, word_entry_prompt(name))
                .parse_mode(ParseMode::Html)
                .await?;
            dialogue
                .update(WordDialogueState::AwaitingWordEntry {
                    dictionary: name.to_string(),
                })
                .await?;
        } else if let Some(name) = data.strip_prefix("list_words:") {
            let reply = {
                let store = dictionaries.lock().await;
                match store.words(name) {
                    Ok(entries) if entries.is_empty() => format!("{name} is empty."),
                    Ok(entries) => format_word_list(name, entries),
                    Err(_) => "Dictionary not found.".to_string(),
                }
            };
            bot.send_message(chat_id, reply)
                .parse_mode(ParseMode::Html)
                .await?;
        }
    }

    // Answer the callback query to remove the loading state
    bot.answer_callback_query(q.id).await?;

    Ok(())
}
