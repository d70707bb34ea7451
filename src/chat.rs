//! Chat-turn orchestration: session store + prompt builder + completion client.
//!
//! Kept free of any transport types so the full conversation flow is testable
//! with a mock completion client.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::ai::CompletionClient;
use crate::errors::BuddyError;
use crate::prompt::build_prompt;
use crate::session::{Role, SessionStore};

/// Run one conversation turn for a user.
///
/// Fails with `Precondition` before touching the completion client when the
/// user has not selected a language. `input` is the user's message text, if
/// any; a bare `/chat` command carries none. The store lock is released while
/// the completion call is in flight.
pub async fn chat_reply(
    sessions: &Arc<Mutex<SessionStore>>,
    client: &dyn CompletionClient,
    user_id: u64,
    input: Option<&str>,
) -> Result<String, BuddyError> {
    let (turns, language) = {
        let mut store = sessions.lock().await;
        let language = store.language(user_id).ok_or_else(|| {
            BuddyError::Precondition(format!("user {user_id} has not selected a language"))
        })?;

        if let Some(text) = input {
            store.append_turn(user_id, Role::User, text)?;
        }
        store.begin_chat(user_id)?;

        (store.turns(user_id).to_vec(), language)
    };

    let prompt = build_prompt(&turns, language);
    debug!(user_id, prompt_length = prompt.len(), "Requesting completion");

    let reply = clean_reply(&client.complete(&prompt).await?);

    sessions
        .lock()
        .await
        .append_turn(user_id, Role::Assistant, reply.clone())?;

    Ok(reply)
}

/// Strip the `assistant:` echo some models prepend to their reply
pub fn clean_reply(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix("assistant:")
        .map(str::trim)
        .unwrap_or(trimmed)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_reply_strips_role_echo() {
        assert_eq!(clean_reply("assistant: ¡Hola!"), "¡Hola!");
        assert_eq!(clean_reply("  assistant:Bonjour  "), "Bonjour");
    }

    #[test]
    fn test_clean_reply_leaves_plain_text_alone() {
        assert_eq!(clean_reply("  Cześć!  "), "Cześć!");
        assert_eq!(clean_reply("the assistant: is here"), "the assistant: is here");
    }
}
