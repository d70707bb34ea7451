//! Prompt assembly for the completion service.
//!
//! Pure string building: a fixed instructional preamble parameterized by the
//! learning language, followed by one `role: text` line per recorded turn.

use crate::language::LearningLanguage;
use crate::session::Turn;

/// Build the completion prompt from the turn history and target language.
///
/// Deterministic: identical input always yields byte-identical output.
pub fn build_prompt(turns: &[Turn], learning_language: LearningLanguage) -> String {
    let mut prompt = format!(
        "You are a helpful and encouraging language learning partner. \
         User is learning {learning_language}. \
         Engage the user in a simple conversation in the learning language \
         using beginner-friendly level vocabulary.\n"
    );

    for turn in turns {
        prompt.push_str(turn.role.as_str());
        prompt.push_str(": ");
        prompt.push_str(&turn.text);
        prompt.push('\n');
    }

    prompt
}
