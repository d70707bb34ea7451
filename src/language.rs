//! Supported learning languages and the fixed greeting table.

use crate::errors::BuddyError;

/// The fixed set of languages the bot can help practice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LearningLanguage {
    Chinese,
    Polish,
    Spanish,
    French,
    Italian,
    German,
}

/// All supported languages, in the order they appear on the selection keyboard
pub const SUPPORTED_LANGUAGES: [LearningLanguage; 6] = [
    LearningLanguage::Chinese,
    LearningLanguage::Polish,
    LearningLanguage::Spanish,
    LearningLanguage::French,
    LearningLanguage::Italian,
    LearningLanguage::German,
];

impl LearningLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningLanguage::Chinese => "Chinese",
            LearningLanguage::Polish => "Polish",
            LearningLanguage::Spanish => "Spanish",
            LearningLanguage::French => "French",
            LearningLanguage::Italian => "Italian",
            LearningLanguage::German => "German",
        }
    }

    /// How to say "Hello" in the learning language
    pub fn greeting(&self) -> &'static str {
        match self {
            LearningLanguage::Chinese => "你好",
            LearningLanguage::Polish => "Cześć",
            LearningLanguage::Spanish => "Hola",
            LearningLanguage::French => "Bonjour",
            LearningLanguage::Italian => "Ciao",
            LearningLanguage::German => "Hallo",
        }
    }
}

impl std::fmt::Display for LearningLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LearningLanguage {
    type Err = BuddyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Chinese" => Ok(LearningLanguage::Chinese),
            "Polish" => Ok(LearningLanguage::Polish),
            "Spanish" => Ok(LearningLanguage::Spanish),
            "French" => Ok(LearningLanguage::French),
            "Italian" => Ok(LearningLanguage::Italian),
            "German" => Ok(LearningLanguage::German),
            other => Err(BuddyError::Validation(format!(
                "unsupported language: {other}"
            ))),
        }
    }
}
