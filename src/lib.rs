//! # Language Learning Buddy
//!
//! A Telegram bot that helps a user practice a foreign language: pick a
//! target language, save vocabulary into named dictionaries, and hold a
//! free-form conversation powered by an external completion API.

pub mod ai;
pub mod bot;
pub mod chat;
pub mod db;
pub mod dialogue;
pub mod dictionary;
pub mod errors;
pub mod language;
pub mod prompt;
pub mod session;
