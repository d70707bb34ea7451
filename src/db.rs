//! # Database Module
//!
//! Relational schema for user dictionaries. The schema is created at startup
//! when `DATABASE_URL` is set, but the runtime handlers keep all state in
//! memory and never read or write these tables; this module documents the
//! persistence boundary for a future durability pass.

use anyhow::{Context, Result};
use log::info;
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Row of the `user_dictionary` table: a user's chosen dictionary and language
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UserDictionaryRow {
    pub user_id: i64,
    pub dictionary_id: Option<i64>,
    pub dictionary_name: Option<String>,
    pub username: Option<String>,
    pub language: Option<String>,
}

/// Row of the `dictionary` table: one saved word/translation pair
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct DictionaryRow {
    pub dictionary_id: i64,
    pub user_id: Option<i64>,
    pub original_word: Option<String>,
    pub native_word: Option<String>,
}

/// Open a connection pool to the configured database
pub async fn connect(database_url: &str) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}

/// Initialize the database schema
pub async fn init_database_schema(pool: &PgPool) -> Result<()> {
    info!("Initializing database schema...");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS user_dictionary (
            user_id BIGINT PRIMARY KEY,
            dictionary_id BIGINT,
            dictionary_name TEXT,
            username TEXT,
            language TEXT
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create user_dictionary table")?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS dictionary (
            dictionary_id BIGSERIAL PRIMARY KEY,
            user_id BIGINT,
            original_word TEXT,
            native_word TEXT
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create dictionary table")?;

    info!("Database schema initialized successfully");
    Ok(())
}
