use std::env;
use std::sync::Arc;

use anyhow::Result;
use teloxide::dispatching::dialogue::{self, InMemStorage};
use teloxide::prelude::*;
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use langbuddy::ai::{CompletionClient, CompletionConfig, OpenAiClient};
use langbuddy::bot::{callback_handler, message_handler, SharedDictionaries, SharedSessions};
use langbuddy::db;
use langbuddy::dialogue::WordDialogueState;
use langbuddy::dictionary::DictionaryStore;
use langbuddy::session::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging (also bridges `log` records from the db layer)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting Language Learning Buddy bot");

    // Get bot token from environment
    let bot_token = env::var("TELEGRAM_BOT_TOKEN").expect("TELEGRAM_BOT_TOKEN must be set");

    // The schema is created up front when a database is configured; runtime
    // handlers keep all state in memory.
    if let Ok(database_url) = env::var("DATABASE_URL") {
        info!("Initializing database schema");
        let pool = db::connect(&database_url).await?;
        db::init_database_schema(&pool).await?;
    }

    let sessions: SharedSessions = Arc::new(Mutex::new(SessionStore::new()));
    let dictionaries: SharedDictionaries =
        Arc::new(Mutex::new(DictionaryStore::with_default_dictionaries()));
    let completion: Arc<dyn CompletionClient> =
        Arc::new(OpenAiClient::new(CompletionConfig::from_env()?)?);

    // Initialize the bot
    let bot = Bot::new(bot_token);

    info!("Bot initialized, starting dispatcher");

    let handler =
        dialogue::enter::<Update, InMemStorage<WordDialogueState>, WordDialogueState, _>()
            .branch(Update::filter_message().endpoint(message_handler))
            .branch(Update::filter_callback_query().endpoint(callback_handler));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![
            InMemStorage::<WordDialogueState>::new(),
            sessions,
            dictionaries,
            completion
        ])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
