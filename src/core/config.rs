//! Configuration constants for the bot

use once_cell::sync::Lazy;
use std::env;

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Database file path
/// Read from DATABASE_PATH environment variable
/// Default: bot_db.db
pub static DATABASE_PATH: Lazy<String> =
    Lazy::new(|| env::var("DATABASE_PATH").unwrap_or_else(|_| "bot_db.db".to_string()));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: bot.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "bot.log".to_string()));

/// Storage configuration
pub mod storage {
    /// Maximum number of connections in the SQLite pool
    pub const MAX_CONNECTIONS: u32 = 10;
}

/// Search configuration
pub mod search {
    /// Maximum number of matches returned per search.
    ///
    /// Each match becomes one inline keyboard button, and Telegram caps
    /// reply markup at 100 buttons, so the query is limited rather than
    /// truncating the reply after the fact.
    pub const MAX_RESULTS: usize = 50;

    /// Maximum length of a button label before it is shortened
    pub const MAX_BUTTON_LABEL_CHARS: usize = 48;
}
