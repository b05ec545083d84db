//! Tunescout - Telegram bot for searching music across registered channels
//!
//! This library provides all the functionality for the Tunescout bot:
//! a per-user channel registry, a track store fed by audio uploads,
//! and the Telegram command handlers wired on top of them.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, and logging
//! - `storage`: database pool, migrations, channel registry, track store
//! - `telegram`: bot setup, dispatcher schema, and handlers

pub mod core;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult};
pub use storage::{create_pool, get_connection, DbConnection, DbPool};
pub use telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};
