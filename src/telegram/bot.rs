//! Bot initialization and command registration
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Command list registration in the Telegram UI

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::core::config;

/// Bot commands enum with descriptions
///
/// Only argument-less commands live here; `/add_channel` and
/// `/search_music` are matched on their text prefix in the dispatcher
/// schema so that a missing argument still reaches the handler.
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "I can:")]
pub enum Command {
    #[command(description = "show the welcome message")]
    Start,
}

/// Creates a Bot instance from the configured token
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - BOT_TOKEN / TELOXIDE_TOKEN is not set
pub fn create_bot() -> anyhow::Result<Bot> {
    let token = config::BOT_TOKEN.clone();
    if token.is_empty() {
        anyhow::bail!("BOT_TOKEN (or TELOXIDE_TOKEN) environment variable is not set");
    }
    Ok(Bot::new(token))
}

/// Sets up bot commands in the Telegram UI
///
/// The list includes the prefix-matched commands so they show up in the
/// client's command menu even though they are not in the enum.
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    use teloxide::types::BotCommand;

    bot.set_my_commands(vec![
        BotCommand::new("start", "show the welcome message"),
        BotCommand::new("add_channel", "register a channel to search"),
        BotCommand::new("search_music", "find music in your channels"),
    ])
    .await?;

    Ok(())
}
