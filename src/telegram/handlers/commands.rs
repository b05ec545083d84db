//! Command handlers: /start, /add_channel, /search_music

use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, Message};

use super::types::{user_id_from, HandlerDeps, HandlerError};
use crate::core::config;
use crate::storage::tracks::TrackRecord;
use crate::storage::{channels, get_connection, tracks};

pub(crate) const WELCOME_TEXT: &str = "Welcome! Use /add_channel <channel_username> to add your channel. Then use /search_music <song_name> to find music in your channels.";
pub(crate) const ADD_CHANNEL_USAGE: &str =
    "Please provide the channel username (e.g., /add_channel @mychannel).";
pub(crate) const SEARCH_USAGE: &str = "Please provide the name of the song.";
pub(crate) const NO_CHANNELS_TEXT: &str =
    "You have not added any channels. Use /add_channel <channel_username> to add a channel.";

/// Handles the /start command
pub async fn handle_start_command(bot: &Bot, msg: &Message) -> Result<(), HandlerError> {
    bot.send_message(msg.chat.id, WELCOME_TEXT).await?;
    Ok(())
}

/// Registers a channel username for the sending user.
///
/// `args` is the raw text after the command name. Only the first
/// whitespace-delimited token is used.
pub async fn handle_add_channel_command(
    bot: &Bot,
    msg: &Message,
    deps: &HandlerDeps,
    args: &str,
) -> Result<(), HandlerError> {
    let Some(channel) = args.split_whitespace().next() else {
        bot.send_message(msg.chat.id, ADD_CHANNEL_USAGE).await?;
        return Ok(());
    };

    let user_id = user_id_from(msg);
    let conn = get_connection(&deps.db_pool)?;
    channels::add_channel(&conn, user_id, channel)?;
    log::info!("User {} registered channel {}", user_id, channel);

    bot.send_message(
        msg.chat.id,
        format!(
            "Channel {} added to your account. Please add the bot as an admin in your channel.",
            channel
        ),
    )
    .await?;
    Ok(())
}

/// Searches stored tracks by name and replies with a selection keyboard.
pub async fn handle_search_music_command(
    bot: &Bot,
    msg: &Message,
    deps: &HandlerDeps,
    query: &str,
) -> Result<(), HandlerError> {
    let query = query.trim();
    if query.is_empty() {
        bot.send_message(msg.chat.id, SEARCH_USAGE).await?;
        return Ok(());
    }

    let user_id = user_id_from(msg);
    let conn = get_connection(&deps.db_pool)?;

    // Search is only offered to users who registered at least one channel.
    let registered = channels::get_channels(&conn, user_id)?;
    if registered.is_empty() {
        bot.send_message(msg.chat.id, NO_CHANNELS_TEXT).await?;
        return Ok(());
    }

    let found = match tracks::search_tracks(&conn, query, config::search::MAX_RESULTS) {
        Ok(found) => found,
        Err(err) => {
            log::error!("Track search failed for user {}: {}", user_id, err);
            bot.send_message(
                msg.chat.id,
                format!("Error while searching your channels: {}", err),
            )
            .await?;
            return Ok(());
        }
    };

    if found.is_empty() {
        bot.send_message(
            msg.chat.id,
            format!("No music found for: {} in your channels.", query),
        )
        .await?;
        return Ok(());
    }

    bot.send_message(
        msg.chat.id,
        format!(
            "Found {} track(s) for \"{}\". Pick one to receive it:",
            found.len(),
            query
        ),
    )
    .reply_markup(track_keyboard(&found))
    .await?;
    Ok(())
}

/// Builds the selection keyboard, one track per row.
pub(crate) fn track_keyboard(found: &[TrackRecord]) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = found
        .iter()
        .map(|track| {
            vec![InlineKeyboardButton::callback(
                shorten_label(&track.file_name),
                format!("{}{}", super::callbacks::TRACK_CALLBACK_PREFIX, track.file_id),
            )]
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

fn shorten_label(name: &str) -> String {
    let max = config::search::MAX_BUTTON_LABEL_CHARS;
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let mut shortened: String = name.chars().take(max - 1).collect();
        shortened.push('…');
        shortened
    }
}
