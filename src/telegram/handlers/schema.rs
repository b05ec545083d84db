//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::callbacks::handle_track_callback;
use super::commands::{
    handle_add_channel_command, handle_search_music_command, handle_start_command,
};
use super::types::{HandlerDeps, HandlerError};
use super::uploads::track_upload_handler;
use crate::telegram::bot::Command;

/// Creates the dispatcher schema with all handlers
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_add = deps.clone();
    let deps_search = deps.clone();
    let deps_uploads = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        // Argument-carrying commands are matched on their text prefix so a
        // missing argument still reaches the handler and its usage reply.
        .branch(add_channel_handler(deps_add))
        .branch(search_music_handler(deps_search))
        // Plain commands from the Command enum
        .branch(command_handler())
        // Track ingestion from audio and document messages
        .branch(track_upload_handler(deps_uploads))
        // Search-result selection buttons
        .branch(callback_handler(deps_callback))
}

fn add_channel_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let username = deps.bot_username.clone();
    Update::filter_message()
        .filter(move |msg: Message| {
            msg.text()
                .map(|text| is_command(text, "/add_channel", username.as_deref()))
                .unwrap_or(false)
        })
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let args = msg
                    .text()
                    .map(|text| command_args(text, "/add_channel").to_string())
                    .unwrap_or_default();
                handle_add_channel_command(&bot, &msg, &deps, &args).await
            }
        })
}

fn search_music_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let username = deps.bot_username.clone();
    Update::filter_message()
        .filter(move |msg: Message| {
            msg.text()
                .map(|text| is_command(text, "/search_music", username.as_deref()))
                .unwrap_or(false)
        })
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let args = msg
                    .text()
                    .map(|text| command_args(text, "/search_music").to_string())
                    .unwrap_or_default();
                handle_search_music_command(&bot, &msg, &deps, &args).await
            }
        })
}

fn command_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(
        dptree::entry().filter_command::<Command>().endpoint(
            |bot: Bot, msg: Message, cmd: Command| async move {
                log::info!("Received command {:?} from chat {}", cmd, msg.chat.id);
                match cmd {
                    Command::Start => handle_start_command(&bot, &msg).await,
                }
            },
        ),
    )
}

fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move { handle_track_callback(bot, q, deps).await }
    })
}

/// Matches `/name` and `/name args`, plus the `/name@bot args` form when
/// the mention is this bot's username. A mention of another bot or a
/// longer command that merely shares the prefix does not match.
fn is_command(text: &str, name: &str, bot_username: Option<&str>) -> bool {
    let Some(rest) = text.strip_prefix(name) else {
        return false;
    };
    if rest.is_empty() || rest.starts_with(' ') {
        return true;
    }
    let Some(rest) = rest.strip_prefix('@') else {
        return false;
    };
    let mention = rest.split(char::is_whitespace).next().unwrap_or("");
    // Telegram usernames are case-insensitive.
    bot_username.is_some_and(|me| mention.eq_ignore_ascii_case(me))
}

/// Returns the trimmed argument text after the command name, dropping a
/// `@botname` mention if one is attached.
fn command_args<'a>(text: &'a str, name: &str) -> &'a str {
    let Some(rest) = text.strip_prefix(name) else {
        return "";
    };
    let rest = if rest.starts_with('@') {
        rest.split_once(char::is_whitespace)
            .map(|(_, tail)| tail)
            .unwrap_or("")
    } else {
        rest
    };
    rest.trim()
}
