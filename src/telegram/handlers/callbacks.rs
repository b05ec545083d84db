//! Selection handler for search-result buttons

use teloxide::prelude::*;
use teloxide::types::{FileId, InputFile};

use super::types::{HandlerDeps, HandlerError};
use crate::storage::{get_connection, tracks};

/// Payload prefix for track selection buttons. The remainder is the
/// Telegram file reference of the chosen track.
pub(crate) const TRACK_CALLBACK_PREFIX: &str = "track:";

pub(crate) const TRACK_UNAVAILABLE_TEXT: &str = "That track is no longer available.";

/// Handles a tap on a search-result button: acknowledges the query and
/// re-sends the chosen audio into the originating chat.
pub async fn handle_track_callback(
    bot: Bot,
    q: CallbackQuery,
    deps: HandlerDeps,
) -> Result<(), HandlerError> {
    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };
    let Some(file_id) = data.strip_prefix(TRACK_CALLBACK_PREFIX) else {
        return Ok(());
    };

    // Stop the client's loading spinner before doing any storage work.
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(chat_id) = q.message.as_ref().map(|m| m.chat().id) else {
        return Ok(());
    };

    let conn = get_connection(&deps.db_pool)?;
    match tracks::find_track_by_file_id(&conn, file_id)? {
        Some(track) => {
            log::info!("Sending track \"{}\" to chat {}", track.file_name, chat_id);
            bot.send_audio(chat_id, InputFile::file_id(FileId(track.file_id.clone())))
                .await?;
        }
        None => {
            bot.send_message(chat_id, TRACK_UNAVAILABLE_TEXT).await?;
        }
    }
    Ok(())
}
