//! Track ingestion from audio and document messages
//!
//! Any chat the bot can read feeds the store: channel posts arrive as
//! regular messages once the bot is an admin there.

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{HandlerDeps, HandlerError};
use crate::storage::{get_connection, tracks};

/// Creates the handler that records incoming music files.
pub(super) fn track_upload_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.audio().is_some() || msg.document().is_some())
        .endpoint(move |msg: Message| {
            let deps = deps.clone();
            async move {
                let Some((file_name, file_id)) = extract_file_info(&msg) else {
                    return Ok(());
                };
                let channel_id = msg.chat.id.0;

                let conn = get_connection(&deps.db_pool)?;
                tracks::save_track(&conn, channel_id, &file_name, &file_id)?;
                log::info!("Stored track \"{}\" from chat {}", file_name, channel_id);
                Ok(())
            }
        })
}

/// Extracts the display name and Telegram file reference from an upload.
fn extract_file_info(msg: &Message) -> Option<(String, String)> {
    if let Some(audio) = msg.audio() {
        let name = audio
            .file_name
            .clone()
            .or_else(|| audio.title.clone())
            .unwrap_or_else(|| "audio".to_string());
        return Some((name, audio.file.id.0.clone()));
    }
    if let Some(doc) = msg.document() {
        let name = doc
            .file_name
            .clone()
            .unwrap_or_else(|| "document".to_string());
        return Some((name, doc.file.id.0.clone()));
    }
    None
}
