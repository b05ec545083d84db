//! Handler types and dependencies

use std::sync::Arc;

use teloxide::types::Message;

use crate::storage::DbPool;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies cloned into each handler endpoint
#[derive(Clone)]
pub struct HandlerDeps {
    pub db_pool: Arc<DbPool>,
    /// Own username, used to reject `/cmd@other_bot` commands addressed
    /// to a different bot in group chats.
    pub bot_username: Option<String>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(db_pool: Arc<DbPool>, bot_username: Option<String>) -> Self {
        Self {
            db_pool,
            bot_username,
        }
    }
}

/// Numeric id the registry is keyed on: the sending user, falling back
/// to the chat id when the platform omits the sender.
pub fn user_id_from(msg: &Message) -> i64 {
    msg.from
        .as_ref()
        .and_then(|u| i64::try_from(u.id.0).ok())
        .unwrap_or(msg.chat.id.0)
}
