//! Per-user channel registry
//!
//! A user's channels live in a one-to-many `user_channels` table rather
//! than a packed text field, so the at-most-once invariant is enforced by
//! the composite primary key instead of string handling.

use super::db::DbConnection;
use rusqlite::Result;

/// Registers `channel` for `user_id`.
///
/// Idempotent: re-adding a channel the user already has is a no-op, and
/// the user's entry is created implicitly on their first call. Only
/// storage errors propagate.
pub fn add_channel(conn: &DbConnection, user_id: i64, channel: &str) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO user_channels (user_id, channel) VALUES (?1, ?2)",
        rusqlite::params![user_id, channel],
    )?;
    Ok(())
}

/// Returns the channels registered by `user_id`, oldest first.
///
/// A user with no registered channels yields an empty vector, never an
/// error.
pub fn get_channels(conn: &DbConnection, user_id: i64) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT channel FROM user_channels WHERE user_id = ? ORDER BY rowid")?;
    let rows = stmt.query_map([user_id], |row| row.get(0))?;
    rows.collect()
}

// Tests are in the integration test suite to use a proper DbPool with
// migrations applied. See tests/registry_test.rs.
