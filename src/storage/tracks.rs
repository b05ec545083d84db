//! Track store fed by audio/document uploads
//!
//! Rows are append-only: nothing in the bot updates or deletes them.
//! Duplicate `(channel_id, file_name)` rows are allowed, and `file_id`
//! carries no uniqueness guarantee because it is assigned by Telegram.

use super::db::DbConnection;
use rusqlite::Result;

/// A music file observed in a chat the bot is present in.
#[derive(Debug, Clone)]
pub struct TrackRecord {
    /// Chat the file was delivered in
    pub channel_id: i64,
    /// File name (or title) taken from the upload
    pub file_name: String,
    /// Telegram file reference used to re-send the audio
    pub file_id: String,
}

/// Stores a track record.
pub fn save_track(conn: &DbConnection, channel_id: i64, file_name: &str, file_id: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO music_files (channel_id, file_name, file_id) VALUES (?1, ?2, ?3)",
        rusqlite::params![channel_id, file_name, file_id],
    )?;
    Ok(())
}

/// Case-insensitive substring search of `query` against stored file names.
///
/// The query is matched literally: LIKE metacharacters in it are
/// escaped, so searching for "100%" does not match everything. Matches
/// are returned in insertion order, capped at `limit` so the result set
/// fits an inline keyboard.
pub fn search_tracks(conn: &DbConnection, query: &str, limit: usize) -> Result<Vec<TrackRecord>> {
    let mut stmt = conn.prepare(
        "SELECT channel_id, file_name, file_id FROM music_files
         WHERE file_name LIKE ? ESCAPE '\\' ORDER BY rowid LIMIT ?",
    )?;
    let pattern = format!("%{}%", escape_like(query));

    let rows = stmt.query_map(rusqlite::params![pattern, limit as i64], |row| {
        Ok(TrackRecord {
            channel_id: row.get(0)?,
            file_name: row.get(1)?,
            file_id: row.get(2)?,
        })
    })?;
    rows.collect()
}

/// Escapes `%`, `_` and the escape character itself so user input is
/// matched as a literal substring.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if c == '%' || c == '_' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Looks up a stored track by its Telegram file reference.
///
/// `file_id` is not guaranteed unique; if several uploads share one
/// reference the earliest stored record wins.
pub fn find_track_by_file_id(conn: &DbConnection, file_id: &str) -> Result<Option<TrackRecord>> {
    let mut stmt = conn.prepare(
        "SELECT channel_id, file_name, file_id FROM music_files
         WHERE file_id = ? ORDER BY rowid LIMIT 1",
    )?;
    let mut rows = stmt.query_map([file_id], |row| {
        Ok(TrackRecord {
            channel_id: row.get(0)?,
            file_name: row.get(1)?,
            file_id: row.get(2)?,
        })
    })?;

    if let Some(row) = rows.next() {
        Ok(Some(row?))
    } else {
        Ok(None)
    }
}

// Tests are in the integration test suite to use a proper DbPool with
// migrations applied. See tests/search_flow_test.rs.
