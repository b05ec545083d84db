//! Shared helpers for the integration test suite

use tempfile::TempDir;
use tunescout::{create_pool, DbPool};

/// Creates a pool against a throwaway database file with migrations
/// applied. The returned TempDir must outlive the pool.
pub fn test_pool() -> (TempDir, DbPool) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("bot_db.db");
    let pool = create_pool(path.to_str().expect("utf-8 temp path")).expect("create pool");
    (dir, pool)
}
