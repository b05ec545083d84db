//! Database pool, migrations, and the two persisted tables

pub mod channels;
pub mod db;
pub mod migrations;
pub mod tracks;

// Re-exports for convenience
pub use db::{create_pool, get_connection, DbConnection, DbPool};
