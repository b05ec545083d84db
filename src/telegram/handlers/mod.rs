//! Dispatcher schema, command handlers, and track ingestion

pub mod callbacks;
pub mod commands;
pub mod schema;
pub mod types;
mod uploads;

pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
