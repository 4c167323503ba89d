//! Persistence core for the birthday bot.
//! This crate is the single source of truth for stored bot state.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_store, open_store_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::server::ServerRecord;
pub use model::server_set::ServerSet;
pub use model::user::UserRecord;
pub use repo::server_repo::{ServerRepository, SqliteServerRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use service::record_store::{RecordStore, DEFAULT_STORE_FILE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
