//! Record store facade with per-operation connection scope.
//!
//! # Responsibility
//! - Own the store-file location and the one-connection-per-operation rule.
//! - Delegate row access to the user/server repositories.
//!
//! # Invariants
//! - Each operation opens its own connection and runs exactly one
//!   transaction; the scope commits on every exit path, then the connection
//!   is released by drop.
//! - Reads and writes share no in-process state between calls; the store
//!   file is the only state.

use crate::db::{open_store, schema, DbResult};
use crate::model::server::ServerRecord;
use crate::model::user::UserRecord;
use crate::repo::server_repo::{ServerRepository, SqliteServerRepository};
use crate::repo::user_repo::{SqliteUserRepository, UserRepository};
use rusqlite::{Connection, DropBehavior, Transaction};
use std::path::{Path, PathBuf};

/// Store file name used when the caller does not pass one.
pub const DEFAULT_STORE_FILE: &str = "store.db";

/// File-backed record store for user birthdates and server channels.
///
/// Holds only the store location; connections are scoped to single
/// operations, so one value can be shared freely across call sites.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

impl RecordStore {
    /// Creates a store handle for the given file path.
    ///
    /// No connection is opened until the first operation runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the store file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the `Users` and `Servers` tables.
    ///
    /// Single-shot: a second call against the same store propagates SQLite's
    /// `table already exists` error. Callers own one-time initialization;
    /// [`Self::is_initialized`] is the guard for that.
    pub fn initialize(&self) -> DbResult<()> {
        let mut conn = open_store(&self.path)?;
        let tx = scoped_transaction(&mut conn)?;
        schema::create_schema(&tx)?;
        tx.commit()?;
        Ok(())
    }

    /// Returns whether both store tables exist at this location.
    pub fn is_initialized(&self) -> DbResult<bool> {
        let conn = open_store(&self.path)?;
        Ok(schema::table_exists(&conn, "Users")? && schema::table_exists(&conn, "Servers")?)
    }

    /// Creates or updates the record for `user_id`.
    ///
    /// `server` joins the user's server set unless already present;
    /// `birthdate` is overwritten unconditionally.
    pub fn set_user(&self, user_id: i64, server: impl ToString, birthdate: &str) -> DbResult<()> {
        let server = server.to_string();
        let mut conn = open_store(&self.path)?;
        let tx = scoped_transaction(&mut conn)?;
        SqliteUserRepository::new(&tx).set_user(user_id, &server, birthdate)?;
        tx.commit()?;
        Ok(())
    }

    /// Deletes the record for `user_id` if present; unknown ids are a
    /// silent no-op.
    pub fn remove_user(&self, user_id: i64) -> DbResult<()> {
        let mut conn = open_store(&self.path)?;
        let tx = scoped_transaction(&mut conn)?;
        SqliteUserRepository::new(&tx).remove_user(user_id)?;
        tx.commit()?;
        Ok(())
    }

    /// Gets the stored user record, or `None` for an unknown id.
    pub fn query_user(&self, user_id: i64) -> DbResult<Option<UserRecord>> {
        let mut conn = open_store(&self.path)?;
        let tx = scoped_transaction(&mut conn)?;
        let record = SqliteUserRepository::new(&tx).get_user(user_id)?;
        tx.commit()?;
        Ok(record)
    }

    /// Creates or overwrites the notification channel for `server_id`.
    pub fn set_server(&self, server_id: i64, channel_id: i64) -> DbResult<()> {
        let mut conn = open_store(&self.path)?;
        let tx = scoped_transaction(&mut conn)?;
        SqliteServerRepository::new(&tx).set_server(server_id, channel_id)?;
        tx.commit()?;
        Ok(())
    }

    /// Gets the stored channel mapping, or `None` for an unknown id.
    pub fn query_server(&self, server_id: i64) -> DbResult<Option<ServerRecord>> {
        let mut conn = open_store(&self.path)?;
        let tx = scoped_transaction(&mut conn)?;
        let record = SqliteServerRepository::new(&tx).get_server(server_id)?;
        tx.commit()?;
        Ok(record)
    }
}

// Commit-on-drop keeps the failure path aligned with the success path:
// whatever completed before an error is still durably committed when the
// scope unwinds.
fn scoped_transaction(conn: &mut Connection) -> DbResult<Transaction<'_>> {
    let mut tx = conn.transaction()?;
    tx.set_drop_behavior(DropBehavior::Commit);
    Ok(tx)
}
