//! Store schema creation and introspection.
//!
//! # Responsibility
//! - Create the `Users` and `Servers` tables for a fresh store file.
//! - Report schema state for initialization guards and version gating.
//!
//! # Invariants
//! - Table and column names match the legacy store layout byte-for-byte.
//! - `create_schema` is single-shot: it fails on a store that already has
//!   the tables instead of silently reapplying them.

use crate::db::DbResult;
use rusqlite::Connection;

/// Schema version stamped into `PRAGMA user_version` by [`create_schema`].
pub const SCHEMA_VERSION: u32 = 1;

const INIT_SQL: &str = include_str!("0001_init.sql");

/// Creates the record-store tables on the provided connection.
///
/// The statements carry no `IF NOT EXISTS` guard: running this against an
/// already-initialized store propagates SQLite's `table already exists`
/// error to the caller.
pub fn create_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(INIT_SQL)?;
    conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    Ok(())
}

/// Reads the schema version recorded in the store.
///
/// Stores created before version stamping report `0`.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

/// Returns whether a table with the given name exists in the store.
pub fn table_exists(conn: &Connection, table_name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
