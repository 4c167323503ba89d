//! Server repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Upsert and point-lookup over the legacy `Servers` table.
//!
//! # Invariants
//! - A later `set_server` overwrites the stored channel for that id.
//! - No delete path exists for server records.

use crate::db::DbResult;
use crate::model::server::ServerRecord;
use rusqlite::{params, Connection, Row};

/// Repository interface for server channel mappings.
pub trait ServerRepository {
    /// Creates or overwrites the notification channel for `server_id`.
    fn set_server(&self, server_id: i64, channel_id: i64) -> DbResult<()>;
    /// Gets the channel mapping, or `None` when no row matches.
    fn get_server(&self, server_id: i64) -> DbResult<Option<ServerRecord>>;
}

/// SQLite-backed server repository.
pub struct SqliteServerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteServerRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ServerRepository for SqliteServerRepository<'_> {
    fn set_server(&self, server_id: i64, channel_id: i64) -> DbResult<()> {
        let exists = {
            let mut stmt = self.conn.prepare("SELECT 1 FROM Servers WHERE ID = ?1;")?;
            let mut rows = stmt.query(params![server_id])?;
            rows.next()?.is_some()
        };

        if exists {
            self.conn.execute(
                "UPDATE Servers SET CHANNEL = ?1 WHERE ID = ?2;",
                params![channel_id, server_id],
            )?;
        } else {
            self.conn.execute(
                "INSERT INTO Servers (ID, CHANNEL) VALUES (?1, ?2);",
                params![server_id, channel_id],
            )?;
        }

        Ok(())
    }

    fn get_server(&self, server_id: i64) -> DbResult<Option<ServerRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT ID, CHANNEL FROM Servers WHERE ID = ?1;")?;
        let mut rows = stmt.query(params![server_id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_server_row(row)?));
        }

        Ok(None)
    }
}

fn parse_server_row(row: &Row<'_>) -> DbResult<ServerRecord> {
    Ok(ServerRecord {
        id: row.get("ID")?,
        channel: row.get("CHANNEL")?,
    })
}
