//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Upsert, delete and point-lookup over the legacy `Users` table.
//! - Apply set semantics to the `SERVERS` column on every write.
//!
//! # Invariants
//! - `set_user` overwrites `BIRTHDATE` unconditionally, even when the server
//!   was already registered.
//! - Stored `SERVERS` text keeps append order; duplicates are prevented on
//!   write, not by the schema.

use crate::db::DbResult;
use crate::model::server_set::ServerSet;
use crate::model::user::UserRecord;
use rusqlite::{params, Connection, Row};

const USER_SELECT_SQL: &str = "SELECT
    ID,
    BIRTHDATE,
    SERVERS
FROM Users";

/// Repository interface for user record operations.
pub trait UserRepository {
    /// Creates or updates the record for `user_id`, registering `server`.
    fn set_user(&self, user_id: i64, server: &str, birthdate: &str) -> DbResult<()>;
    /// Deletes the record if present; silent no-op for unknown ids.
    fn remove_user(&self, user_id: i64) -> DbResult<()>;
    /// Gets the full record, or `None` when no row matches.
    fn get_user(&self, user_id: i64) -> DbResult<Option<UserRecord>>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn set_user(&self, user_id: i64, server: &str, birthdate: &str) -> DbResult<()> {
        // Outer Option: row presence. Inner Option: nullable SERVERS column.
        let existing: Option<Option<String>> = {
            let mut stmt = self
                .conn
                .prepare("SELECT SERVERS FROM Users WHERE ID = ?1;")?;
            let mut rows = stmt.query(params![user_id])?;
            match rows.next()? {
                Some(row) => Some(row.get(0)?),
                None => None,
            }
        };

        match existing {
            Some(stored) => {
                let mut servers = stored
                    .map(|text| ServerSet::parse_delimited(&text))
                    .unwrap_or_default();
                servers.insert(server);

                self.conn.execute(
                    "UPDATE Users
                     SET BIRTHDATE = ?1, SERVERS = ?2
                     WHERE ID = ?3;",
                    params![birthdate, servers.to_delimited(), user_id],
                )?;
            }
            None => {
                let mut servers = ServerSet::new();
                servers.insert(server);

                self.conn.execute(
                    "INSERT INTO Users (ID, BIRTHDATE, SERVERS) VALUES (?1, ?2, ?3);",
                    params![user_id, birthdate, servers.to_delimited()],
                )?;
            }
        }

        Ok(())
    }

    fn remove_user(&self, user_id: i64) -> DbResult<()> {
        self.conn
            .execute("DELETE FROM Users WHERE ID = ?1;", params![user_id])?;
        Ok(())
    }

    fn get_user(&self, user_id: i64) -> DbResult<Option<UserRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE ID = ?1;"))?;
        let mut rows = stmt.query(params![user_id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }
}

fn parse_user_row(row: &Row<'_>) -> DbResult<UserRecord> {
    let servers = match row.get::<_, Option<String>>("SERVERS")? {
        Some(text) => ServerSet::parse_delimited(&text),
        None => ServerSet::new(),
    };

    Ok(UserRecord {
        id: row.get("ID")?,
        birthdate: row.get("BIRTHDATE")?,
        servers,
    })
}
