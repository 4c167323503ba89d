//! User record persisted in the `Users` table.
//!
//! # Invariants
//! - At most one record per user id (primary key).
//! - `birthdate` is opaque text; the store never validates its format.

use crate::model::server_set::ServerSet;
use serde::{Deserialize, Serialize};

/// Stored birthdate/server association for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// External user identifier.
    pub id: i64,
    /// Caller-supplied date text, expected `mm/dd` but stored as-is.
    pub birthdate: String,
    /// Servers the user has registered from, in registration order.
    pub servers: ServerSet,
}

impl UserRecord {
    /// Creates the record shape produced by a first registration from a
    /// single server.
    pub fn new(id: i64, birthdate: impl Into<String>, server: impl ToString) -> Self {
        let mut servers = ServerSet::new();
        servers.insert(server);
        Self {
            id,
            birthdate: birthdate.into(),
            servers,
        }
    }
}
