//! Server record persisted in the `Servers` table.
//!
//! # Invariants
//! - At most one channel per server id; later writes overwrite the channel.

use serde::{Deserialize, Serialize};

/// Stored notification-channel mapping for one server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    /// External server identifier.
    pub id: i64,
    /// Channel that receives birthday notifications for this server.
    pub channel: i64,
}
