//! Domain records persisted by the store.
//!
//! # Responsibility
//! - Define the user and server records exposed to bot callers.
//! - Own the delimited-text set encoding used by the legacy `SERVERS` column.
//!
//! # Invariants
//! - Records mirror stored rows; absence is expressed as `Option` at the
//!   repository boundary, never as a sentinel record.
//! - `ServerSet` never contains duplicates or empty entries.

pub mod server;
pub mod server_set;
pub mod user;
