//! Use-case facade over the repository layer.
//!
//! # Responsibility
//! - Expose the public store operations with per-operation connection scope.
//!
//! # Invariants
//! - Every operation commits its transaction and releases its connection on
//!   every exit path; no connection outlives one call.

pub mod record_store;
