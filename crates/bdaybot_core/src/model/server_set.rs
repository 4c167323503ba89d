//! Ordered set of server identifiers with a delimited-text storage encoding.
//!
//! # Responsibility
//! - Give `SERVERS` column data genuine set semantics in memory.
//! - Preserve the legacy comma-joined text encoding at the storage edge.
//!
//! # Invariants
//! - Entries are unique and kept in first-insertion order.
//! - Empty entries are never stored; empty text decodes to the empty set.

use serde::de::{Deserialize, Deserializer};
use serde::Serialize;
use std::fmt::{Display, Formatter};

const DELIMITER: char = ',';

/// Ordered, duplicate-free set of server-id strings.
///
/// The store keeps this as one comma-joined text value, so sets stay small;
/// linear scans are deliberate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ServerSet {
    entries: Vec<String>,
}

impl ServerSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the stored comma-joined text form.
    ///
    /// Empty segments are dropped and duplicates collapse to their first
    /// occurrence, so hand-edited or legacy rows never produce empty-string
    /// entries.
    pub fn parse_delimited(text: &str) -> Self {
        let mut set = Self::new();
        for entry in text.split(DELIMITER) {
            set.insert(entry);
        }
        set
    }

    /// Encodes the set into its stored text form: comma-joined, no
    /// surrounding whitespace, first-insertion order.
    pub fn to_delimited(&self) -> String {
        self.entries.join(",")
    }

    /// Appends a server id unless it is already present or empty.
    ///
    /// Returns `true` when the set changed.
    pub fn insert(&mut self, server: impl ToString) -> bool {
        let server = server.to_string();
        if server.is_empty() || self.contains(&server) {
            return false;
        }
        self.entries.push(server);
        true
    }

    /// Returns whether the given server id is present.
    pub fn contains(&self, server: &str) -> bool {
        self.entries.iter().any(|entry| entry == server)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Display for ServerSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_delimited())
    }
}

impl<'de> Deserialize<'de> for ServerSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Decoded input must satisfy the same uniqueness invariant as
        // entries built through `insert`.
        let entries = Vec::<String>::deserialize(deserializer)?;
        let mut set = Self::new();
        for entry in entries {
            set.insert(entry);
        }
        Ok(set)
    }
}
