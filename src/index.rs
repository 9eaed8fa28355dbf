//! First-wins keyed index over decoded rows

use crate::types::{KeyedIndex, Row};
use indexmap::map::Entry;

/// Index built from a table, with the number of rows left out for duplicate keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyedBuild {
    /// Rows by key value, in first-seen key order
    pub index: KeyedIndex,
    /// Rows dropped because their key was already indexed
    pub duplicate_keys: usize,
}

/// Map each row's `key` value to the row, keeping the first row per value
///
/// Rows without the key column, or with a null key, are skipped. A later row
/// whose key is already indexed is dropped without error.
pub fn build_keyed_index<I>(rows: I, key: &str) -> KeyedBuild
where
    I: IntoIterator<Item = Row>,
{
    let mut build = KeyedBuild::default();

    for row in rows {
        let Some(value) = row.get(key) else {
            continue;
        };
        match build.index.entry(value.to_string()) {
            Entry::Occupied(entry) => {
                tracing::debug!(key, value = %entry.key(), "duplicate key, keeping first row");
                build.duplicate_keys += 1;
            }
            Entry::Vacant(entry) => {
                entry.insert(row);
            }
        }
    }

    build
}
