// crates/osm-rid-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the relation table.
///
/// Returned by [`crate::RelationTable::stats`]. State marker entries are
/// counted as states, never as cities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    pub countries: usize,
    pub states: usize,
    pub cities: usize,
}
