// crates/osm-rid-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, gzip) for the two inputs of the
//! lookup: the relation id snapshot (JSON) and country row files (CSV).

use crate::error::Result;
use crate::model::RelationTable;
use std::path::Path;

pub mod common_io;

#[cfg(feature = "csv")]
pub mod rows;

/// Reads a snapshot file into a table, keeping the file's key order.
#[cfg(feature = "json")]
pub fn read_snapshot(path: &Path) -> Result<RelationTable> {
    let reader = common_io::open_stream(path)?;
    let table: RelationTable = serde_json::from_reader(reader)?;
    tracing::info!(path = %path.display(), countries = table.len(), "snapshot loaded");
    Ok(table)
}

#[cfg(not(feature = "json"))]
pub fn read_snapshot(path: &Path) -> Result<RelationTable> {
    Err(crate::error::RelationError::InvalidData(format!(
        "cannot read {}: 'json' is disabled",
        path.display()
    )))
}

/// Serializes `table` as 4-space indented JSON and overwrites `path`.
#[cfg(feature = "json")]
pub fn write_snapshot(path: &Path, table: &RelationTable) -> Result<()> {
    use serde::Serialize;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    table.serialize(&mut ser)?;

    common_io::write_bytes(path, &buf)?;
    tracing::info!(path = %path.display(), countries = table.len(), "snapshot written");
    Ok(())
}

#[cfg(not(feature = "json"))]
pub fn write_snapshot(path: &Path, _table: &RelationTable) -> Result<()> {
    Err(crate::error::RelationError::InvalidData(format!(
        "cannot write {}: 'json' is disabled",
        path.display()
    )))
}
