// crates/osm-rid-core/src/loader/rows.rs
#![cfg(feature = "csv")]

use super::common_io;
use crate::error::Result;
use crate::raw::RowRecord;
use std::io::Read;
use std::path::Path;

/// Reads every row of a country CSV (plain or `*.csv.gz`).
pub fn read_rows(path: &Path) -> Result<Vec<RowRecord>> {
    let reader = common_io::open_stream(path)?;
    let rows = rows_from_reader(reader)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "country rows parsed");
    Ok(rows)
}

/// Parses CSV with a header row into [`RowRecord`]s.
pub fn rows_from_reader<R: Read>(reader: R) -> Result<Vec<RowRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: RowRecord = result?;
        rows.push(record);
    }
    Ok(rows)
}
