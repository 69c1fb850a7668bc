// crates/osm-rid-core/src/lib.rs

//! Lookup of OpenStreetMap relation ids by country, state and city name.
//!
//! The table is a nested `country -> state -> city -> id` map loaded from a
//! JSON snapshot. Countries are (re)imported from CSV rows, merged one at a
//! time and written back on request. Queries fall back to prefix suggestions
//! when no exact key matches.
//!
//! ```rust
//! use osm_rid_core::{RelationLookup, Resolved, RowRecord};
//!
//! let mut lookup = RelationLookup::empty("g_osm_relation_id.json");
//! let import = lookup.import_country(vec![
//!     RowRecord::new("United States", Some("California"), "Los Angeles", "207359"),
//! ])?;
//! lookup.merge_country(import)?;
//!
//! let hit = lookup.resolve("Los Angeles", Some("United States"), Some("California"))?;
//! assert_eq!(hit.id(), Some("207359"));
//!
//! let near = lookup.resolve("Los", None, None)?;
//! assert!(matches!(near, Resolved::Suggestions { .. }));
//! # Ok::<(), osm_rid_core::RelationError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod convert;
pub mod error;
pub mod loader;
pub mod lookup;
pub mod model;
pub mod raw;
pub mod search;
pub mod text;

// Re-exports
pub use crate::common::TableStats;
pub use crate::convert::CountryImport;
pub use crate::error::{RelationError, Result};
pub use crate::lookup::{RelationLookup, DEFAULT_COUNTRY};
pub use crate::model::{CountryEntry, RelationTable, StateEntry};
pub use crate::raw::RowRecord;
pub use crate::search::{Candidate, Resolved, SuggestionKind};
