//! osm-rid-rs: umbrella crate re-exporting [`osm_rid_core`].
pub use osm_rid_core::*;
