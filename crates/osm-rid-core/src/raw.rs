// crates/osm-rid-core/src/raw.rs
use serde::{Deserialize, Serialize};

/// One input row: a city and its relation id, as read from a country CSV.
///
/// Columns are `country_name, state_name, city_name, city_id`; other columns
/// (such as `state_id`) are ignored. A blank `state_name` marks a
/// country-level row, which the import skips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRecord {
    pub country_name: String,
    #[serde(default)]
    pub state_name: Option<String>,
    pub city_name: String,
    /// Kept verbatim; the source may hold integers, floats or text here.
    #[serde(default)]
    pub city_id: String,
}

impl RowRecord {
    pub fn new(
        country_name: impl Into<String>,
        state_name: Option<&str>,
        city_name: impl Into<String>,
        city_id: impl Into<String>,
    ) -> Self {
        Self {
            country_name: country_name.into(),
            state_name: state_name.map(str::to_owned),
            city_name: city_name.into(),
            city_id: city_id.into(),
        }
    }
}
