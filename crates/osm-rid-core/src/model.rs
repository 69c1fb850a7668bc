// crates/osm-rid-core/src/model.rs
use crate::common::TableStats;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Suffix of the synthetic per-state entry holding the state's own id.
pub const STATE_MARKER_SUFFIX: &str = "_state";

/// City key -> relation id for one state.
///
/// An empty id is a placeholder for "not assigned yet". Besides the cities,
/// every entry built by an import carries one state marker keyed
/// `"<state key>_state"` (see [`state_marker_key`]).
pub type StateEntry = IndexMap<String, String>;

/// State key -> [`StateEntry`] for one country.
pub type CountryEntry = IndexMap<String, StateEntry>;

/// Key of the state marker entry for `state_key`.
///
/// ```rust
/// use osm_rid_core::model::state_marker_key;
///
/// assert_eq!(state_marker_key("california"), "california_state");
/// ```
pub fn state_marker_key(state_key: &str) -> String {
    format!("{state_key}{STATE_MARKER_SUFFIX}")
}

/// The relation id table: country key -> state key -> city key -> id.
///
/// Serializes as the bare nested JSON object used by the snapshot file. All
/// three levels keep insertion order, which is also the order every search
/// walks them in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationTable {
    countries: IndexMap<String, CountryEntry>,
}

impl RelationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Country keys in insertion order.
    pub fn country_keys(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    /// Looks up a country by its (already folded) key.
    pub fn country(&self, key: &str) -> Option<&CountryEntry> {
        self.countries.get(key)
    }

    pub fn countries(&self) -> impl Iterator<Item = (&str, &CountryEntry)> {
        self.countries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Inserts `entry` under `key`, replacing any previous entry wholesale.
    ///
    /// A replaced country keeps its position; a new one is appended.
    pub fn insert_country(&mut self, key: String, entry: CountryEntry) -> Option<CountryEntry> {
        self.countries.insert(key, entry)
    }

    pub fn stats(&self) -> TableStats {
        let mut stats = TableStats {
            countries: self.countries.len(),
            ..TableStats::default()
        };
        for states in self.countries.values() {
            stats.states += states.len();
            for (state_key, cities) in states {
                let marker = state_marker_key(state_key);
                stats.cities += cities.keys().filter(|k| **k != marker).count();
            }
        }
        stats
    }
}

impl FromIterator<(String, CountryEntry)> for RelationTable {
    fn from_iter<I: IntoIterator<Item = (String, CountryEntry)>>(iter: I) -> Self {
        Self {
            countries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn california() -> CountryEntry {
        let mut cities = StateEntry::new();
        cities.insert("los angeles".into(), "207359".into());
        cities.insert("san francisco".into(), "111968".into());
        cities.insert(state_marker_key("california"), String::new());
        let mut states = CountryEntry::new();
        states.insert("california".into(), cities);
        states
    }

    #[test]
    fn stats_skip_state_markers() {
        let table: RelationTable = [("united states".to_string(), california())]
            .into_iter()
            .collect();
        assert_eq!(
            table.stats(),
            TableStats {
                countries: 1,
                states: 1,
                cities: 2,
            }
        );
    }

    #[test]
    fn insert_country_replaces_in_place() {
        let mut table = RelationTable::new();
        table.insert_country("china".into(), CountryEntry::new());
        table.insert_country("united states".into(), california());

        let previous = table.insert_country("china".into(), california());
        assert!(previous.is_some_and(|p| p.is_empty()));
        assert_eq!(
            table.country_keys().collect::<Vec<_>>(),
            ["china", "united states"]
        );
        assert!(table.country("china").is_some_and(|c| c.contains_key("california")));
    }
}
