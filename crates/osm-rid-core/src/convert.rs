// crates/osm-rid-core/src/convert.rs
use crate::error::{RelationError, Result};
use crate::model::{state_marker_key, CountryEntry};
use crate::raw::RowRecord;
use crate::text::{fold_key, is_blank};

/// A country built from row records, ready to be merged into a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryImport {
    /// Country name as spelled in the first row.
    pub country_name: String,
    /// Folded form of `country_name`; the table key.
    pub country_key: String,
    pub entry: CountryEntry,
}

impl CountryImport {
    /// Cities across all states, not counting the state markers.
    pub fn city_count(&self) -> usize {
        self.entry
            .iter()
            .map(|(state_key, cities)| {
                let marker = state_marker_key(state_key);
                cities.keys().filter(|k| **k != marker).count()
            })
            .sum()
    }
}

/// **Row Converter:** rows of one country -> [`CountryImport`].
///
/// The first row names the country and every other row must name the same
/// one (compared case-insensitively), otherwise the import fails with
/// [`RelationError::MixedCountries`]. Rows without a state are skipped. City
/// keys are folded and a repeated city overwrites the earlier id. Each state
/// ends with its `"<state>_state"` marker set to the empty id.
pub fn from_rows<I>(rows: I) -> Result<CountryImport>
where
    I: IntoIterator<Item = RowRecord>,
{
    let mut rows = rows.into_iter();
    let first = rows.next().ok_or(RelationError::EmptyImport)?;

    let country_name = first.country_name.clone();
    let country_key = fold_key(&country_name);
    let mut entry = CountryEntry::new();

    for row in std::iter::once(first).chain(rows) {
        if fold_key(&row.country_name) != country_key {
            return Err(RelationError::MixedCountries {
                expected: country_name,
                found: row.country_name,
            });
        }

        let state_key = match row.state_name.as_deref() {
            Some(state) if !is_blank(state) => fold_key(state),
            _ => continue,
        };

        entry
            .entry(state_key)
            .or_default()
            .insert(fold_key(&row.city_name), row.city_id);
    }

    for (state_key, cities) in entry.iter_mut() {
        cities.insert(state_marker_key(state_key), String::new());
    }

    tracing::info!(country = %country_name, states = entry.len(), "country rows read");

    Ok(CountryImport {
        country_name,
        country_key,
        entry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(state: Option<&str>, city: &str, id: &str) -> RowRecord {
        RowRecord::new("United States", state, city, id)
    }

    #[test]
    fn partitions_by_state_and_adds_markers() {
        let import = from_rows(vec![
            row(Some("California"), "Los Angeles", "207359"),
            row(Some("New York"), "New York", "175905"),
            row(Some("California"), "San Francisco", "111968"),
        ])
        .unwrap();

        assert_eq!(import.country_name, "United States");
        assert_eq!(import.country_key, "united states");
        assert_eq!(
            import.entry.keys().collect::<Vec<_>>(),
            ["california", "new york"]
        );

        let california = &import.entry["california"];
        assert_eq!(
            california.iter().collect::<Vec<_>>(),
            [
                (&"los angeles".to_string(), &"207359".to_string()),
                (&"san francisco".to_string(), &"111968".to_string()),
                (&"california_state".to_string(), &String::new()),
            ]
        );
        assert_eq!(import.entry["new york"]["new york_state"], "");
    }

    #[test]
    fn skips_rows_without_state() {
        let import = from_rows(vec![
            row(None, "Washington", "5396194"),
            row(Some("  "), "Nowhere", "1"),
            row(Some("Texas"), "Austin", "113314"),
        ])
        .unwrap();

        assert_eq!(import.entry.keys().collect::<Vec<_>>(), ["texas"]);
        assert_eq!(import.entry["texas"].len(), 2);
    }

    #[test]
    fn duplicate_city_last_write_wins() {
        let import = from_rows(vec![
            row(Some("Texas"), "Austin", "1"),
            row(Some("Texas"), "AUSTIN", "2"),
        ])
        .unwrap();

        assert_eq!(import.entry["texas"]["austin"], "2");
        assert_eq!(import.entry["texas"].len(), 2);
    }

    #[test]
    fn state_rows_fold_into_one_entry() {
        let import = from_rows(vec![
            row(Some("Texas"), "Austin", "1"),
            row(Some("TEXAS"), "Dallas", "2"),
        ])
        .unwrap();

        assert_eq!(import.entry.len(), 1);
        assert_eq!(import.entry["texas"].len(), 3);
    }

    #[test]
    fn city_named_like_the_marker_is_absorbed() {
        let import = from_rows(vec![
            row(Some("Texas"), "Austin", "113314"),
            row(Some("Texas"), "Texas_State", "114690"),
            row(Some("Ohio"), "Columbus", "182706"),
        ])
        .unwrap();

        assert_eq!(import.entry["texas"].len(), 2);
        assert_eq!(import.entry["texas"]["texas_state"], "");
        assert_eq!(import.city_count(), 2);
    }

    #[test]
    fn country_only_rows_give_empty_entry() {
        let import = from_rows(vec![row(None, "Washington", "5396194")]).unwrap();
        assert!(import.entry.is_empty());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            from_rows(Vec::new()),
            Err(RelationError::EmptyImport)
        ));
    }

    #[test]
    fn rejects_mixed_countries() {
        let err = from_rows(vec![
            row(Some("Texas"), "Austin", "1"),
            RowRecord::new("China", Some("Beijing"), "Beijing", "912940"),
        ])
        .unwrap_err();

        match err {
            RelationError::MixedCountries { expected, found } => {
                assert_eq!(expected, "United States");
                assert_eq!(found, "China");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn country_comparison_ignores_case() {
        let import = from_rows(vec![
            row(Some("Texas"), "Austin", "1"),
            RowRecord::new("UNITED STATES", Some("Texas"), "Dallas", "2"),
        ])
        .unwrap();
        assert_eq!(import.entry["texas"].len(), 3);
    }
}
