// crates/osm-rid-core/src/search.rs

//! # Resolve
//!
//! Exact lookup with prefix fallback over a [`RelationTable`].
//!
//! A query names a city, a country and optionally a state. Matching is
//! case-insensitive ([`fold_key`]) and prefix-only; there is no edit-distance
//! or accent folding. When no exact key exists the search answers with the
//! keys that start with the query, so the caller can pick one.

use crate::error::{RelationError, Result};
use crate::model::{CountryEntry, RelationTable, StateEntry};
use crate::text::{fold_key, is_blank};
use serde::Serialize;
use std::borrow::Cow;

/// One prefix match: a key of the searched scope and its id.
///
/// State candidates always carry an empty id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub name: String,
    pub id: String,
}

impl Candidate {
    fn new(name: &str, id: &str) -> Self {
        Self {
            name: name.to_owned(),
            id: id.to_owned(),
        }
    }
}

/// Which level of the table a suggestion list was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    State,
    City,
}

/// Successful outcome of [`RelationTable::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum Resolved {
    /// Exact key match. `id` may be the empty placeholder.
    Found { name: String, id: String },
    /// No exact key, but these keys start with the query.
    Suggestions {
        kind: SuggestionKind,
        candidates: Vec<Candidate>,
    },
}

impl Resolved {
    /// The relation id of an exact match.
    pub fn id(&self) -> Option<&str> {
        match self {
            Resolved::Found { id, .. } => Some(id),
            Resolved::Suggestions { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolved::Found { .. })
    }

    /// Suggested candidates; empty for an exact match.
    pub fn candidates(&self) -> &[Candidate] {
        match self {
            Resolved::Found { .. } => &[],
            Resolved::Suggestions { candidates, .. } => candidates,
        }
    }
}

/// Rejects empty or whitespace-only city names.
pub fn check_query(name: &str) -> Result<()> {
    if is_blank(name) {
        return Err(RelationError::EmptyQuery);
    }
    Ok(())
}

/// All cities of a country in one map.
///
/// States are folded in insertion order. A city key present in several states
/// keeps the position where it was first seen and the id of the last state
/// that holds it.
pub fn union_of_states(country: &CountryEntry) -> StateEntry {
    country
        .values()
        .fold(StateEntry::new(), |mut scope, cities| {
            scope.extend(cities.iter().map(|(k, v)| (k.clone(), v.clone())));
            scope
        })
}

fn prefix_matches<'a, V, F>(
    keys: impl Iterator<Item = (&'a String, V)>,
    prefix: &str,
    id_of: F,
) -> Vec<Candidate>
where
    F: Fn(V) -> &'a str,
{
    keys.filter(|(k, _)| k.starts_with(prefix))
        .map(|(k, v)| Candidate::new(k, id_of(v)))
        .collect()
}

impl RelationTable {
    /// Resolves `name` within `country` (and `state`, when given).
    ///
    /// - `Found` when the folded name is a key of the scope; an exact key wins
    ///   even if longer keys share it as a prefix.
    /// - `Suggestions` of state keys when `state` is not a key but prefixes
    ///   one or more; the city search is skipped then.
    /// - `Suggestions` of city keys when `name` is not a key but prefixes some.
    ///
    /// A blank `state` is treated as absent and the whole country is searched
    /// (see [`union_of_states`]).
    ///
    /// # Errors
    ///
    /// [`RelationError::EmptyQuery`], [`RelationError::CountryNotFound`],
    /// [`RelationError::StateNotFound`] or [`RelationError::CityNotFound`].
    pub fn resolve(&self, name: &str, country: &str, state: Option<&str>) -> Result<Resolved> {
        check_query(name)?;

        let country_entry =
            self.country(&fold_key(country))
                .ok_or_else(|| RelationError::CountryNotFound {
                    country: country.to_owned(),
                })?;

        let scope: Cow<'_, StateEntry> = match state.filter(|s| !is_blank(s)) {
            Some(state) => {
                let state_key = fold_key(state);
                match country_entry.get(&state_key) {
                    Some(cities) => Cow::Borrowed(cities),
                    None => {
                        let candidates =
                            prefix_matches(country_entry.iter(), &state_key, |_| "");
                        if candidates.is_empty() {
                            return Err(RelationError::StateNotFound {
                                state: state.to_owned(),
                                country: country.to_owned(),
                            });
                        }
                        tracing::debug!(
                            %state,
                            %country,
                            matches = candidates.len(),
                            "state not found, suggesting states by prefix"
                        );
                        return Ok(Resolved::Suggestions {
                            kind: SuggestionKind::State,
                            candidates,
                        });
                    }
                }
            }
            None => {
                tracing::debug!(%country, "state not provided, searching all states");
                Cow::Owned(union_of_states(country_entry))
            }
        };

        let key = fold_key(name);
        if let Some(id) = scope.get(&key) {
            return Ok(Resolved::Found {
                name: key,
                id: id.clone(),
            });
        }

        let candidates = prefix_matches(scope.iter(), &key, String::as_str);
        if candidates.is_empty() {
            return Err(RelationError::CityNotFound {
                name: name.to_owned(),
            });
        }
        tracing::debug!(%name, matches = candidates.len(), "city not found, suggesting cities by prefix");
        Ok(Resolved::Suggestions {
            kind: SuggestionKind::City,
            candidates,
        })
    }
}
