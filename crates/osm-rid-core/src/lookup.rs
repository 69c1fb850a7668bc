// crates/osm-rid-core/src/lookup.rs
use crate::common::TableStats;
use crate::convert::{self, CountryImport};
use crate::error::{RelationError, Result};
use crate::loader;
use crate::model::RelationTable;
use crate::raw::RowRecord;
use crate::search::{check_query, Resolved};
use crate::text::fold_key;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Country searched when the caller does not name one.
pub const DEFAULT_COUNTRY: &str = "united states";

/// The relation id finder.
///
/// Owns the table for the life of the process. Construction never fails: if
/// the snapshot cannot be read the lookup starts *unbound* and every
/// operation that needs the table returns [`RelationError::Uninitialized`].
///
/// Mutation takes `&mut self`. To share a lookup between threads, wrap it in
/// a `RwLock` so merges and persists exclude readers.
#[derive(Debug, Clone)]
pub struct RelationLookup {
    table: Option<RelationTable>,
    snapshot_path: PathBuf,
    /// Country key -> name as spelled by the import that merged it.
    display_names: IndexMap<String, String>,
    load_error: Option<String>,
}

impl RelationLookup {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_snapshot_filename() -> &'static str {
        "g_osm_relation_id.json"
    }

    pub fn default_snapshot_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_snapshot_filename())
    }

    /// Opens the bundled snapshot (see [`Self::default_snapshot_path`]).
    pub fn load() -> Self {
        Self::open(Self::default_snapshot_path())
    }

    /// Opens the snapshot at `path`; a failed load leaves the lookup unbound.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let snapshot_path = path.into();
        match loader::read_snapshot(&snapshot_path) {
            Ok(table) => Self::from_table(table, snapshot_path),
            Err(e) => {
                tracing::warn!(path = %snapshot_path.display(), error = %e, "relation id table not loaded");
                Self {
                    table: None,
                    snapshot_path,
                    display_names: IndexMap::new(),
                    load_error: Some(e.to_string()),
                }
            }
        }
    }

    /// Like [`Self::open`], but a failed load is returned as the error.
    pub fn try_open(path: impl Into<PathBuf>) -> Result<Self> {
        let snapshot_path = path.into();
        let table = loader::read_snapshot(&snapshot_path)?;
        Ok(Self::from_table(table, snapshot_path))
    }

    /// Starts from an empty table bound to `path`, to seed a new snapshot.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self::from_table(RelationTable::new(), path)
    }

    pub fn from_table(table: RelationTable, path: impl Into<PathBuf>) -> Self {
        Self {
            table: Some(table),
            snapshot_path: path.into(),
            display_names: IndexMap::new(),
            load_error: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    /// Why the snapshot could not be loaded, if it could not.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    pub fn table(&self) -> Result<&RelationTable> {
        self.table.as_ref().ok_or(RelationError::Uninitialized)
    }

    fn table_mut(&mut self) -> Result<&mut RelationTable> {
        self.table.as_mut().ok_or(RelationError::Uninitialized)
    }

    /// Countries in table order.
    ///
    /// Countries merged by this process are listed as spelled in their import;
    /// countries loaded from the snapshot by their (lower-case) key.
    pub fn list_countries(&self) -> Result<Vec<String>> {
        let table = self.table()?;
        Ok(table
            .country_keys()
            .map(|key| {
                self.display_names
                    .get(key)
                    .cloned()
                    .unwrap_or_else(|| key.to_owned())
            })
            .collect())
    }

    /// State keys of `country`, in table order.
    pub fn states(&self, country: &str) -> Result<Vec<String>> {
        let entry = self
            .table()?
            .country(&fold_key(country))
            .ok_or_else(|| RelationError::CountryNotFound {
                country: country.to_owned(),
            })?;
        Ok(entry.keys().cloned().collect())
    }

    pub fn stats(&self) -> Result<TableStats> {
        Ok(self.table()?.stats())
    }

    /// Builds a country from rows without touching the table.
    pub fn import_country<I>(&self, rows: I) -> Result<CountryImport>
    where
        I: IntoIterator<Item = RowRecord>,
    {
        convert::from_rows(rows)
    }

    /// Reads a country CSV and builds it without touching the table.
    #[cfg(feature = "csv")]
    pub fn import_csv(&self, path: impl AsRef<Path>) -> Result<CountryImport> {
        let rows = loader::rows::read_rows(path.as_ref())?;
        self.import_country(rows)
    }

    /// Replaces (or appends) the imported country. Nothing is written to disk
    /// until [`Self::persist`].
    pub fn merge_country(&mut self, import: CountryImport) -> Result<()> {
        let CountryImport {
            country_name,
            country_key,
            entry,
        } = import;

        let replaced = self
            .table_mut()?
            .insert_country(country_key.clone(), entry)
            .is_some();
        tracing::info!(country = %country_name, replaced, "country merged");
        self.display_names.insert(country_key, country_name);
        Ok(())
    }

    /// Overwrites the snapshot file with the whole table.
    pub fn persist(&self) -> Result<()> {
        loader::write_snapshot(&self.snapshot_path, self.table()?)
    }

    /// Import, merge and persist in one step; returns the country key.
    pub fn update_country<I>(&mut self, rows: I) -> Result<String>
    where
        I: IntoIterator<Item = RowRecord>,
    {
        let import = self.import_country(rows)?;
        let key = import.country_key.clone();
        self.merge_country(import)?;
        self.persist()?;
        tracing::info!(country = %key, "country updated");
        Ok(key)
    }

    #[cfg(feature = "csv")]
    pub fn update_country_from_csv(&mut self, path: impl AsRef<Path>) -> Result<String> {
        let rows = loader::rows::read_rows(path.as_ref())?;
        self.update_country(rows)
    }

    /// Resolves a city; see [`RelationTable::resolve`] for the rules.
    ///
    /// `country` defaults to [`DEFAULT_COUNTRY`]. An empty `name` is reported
    /// as [`RelationError::EmptyQuery`] even when the lookup is unbound.
    pub fn resolve(
        &self,
        name: &str,
        country: Option<&str>,
        state: Option<&str>,
    ) -> Result<Resolved> {
        check_query(name)?;
        self.table()?
            .resolve(name, country.unwrap_or(DEFAULT_COUNTRY), state)
    }
}
