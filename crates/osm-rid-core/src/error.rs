// crates/osm-rid-core/src/error.rs
use thiserror::Error;

/// Errors raised by the relation id lookup.
///
/// Prefix suggestions are not errors: a query that misses an exact key but
/// matches by prefix returns [`crate::Resolved::Suggestions`].
#[derive(Debug, Error)]
pub enum RelationError {
    #[error("the city name is not provided")]
    EmptyQuery,

    #[error(
        "the country {country} is not found in the database, \
         you can find the available countries by calling list_countries"
    )]
    CountryNotFound { country: String },

    #[error("the state {state} is not found in the country {country}")]
    StateNotFound { state: String, country: String },

    #[error("the city {name} is not found, please check the city name")]
    CityNotFound { name: String },

    #[error("the relation id table is not loaded; load a snapshot or start from an empty table")]
    Uninitialized,

    #[error("no rows to import")]
    EmptyImport,

    #[error("rows mix countries: expected {expected}, found {found}")]
    MixedCountries { expected: String, found: String },

    #[error("{0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "csv")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, RelationError>;
