//! Basic usage example for osm-rid-rs
//!
//! This example demonstrates how to:
//! - Build a table in memory from country rows
//! - Resolve a city to its relation id
//! - Read city and state suggestions for partial names
//! - Handle lookup errors

use osm_rid_rs::{RelationError, RelationLookup, Resolved, Result, RowRecord};

fn main() -> Result<()> {
    println!("=== osm-rid-rs Basic Usage Example ===\n");

    // Nothing is written unless `persist` is called.
    let path = std::env::temp_dir().join("osm_rid_basic_usage.json");
    let mut lookup = RelationLookup::empty(&path);

    let rows = vec![
        RowRecord::new("United States", Some("California"), "Los Angeles", "207359"),
        RowRecord::new("United States", Some("California"), "San Francisco", "111968"),
        RowRecord::new("United States", Some("California"), "San Diego", "253832"),
        RowRecord::new("United States", Some("New York"), "New York", "175905"),
    ];
    let import = lookup.import_country(rows)?;
    println!(
        "Imported {}: {} states, {} cities",
        import.country_name,
        import.entry.len(),
        import.city_count()
    );
    lookup.merge_country(import)?;
    println!("Countries: {:?}\n", lookup.list_countries()?);

    // Example 1: Exact match
    println!("--- Example 1: Exact match ---");
    let resolved = lookup.resolve("Los Angeles", None, Some("California"))?;
    println!("Los Angeles -> {:?}\n", resolved.id());

    // Example 2: City prefix across all states
    println!("--- Example 2: City suggestions ---");
    if let Resolved::Suggestions { candidates, .. } = lookup.resolve("San", None, None)? {
        for c in candidates {
            println!("- {} ({})", c.name, c.id);
        }
    }
    println!();

    // Example 3: State prefix
    println!("--- Example 3: State suggestions ---");
    let resolved = lookup.resolve("Los Angeles", None, Some("Cali"))?;
    for c in resolved.candidates() {
        println!("- {}", c.name);
    }
    println!();

    // Example 4: Errors
    println!("--- Example 4: Error handling ---");
    match lookup.resolve("Miami", None, None) {
        Err(RelationError::CityNotFound { name }) => println!("No city matches {name}"),
        other => println!("Unexpected: {other:?}"),
    }
    match lookup.resolve("Paris", Some("France"), None) {
        Err(e) => println!("Error: {e}"),
        Ok(r) => println!("Unexpected: {r:?}"),
    }

    Ok(())
}
