//! osm-rid-cli
//! ===========
//!
//! Command-line interface for the `osm-rid-core` relation id lookup.
//!
//! The binary (`osm-rid`) parses [`args::CliArgs`] and hands them to [`run`],
//! which opens the snapshot, calls the lookup and prints the outcome.
//!
//! Basic usage:
//!
//! ```text
//! osm-rid countries
//! osm-rid find "Los Angeles" --state California
//! osm-rid find Beijing --country China
//! osm-rid --snapshot data/g_osm_relation_id.json import us_cities.csv
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use osm_rid_core::{RelationError, RelationLookup, Resolved, SuggestionKind};
use std::io::Write;

/// Executes one parsed command, writing human-readable output to `out`.
pub fn run(args: CliArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let snapshot = args
        .snapshot
        .unwrap_or_else(RelationLookup::default_snapshot_path);

    match args.command {
        Commands::Stats => {
            let stats = open(snapshot)?.stats()?;
            writeln!(out, "Relation id table:")?;
            writeln!(out, "  Countries: {}", stats.countries)?;
            writeln!(out, "  States: {}", stats.states)?;
            writeln!(out, "  Cities: {}", stats.cities)?;
        }

        Commands::Countries => {
            for country in open(snapshot)?.list_countries()? {
                writeln!(out, "{country}")?;
            }
        }

        Commands::States { country } => {
            for state in open(snapshot)?.states(&country)? {
                writeln!(out, "- {state}")?;
            }
        }

        Commands::Find {
            name,
            country,
            state,
        } => {
            let lookup = open(snapshot)?;
            let resolved = lookup.resolve(&name, Some(&country), state.as_deref())?;
            write_resolved(out, &name, state.as_deref(), &resolved)?;
        }

        #[cfg(feature = "csv")]
        Commands::Import { csv, dry_run, init } => {
            // Only a missing snapshot may be replaced; an unreadable one is kept.
            let mut lookup = match RelationLookup::try_open(&snapshot) {
                Ok(lookup) => lookup,
                Err(RelationError::NotFound(_)) if init => {
                    tracing::info!(path = %snapshot.display(), "starting from an empty table");
                    RelationLookup::empty(&snapshot)
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("loading relation id snapshot {}", snapshot.display())
                    })
                }
            };

            let import = lookup
                .import_csv(&csv)
                .with_context(|| format!("reading {}", csv.display()))?;
            let states = import.entry.len();
            let cities = import.city_count();
            let name = import.country_name.clone();

            if dry_run {
                writeln!(out, "the country {name} is read: {states} states, {cities} cities (dry run)")?;
                return Ok(());
            }

            lookup.merge_country(import)?;
            lookup
                .persist()
                .with_context(|| format!("writing {}", lookup.snapshot_path().display()))?;
            writeln!(out, "the country {name} is updated: {states} states, {cities} cities")?;
        }
    }

    Ok(())
}

fn open(snapshot: std::path::PathBuf) -> anyhow::Result<RelationLookup> {
    RelationLookup::try_open(&snapshot)
        .with_context(|| format!("loading relation id snapshot {}", snapshot.display()))
}

/// Prints a resolve outcome: the id of an exact match, or the candidates.
pub fn write_resolved(
    out: &mut impl Write,
    name: &str,
    state: Option<&str>,
    resolved: &Resolved,
) -> std::io::Result<()> {
    match resolved {
        Resolved::Found { id, .. } => writeln!(out, "Relation id: {name}: {id}"),
        Resolved::Suggestions {
            kind: SuggestionKind::State,
            candidates,
        } => {
            writeln!(
                out,
                "The state {} is not found, but these states start with it:",
                state.unwrap_or_default()
            )?;
            for c in candidates {
                writeln!(out, "{}", c.name)?;
            }
            Ok(())
        }
        Resolved::Suggestions {
            kind: SuggestionKind::City,
            candidates,
        } => {
            writeln!(
                out,
                "The city {name} is not found, but these cities start with it:"
            )?;
            for c in candidates {
                writeln!(out, "{}: {}", c.name, c.id)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use osm_rid_core::Candidate;

    fn render(name: &str, state: Option<&str>, resolved: &Resolved) -> String {
        let mut buf = Vec::new();
        write_resolved(&mut buf, name, state, resolved).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn found_line() {
        let r = Resolved::Found {
            name: "los angeles".into(),
            id: "207359".into(),
        };
        assert_eq!(render("Los Angeles", None, &r), "Relation id: Los Angeles: 207359\n");
    }

    #[test]
    fn city_suggestions_list_ids() {
        let r = Resolved::Suggestions {
            kind: SuggestionKind::City,
            candidates: vec![
                Candidate {
                    name: "san francisco".into(),
                    id: "111968".into(),
                },
                Candidate {
                    name: "san diego".into(),
                    id: "253832".into(),
                },
            ],
        };
        let text = render("San", None, &r);
        assert!(text.ends_with("san francisco: 111968\nsan diego: 253832\n"));
    }

    #[test]
    fn state_suggestions_list_names_only() {
        let r = Resolved::Suggestions {
            kind: SuggestionKind::State,
            candidates: vec![Candidate {
                name: "california".into(),
                id: String::new(),
            }],
        };
        let text = render("Los Angeles", Some("Calif"), &r);
        assert!(text.contains("The state Calif"));
        assert!(text.ends_with("\ncalifornia\n"));
    }

    fn snapshot(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("rid.json");
        std::fs::write(
            &path,
            r#"{"united states": {"california": {"los angeles": "207359", "california_state": ""}}}"#,
        )
        .unwrap();
        path
    }

    fn run_to_string(argv: &[&str]) -> anyhow::Result<String> {
        let args = CliArgs::try_parse_from(argv)?;
        let mut buf = Vec::new();
        run(args, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn find_command_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = snapshot(&dir);
        let path = path.to_str().unwrap();

        let text = run_to_string(&["osm-rid", "--snapshot", path, "find", "los angeles"]).unwrap();
        assert_eq!(text, "Relation id: los angeles: 207359\n");

        let err = run_to_string(&["osm-rid", "--snapshot", path, "find", "Miami"]).unwrap_err();
        assert!(err.to_string().contains("Miami"));
    }

    #[test]
    fn missing_snapshot_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = run_to_string(&["osm-rid", "--snapshot", path.to_str().unwrap(), "countries"])
            .unwrap_err();
        assert!(format!("{err:#}").contains("absent.json"));
    }

    #[cfg(feature = "csv")]
    #[test]
    fn import_with_init_creates_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = dir.path().join("new/rid.json");
        let csv = dir.path().join("cn.csv");
        std::fs::write(
            &csv,
            "country_name,state_name,city_name,city_id\nChina,Beijing,Beijing,912940\n",
        )
        .unwrap();

        let text = run_to_string(&[
            "osm-rid",
            "--snapshot",
            snapshot.to_str().unwrap(),
            "import",
            csv.to_str().unwrap(),
            "--init",
        ])
        .unwrap();
        assert_eq!(text, "the country China is updated: 1 states, 1 cities\n");

        let countries = run_to_string(&["osm-rid", "--snapshot", snapshot.to_str().unwrap(), "countries"])
            .unwrap();
        assert_eq!(countries, "china\n");
    }

    #[cfg(feature = "csv")]
    #[test]
    fn import_with_init_refuses_corrupt_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = dir.path().join("rid.json");
        let corrupt = r#"{"united states": {"texas": {"austin": "113314",}}}"#;
        std::fs::write(&snapshot, corrupt).unwrap();
        let csv = dir.path().join("cn.csv");
        std::fs::write(
            &csv,
            "country_name,state_name,city_name,city_id\nChina,Beijing,Beijing,912940\n",
        )
        .unwrap();

        let err = run_to_string(&[
            "osm-rid",
            "--snapshot",
            snapshot.to_str().unwrap(),
            "import",
            csv.to_str().unwrap(),
            "--init",
        ])
        .unwrap_err();

        assert!(format!("{err:#}").contains("rid.json"));
        assert_eq!(std::fs::read_to_string(&snapshot).unwrap(), corrupt);
    }

    #[cfg(feature = "csv")]
    #[test]
    fn import_counts_skip_state_markers() {
        let dir = tempfile::tempdir().unwrap();
        let path = snapshot(&dir);
        let csv = dir.path().join("us.csv");
        std::fs::write(
            &csv,
            "country_name,state_name,city_name,city_id\n\
             United States,Texas,Austin,113314\n\
             United States,Texas,Texas_State,114690\n\
             United States,Ohio,Columbus,182706\n",
        )
        .unwrap();

        let text = run_to_string(&[
            "osm-rid",
            "--snapshot",
            path.to_str().unwrap(),
            "import",
            csv.to_str().unwrap(),
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(
            text,
            "the country United States is read: 2 states, 2 cities (dry run)\n"
        );
    }
}
