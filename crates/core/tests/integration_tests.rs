//! Integration tests for script-shelf-core
//!
//! These tests run the whole pipeline end-to-end against real temporary
//! directories: load read-mes, merge the catalog, reconcile it against the
//! files on disk, and build invocations.

use script_shelf_core::{
    catalog::Parameters,
    error::Error,
    invocation::build_invocation,
    merge::merge_catalogs,
    reconcile::reconcile,
    sources::{load_sources, ReadmeSource},
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const UTILITIES_README: &str = "\
# Utility scripts

## Contents

- [Backup](#backup)
- [Cleanup](#cleanup)

## Utilities

### [Backup](backup.sh)
<!-- source dir
<!-- destination dir -->
Copies the source directory to the destination.

### [Cleanup](cleanup.sh)
<!-- (none) -->
Removes stale temporary files.
";

fn write_source(directory: &Path, name: &str, text: &str) -> String {
    let path = directory.join(name);
    fs::write(&path, text).unwrap();
    path.to_str().unwrap().to_string()
}

fn touch_script(directory: &Path, name: &str) {
    fs::write(directory.join(name), "#!/bin/sh\n").unwrap();
}

/// One contents section, one category with two scripts, a directory holding
/// exactly those two files: the catalog parses and reconciles cleanly.
#[test]
fn test_single_readme_catalog_reconciles_cleanly() {
    let dir = tempdir().unwrap();
    let readme = write_source(dir.path(), "README.md", UTILITIES_README);
    touch_script(dir.path(), "backup.sh");
    touch_script(dir.path(), "cleanup.sh");

    let sources = load_sources(&[readme]).unwrap();
    let catalog = merge_catalogs(&sources).unwrap();

    assert_eq!(catalog.categories.len(), 1);
    assert_eq!(catalog.categories[0].name, "Utilities");
    assert_eq!(catalog.categories[0].script_count, 2);

    assert_eq!(catalog.scripts.len(), 2);
    assert_eq!(catalog.scripts[0].name, "Backup");
    assert_eq!(
        catalog.scripts[0].parameters,
        Parameters::Documented(vec![
            "source dir".to_string(),
            "destination dir".to_string()
        ])
    );
    assert_eq!(catalog.scripts[1].name, "Cleanup");
    assert_eq!(catalog.scripts[1].parameters, Parameters::None);

    let report = reconcile(&catalog, &sources).unwrap();
    assert!(report.is_clean());
}

/// Same read-me, but cleanup.sh is gone from disk: reconciliation reports
/// exactly that file under "missing from disk" and nothing else.
#[test]
fn test_missing_file_fails_reconciliation() {
    let dir = tempdir().unwrap();
    let readme = write_source(dir.path(), "README.md", UTILITIES_README);
    touch_script(dir.path(), "backup.sh");

    let sources = load_sources(&[readme]).unwrap();
    let catalog = merge_catalogs(&sources).unwrap();
    let report = reconcile(&catalog, &sources).unwrap();

    assert!(!report.is_clean());
    assert_eq!(report.missing_on_disk.len(), 1);
    assert!(report.missing_on_disk[0].starts_with("cleanup.sh "));
    assert!(report.missing_in_catalog.is_empty());

    let rendered = format!("{}", Error::CatalogMismatch(report));
    assert!(rendered.contains("Present in catalog but missing from disk:"));
    assert!(rendered.contains("cleanup.sh"));
}

/// Selecting the parameterless script yields an invocation with no trailing
/// space.
#[test]
fn test_parameterless_invocation_has_no_trailing_space() {
    let dir = tempdir().unwrap();
    let readme = write_source(dir.path(), "README.md", UTILITIES_README);
    touch_script(dir.path(), "backup.sh");
    touch_script(dir.path(), "cleanup.sh");

    let sources = load_sources(&[readme]).unwrap();
    let catalog = merge_catalogs(&sources).unwrap();

    let utilities: Vec<_> = catalog.scripts_in(0).collect();
    assert_eq!(utilities.len(), 2);

    let (_, cleanup) = utilities[1];
    assert_eq!(build_invocation(cleanup), "cleanup.sh");

    let (_, backup) = utilities[0];
    assert_eq!(build_invocation(backup), "backup.sh ");
}

/// Two read-mes in two directories merge into one catalog with globally
/// contiguous category numbering, and reconciliation spans both directories.
#[test]
fn test_multi_source_merge_and_reconcile() {
    let utilities_dir = tempdir().unwrap();
    let network_dir = tempdir().unwrap();

    let network_readme = "\
## Contents

## Network

### [Ping Sweep](sweep.sh)
<!-- subnet -->
Pings every host on a subnet.
";

    let first = write_source(utilities_dir.path(), "README.md", UTILITIES_README);
    let second = write_source(network_dir.path(), "README.md", network_readme);
    touch_script(utilities_dir.path(), "backup.sh");
    touch_script(utilities_dir.path(), "cleanup.sh");
    touch_script(network_dir.path(), "sweep.sh");

    let sources = load_sources(&[first, second]).unwrap();
    let catalog = merge_catalogs(&sources).unwrap();

    assert_eq!(catalog.categories.len(), 2);
    assert_eq!(catalog.categories[1].name, "Network");
    assert_eq!(catalog.scripts[2].category, 1);
    assert_eq!(catalog.scripts[2].source_dir, network_dir.path());

    let report = reconcile(&catalog, &sources).unwrap();
    assert!(report.is_clean());
}

/// A script file is allowed to be mentioned by a different read-me than the
/// one in whose directory it lives.
#[test]
fn test_file_mentioned_by_another_source_is_catalogued() {
    let first_dir = tempdir().unwrap();
    let second_dir = tempdir().unwrap();

    // shared.sh lives in the second directory but is only mentioned by the
    // first read-me's prose.
    let first = write_source(
        first_dir.path(),
        "README.md",
        "## Contents\n\nThe heavy lifting lives in shared.sh elsewhere.\n",
    );
    let second = write_source(second_dir.path(), "README.md", "## Contents\n");
    touch_script(second_dir.path(), "shared.sh");

    let sources = load_sources(&[first, second]).unwrap();
    let catalog = merge_catalogs(&sources).unwrap();
    let report = reconcile(&catalog, &sources).unwrap();

    assert!(report.is_clean());
}

/// Parsing, re-serializing with `to_markdown`, and parsing again round-trips
/// every catalog field.
#[test]
fn test_markdown_round_trip_preserves_catalog_fields() {
    let dir = tempdir().unwrap();
    let readme = write_source(dir.path(), "README.md", UTILITIES_README);

    let sources = load_sources(&[readme]).unwrap();
    let catalog = merge_catalogs(&sources).unwrap();

    let rendered = catalog.to_markdown();
    let rendered_source = ReadmeSource {
        path: "rendered.md".to_string(),
        directory: dir.path().to_path_buf(),
        text: rendered,
    };
    let reparsed = merge_catalogs(std::slice::from_ref(&rendered_source)).unwrap();

    assert_eq!(reparsed, catalog);
}

/// Startup errors: a missing read-me file aborts before any parsing.
#[test]
fn test_missing_readme_argument_is_fatal() {
    let result = load_sources(&["/does/not/exist/README.md".to_string()]);
    assert!(matches!(result, Err(Error::MissingReadme(_))));
}
