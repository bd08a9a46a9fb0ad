//! Bidirectional consistency check between the catalog and the script
//! directories.
//!
//! Direction A: every catalogued file reference must exist in its source
//! directory. Direction B: every script file on disk must be mentioned by
//! some read-me. Direction B deliberately keeps the lenient historical
//! matching rule: a bare file name occurring anywhere in any read-me's text
//! counts as mentioned, even if only in prose.

use std::fmt::{Display, Formatter};
use std::fs;

use indexmap::IndexSet;
use log::debug;

use crate::catalog::Catalog;
use crate::config::SCRIPT_EXTENSION;
use crate::error::{Error, Result};
use crate::sources::ReadmeSource;

/// The two violation lists, each ordered and duplicate-free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Catalogued file references that do not resolve to a file on disk.
    pub missing_on_disk: Vec<String>,
    /// Script files on disk that no read-me mentions.
    pub missing_in_catalog: Vec<String>,
}

impl ReconcileReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing_on_disk.is_empty() && self.missing_in_catalog.is_empty()
    }
}

impl Display for ReconcileReport {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(formatter, "Present in catalog but missing from disk:")?;
        write_list(formatter, &self.missing_on_disk)?;
        writeln!(formatter, "Present on disk but missing from catalog:")?;
        write_list(formatter, &self.missing_in_catalog)
    }
}

fn write_list(formatter: &mut Formatter<'_>, entries: &[String]) -> std::fmt::Result {
    if entries.is_empty() {
        return writeln!(formatter, "  none");
    }

    for entry in entries {
        writeln!(formatter, "  - {entry}")?;
    }

    Ok(())
}

/// Cross-validates the merged catalog against the source directories.
///
/// All mismatches are collected in both directions before returning, so the
/// user can fix the read-mes and directories in one pass. A non-empty report
/// makes the catalog unusable; the caller must not enter the menu.
///
/// # Errors
///
/// Returns an error only when a source directory cannot be listed.
pub fn reconcile(catalog: &Catalog, sources: &[ReadmeSource]) -> Result<ReconcileReport> {
    let mut missing_on_disk: IndexSet<String> = IndexSet::new();
    let mut missing_in_catalog: IndexSet<String> = IndexSet::new();

    for script in &catalog.scripts {
        let resolved = script.source_dir.join(&script.file);
        if !resolved.is_file() {
            missing_on_disk.insert(format!(
                "{} (expected in {})",
                script.file,
                script.source_dir.display()
            ));
        }
    }

    for source in sources {
        for file_name in script_files_in(source)? {
            // Scripts may be shared between read-me directories, so the
            // mention is looked for across every source, not just this one.
            let mentioned = sources.iter().any(|s| s.text.contains(&file_name));

            if !mentioned {
                missing_in_catalog.insert(format!(
                    "{} (found in {})",
                    file_name,
                    source.directory.display()
                ));
            }
        }
    }

    debug!(
        "Reconciliation: {} missing on disk, {} missing in catalog",
        missing_on_disk.len(),
        missing_in_catalog.len()
    );

    Ok(ReconcileReport {
        missing_on_disk: missing_on_disk.into_iter().collect(),
        missing_in_catalog: missing_in_catalog.into_iter().collect(),
    })
}

/// Sorted names of the script files in one source directory.
fn script_files_in(source: &ReadmeSource) -> Result<Vec<String>> {
    let directory = &source.directory;
    let entries = fs::read_dir(directory).map_err(|e| {
        Error::io_error("script directory", &directory.display().to_string(), e)
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::io_error("script directory", &directory.display().to_string(), e)
        })?;

        let path = entry.path();
        let is_script = path.is_file()
            && path
                .extension()
                .is_some_and(|extension| extension == SCRIPT_EXTENSION);

        if is_script {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    names.sort();
    Ok(names)
}
