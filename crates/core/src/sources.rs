//! Read-me source loading and startup validation.
//!
//! Each command-line argument names a read-me file whose parent directory is
//! treated as a script source directory. Both must exist before any parsing
//! happens; a missing file or directory is a fatal startup error.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config;
use crate::error::{Error, Result};

/// One read-me file: its expanded path, its script directory, and its text.
#[derive(Debug, Clone)]
pub struct ReadmeSource {
    pub path: String,
    pub directory: PathBuf,
    pub text: String,
}

impl ReadmeSource {
    /// Validates and reads a single read-me path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its parent directory does not exist,
    /// or if the file cannot be read.
    pub fn load(raw_path: &str) -> Result<Self> {
        let path = config::expand_readme_path(raw_path);
        let readme = Path::new(&path);

        if !readme.is_file() {
            return Err(Error::MissingReadme(path));
        }

        let directory = match readme.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        if !directory.is_dir() {
            return Err(Error::MissingDirectory(directory.display().to_string()));
        }

        let text = fs::read_to_string(readme)
            .map_err(|e| Error::io_error("read-me", &path, e))?;

        debug!("Loaded read-me `{path}` ({} bytes)", text.len());

        Ok(Self {
            path,
            directory,
            text,
        })
    }
}

/// Loads every read-me in the order supplied by the caller.
///
/// # Errors
///
/// Fails on the first argument whose file or directory is missing or
/// unreadable; no partial source list is returned.
pub fn load_sources(raw_paths: &[String]) -> Result<Vec<ReadmeSource>> {
    raw_paths.iter().map(|p| ReadmeSource::load(p)).collect()
}
