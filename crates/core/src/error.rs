use thiserror::Error;

use crate::catalog::MAX_PARAMETERS;
use crate::reconcile::ReconcileReport;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Read-me file does not exist: `{}`", _0)]
    MissingReadme(String),

    #[error("Script directory does not exist: `{}`", _0)]
    MissingDirectory(String),

    #[error("IO error with {} at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error(
        "{}:{}: expected a parameter comment (`<!--`) after a script heading, got: `{}`",
        .path, .line_number, .line
    )]
    MissingParameterComment {
        path: String,
        line_number: usize,
        line: String,
    },

    #[error(
        "{}:{}: a script may document at most {} parameters, but the comment block continues: `{}`",
        .path, .line_number, MAX_PARAMETERS, .line
    )]
    TooManyParameters {
        path: String,
        line_number: usize,
        line: String,
    },

    #[error(
        "{}:{}: script heading appears before any category heading: `{}`",
        .path, .line_number, .line
    )]
    ScriptBeforeCategory {
        path: String,
        line_number: usize,
        line: String,
    },

    #[error("{}: read-me ends in the middle of the entry for `{}`", .path, .script)]
    UnexpectedEnd { path: String, script: String },

    #[error("Catalog and script directories disagree:\n{}", _0)]
    CatalogMismatch(ReconcileReport),

    #[error("Injector command is empty.")]
    EmptyInjector,

    #[error("Terminal error: {}", _0)]
    Terminal(#[from] std::io::Error),
}

impl Error {
    pub fn io_error(file_description: &str, path: &str, original: std::io::Error) -> Self {
        Self::Io {
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }
}
