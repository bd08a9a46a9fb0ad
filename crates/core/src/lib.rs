//! Script Shelf Core Library
//!
//! This crate provides the core functionality for script-shelf, a terminal
//! picker that turns semi-structured read-me files into a browsable catalog
//! of auxiliary scripts.
//!
//! # Key Features
//!
//! - **Catalog Parsing**: A line-oriented state machine that extracts
//!   categories, script declarations, documented parameters and descriptions
//!   from a read-me's Markdown subset
//! - **Catalog Merging**: Aggregation of any number of read-mes into one
//!   catalog with globally-numbered categories
//! - **Reconciliation**: A bidirectional consistency check between the
//!   catalog and the script files actually on disk
//! - **Invocation Building**: The final command text prepared for injection
//!   at the user's prompt
//! - **Error Handling**: Structured error types for every failure mode
//!
//! # Examples
//!
//! Building a validated catalog from a read-me:
//!
//! ```no_run
//! use script_shelf_core::{merge, reconcile, sources};
//!
//! let sources = sources::load_sources(&["~/scripts/README.md".to_string()])?;
//! let catalog = merge::merge_catalogs(&sources)?;
//! let report = reconcile::reconcile(&catalog, &sources)?;
//! assert!(report.is_clean());
//! # Ok::<(), script_shelf_core::error::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod invocation;
pub mod merge;
pub mod parser;
pub mod reconcile;
pub mod sources;
