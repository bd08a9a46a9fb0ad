//! Script Shelf CLI Library
//!
//! This crate provides the command-line interface for script-shelf, the
//! terminal picker for read-me-documented script directories. It handles
//! argument parsing, the two-level interactive menu, and the fire-and-forget
//! hand-off of the built invocation to the injector.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`selection`]: The menu state machine, keystroke mapping and rendering
//! - [`injection`]: Detached dispatch of the invocation injector
//!
//! # Examples
//!
//! ```bash
//! # Browse one script directory
//! shelf ~/scripts/README.md
//!
//! # Merge several directories into one catalog
//! shelf ~/scripts/README.md ~/work/tools/README.md
//!
//! # Show the invocation without injecting it
//! shelf --dry-run ~/scripts/README.md
//! ```

pub mod cli_args;
pub mod injection;
pub mod selection;
