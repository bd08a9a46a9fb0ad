//! Command-line argument parsing for the `shelf` binary.

use clap::Parser;

/// Command-line arguments for the script-shelf picker.
///
/// The only required input is one or more read-me paths; each path's parent
/// directory is treated as a script source directory.
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Paths to read-me files documenting script directories.
    ///
    /// Each path's parent directory is scanned for script files during
    /// reconciliation.
    #[arg(required = true, num_args(1..))]
    pub readmes: Vec<String>,

    /// Print the invocation instead of dispatching the injector.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// Injector command that places the invocation at the next prompt.
    ///
    /// Overrides the `SCRIPT_SHELF_INJECTOR` environment variable. The
    /// invocation text is appended as the command's final argument.
    #[arg(long, short = 'i')]
    pub injector: Option<String>,
}
