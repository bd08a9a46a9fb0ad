use std::env;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use script_shelf_core::catalog::{Parameters, Script};
use script_shelf_core::config::{DEFAULT_INJECTOR, INJECTOR_ENV};
use script_shelf_core::error::{Error, Result};
use script_shelf_core::{invocation, merge, reconcile, sources};

mod cli_args;
mod injection;
pub mod selection;

/// The injector command line: flag, then environment, then the default.
fn resolve_injector(args: &cli_args::Args) -> String {
    args.injector
        .clone()
        .or_else(|| env::var(INJECTOR_ENV).ok())
        .unwrap_or_else(|| DEFAULT_INJECTOR.to_string())
}

fn print_selection(script: &Script, invocation_text: &str) {
    println!("Selected {} ({})", script.name, script.file);

    match &script.parameters {
        Parameters::None => println!("Takes no parameters."),
        Parameters::Documented(descriptions) => {
            println!("Parameters:");
            for (position, description) in descriptions.iter().enumerate() {
                println!("  {}. {description}", position + 1);
            }
        }
    }

    println!("Invocation: {invocation_text}");
}

fn execute() -> Result<()> {
    let args = cli_args::Args::parse();

    // Startup validation happens here, before any parsing.
    let sources = sources::load_sources(&args.readmes)?;

    let catalog = merge::merge_catalogs(&sources)?;
    debug!(
        "Catalog holds {} categories and {} scripts from {} read-me(s)",
        catalog.categories.len(),
        catalog.scripts.len(),
        sources.len()
    );

    let report = reconcile::reconcile(&catalog, &sources)?;
    if !report.is_clean() {
        // Both violation lists are rendered in full; the menu is never shown.
        return Err(Error::CatalogMismatch(report));
    }

    let Some(script_index) = selection::pick_script(&catalog)? else {
        println!("Nothing picked. Bye!");
        return Ok(());
    };

    let script = &catalog.scripts[script_index];
    let invocation_text = invocation::build_invocation(script);
    print_selection(script, &invocation_text);

    if args.dry_run {
        println!("Dry run is specified, skipping injection.");
        return Ok(());
    }

    let injector = resolve_injector(&args);
    injection::dispatch(&injector, &invocation_text)?;
    info!("Invocation handed off; exiting.");

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
