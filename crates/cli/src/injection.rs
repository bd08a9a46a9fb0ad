//! Fire-and-forget dispatch of the invocation to the injector.
//!
//! The injector is an external program responsible for placing the built
//! invocation, unexecuted, at the user's next prompt. It is spawned detached
//! and never waited on; whether it succeeds is not part of this process's
//! success or failure.

use std::process::{Command, Stdio};
use std::thread;

use log::info;

use script_shelf_core::config::INJECTION_DELAY;
use script_shelf_core::error::{Error, Result};

/// Builds the injector command: the configured command line split on
/// whitespace, with the invocation text appended as the final argument.
///
/// # Errors
///
/// Returns [`Error::EmptyInjector`] when the configured command is blank.
pub fn build_injector_command(injector: &str, invocation: &str) -> Result<Command> {
    let mut parts = injector.split_whitespace();

    let Some(program) = parts.next() else {
        return Err(Error::EmptyInjector);
    };

    let mut command = Command::new(program);
    command
        .args(parts)
        .arg(invocation)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    Ok(command)
}

/// Sleeps [`INJECTION_DELAY`] so the terminal teardown settles, then spawns
/// the injector detached.
///
/// # Errors
///
/// Returns an error if the injector command is blank or cannot be spawned.
pub fn dispatch(injector: &str, invocation: &str) -> Result<()> {
    let mut command = build_injector_command(injector, invocation)?;

    thread::sleep(INJECTION_DELAY);

    let child = command.spawn()?;
    info!("Dispatched injector `{injector}` (pid {})", child.id());

    Ok(())
}
