//! Configuration constants and path utilities for script-shelf.

use std::time::Duration;

/// File extension that marks a directory entry as a script.
pub const SCRIPT_EXTENSION: &str = "sh";

/// Environment variable that overrides the injector command.
pub const INJECTOR_ENV: &str = "SCRIPT_SHELF_INJECTOR";

/// Default command used to place the invocation at the user's prompt.
/// The invocation text is appended as the final argument.
pub const DEFAULT_INJECTOR: &str = "xdotool type --";

/// Pause before dispatching the injector, so this process's own terminal
/// teardown has settled by the time keystrokes arrive.
pub const INJECTION_DELAY: Duration = Duration::from_millis(400);

/// Expands shell constructs like `~` in a user-supplied read-me path.
pub fn expand_readme_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}
