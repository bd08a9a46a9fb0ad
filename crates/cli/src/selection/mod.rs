//! Interactive two-level menu for browsing the catalog.
//!
//! The menu runs at two levels: first a category is picked, then a script
//! within that category. Each level is the same state machine driven by
//! abstract navigation events; the raw keystroke mapping and the terminal
//! rendering live in their own submodules so the machine itself stays pure.
//!
//! # Keyboard
//!
//! - Up/Down arrows move through the list, wrapping at either end
//! - A letter jumps to the first entry starting with it
//! - Enter confirms the highlighted entry
//! - Escape or Space cancels the whole run

// Export public items from submodules
pub mod input;
pub mod navigator;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use navigator::LevelNavigator;
pub use types::{MenuEvent, MenuNotice, MenuState};
pub use ui::pick_script;
