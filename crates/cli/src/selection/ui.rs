//! Terminal rendering for the two-level picker.
//!
//! Raw mode and the alternate screen are held for the whole picking session
//! and restored by an RAII guard, so any early return or error still leaves
//! the terminal usable. Every iteration is a full redraw.

use std::io::{stdout, Write};

use crossterm::cursor::{MoveTo, MoveToNextLine};
use crossterm::style::Color::{DarkGreen, Reset, Yellow};
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{queue, ExecutableCommand};
use itertools::Itertools;
use log::debug;

use script_shelf_core::catalog::Catalog;
use script_shelf_core::error::Result;

use super::input;
use super::navigator::LevelNavigator;
use super::types::{MenuNotice, MenuState};

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Restore the terminal on drop
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

/// Runs the category level, then the script level restricted to the chosen
/// category. Returns the catalog-wide index of the confirmed script, or
/// `None` when the user cancels at either level.
pub fn pick_script(catalog: &Catalog) -> Result<Option<usize>> {
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, the terminal is restored

    let category_names: Vec<String> = catalog
        .categories
        .iter()
        .map(|category| category.name.clone())
        .collect();
    let mut category_level = LevelNavigator::new(category_names);

    let chosen_category = match run_level(&mut category_level, |selection, notice| {
        redraw(catalog, selection, None, notice)
    })? {
        MenuState::Confirmed(index) => index,
        _ => return Ok(None),
    };

    debug!("Category {chosen_category} confirmed");

    let script_indexes: Vec<usize> = catalog
        .scripts
        .iter()
        .positions(|script| script.category == chosen_category)
        .collect();
    let script_names: Vec<String> = script_indexes
        .iter()
        .map(|&index| catalog.scripts[index].name.clone())
        .collect();
    let mut script_level = LevelNavigator::with_selection(script_names, 0);

    match run_level(&mut script_level, |selection, notice| {
        redraw(catalog, Some(chosen_category), selection, notice)
    })? {
        MenuState::Confirmed(position) => Ok(Some(script_indexes[position])),
        _ => Ok(None),
    }
}

/// Drives one navigator until it reaches a terminal state.
fn run_level<F>(navigator: &mut LevelNavigator, mut draw: F) -> Result<MenuState>
where
    F: FnMut(Option<usize>, Option<MenuNotice>) -> Result<()>,
{
    let mut notice = None;

    loop {
        draw(navigator.selection(), notice.take())?;

        let event = input::read_menu_event()?;
        notice = navigator.apply(event);

        match navigator.state() {
            MenuState::Browsing => {}
            terminal_state => return Ok(terminal_state),
        }
    }
}

/// Full redraw: header, category list, the active category's scripts, the
/// highlighted script's description, and any transient notice.
fn redraw(
    catalog: &Catalog,
    category: Option<usize>,
    script_position: Option<usize>,
    notice: Option<MenuNotice>,
) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    queue!(
        stdout,
        SetBackgroundColor(DarkGreen),
        Print("  script-shelf  "),
        SetBackgroundColor(Reset),
        MoveToNextLine(1),
        Print("  up/down: move   letter: jump   enter: confirm   esc: cancel"),
        MoveToNextLine(2),
    )?;

    for (index, category_record) in catalog.categories.iter().enumerate() {
        write_row(
            &mut stdout,
            &format!("{category_record}"),
            category == Some(index),
        )?;
    }

    if catalog.categories.is_empty() {
        queue!(stdout, Print("  (no categories)"), MoveToNextLine(1))?;
    }

    if let Some(category_index) = category {
        queue!(stdout, MoveToNextLine(1))?;

        for (position, (_, script)) in catalog.scripts_in(category_index).enumerate() {
            write_row(&mut stdout, &script.name, script_position == Some(position))?;
        }

        if let Some(position) = script_position {
            if let Some((_, script)) = catalog.scripts_in(category_index).nth(position) {
                queue!(
                    stdout,
                    MoveToNextLine(1),
                    Print(format!("  {}", script.description)),
                    MoveToNextLine(1),
                )?;
            }
        }
    }

    if let Some(notice) = notice {
        queue!(
            stdout,
            MoveToNextLine(1),
            SetForegroundColor(Yellow),
            Print(format!("  {notice}")),
            SetForegroundColor(Reset),
            MoveToNextLine(1),
        )?;
    }

    stdout.flush()?;
    Ok(())
}

/// One list row, reverse-video when highlighted.
fn write_row(stdout: &mut std::io::Stdout, content: &str, is_selected: bool) -> Result<()> {
    if is_selected {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            SetAttribute(Attribute::Reverse),
        )?;
    }

    queue!(stdout, Print(format!("  {content}")))?;

    if is_selected {
        queue!(stdout, SetAttribute(Attribute::Reset))?;
    }

    queue!(stdout, MoveToNextLine(1))?;
    Ok(())
}
