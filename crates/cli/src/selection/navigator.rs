//! The per-level selection state machine.
//!
//! One `LevelNavigator` drives one menu level over a fixed range of named
//! items. It never touches the terminal; events come in, a terminal state or
//! a transient notice comes out.

use super::types::{MenuEvent, MenuNotice, MenuState};

pub struct LevelNavigator {
    names: Vec<String>,
    selection: Option<usize>,
    state: MenuState,
}

impl LevelNavigator {
    /// A level with no initial selection (the category level).
    #[must_use]
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            selection: None,
            state: MenuState::Browsing,
        }
    }

    /// A level pre-set to an item (the script level starts on the chosen
    /// category's first script).
    #[must_use]
    pub fn with_selection(names: Vec<String>, index: usize) -> Self {
        let selection = if names.is_empty() {
            None
        } else {
            Some(index.min(names.len() - 1))
        };

        Self {
            names,
            selection,
            state: MenuState::Browsing,
        }
    }

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Applies one event, possibly producing a transient notice.
    ///
    /// Events arriving after a terminal state are ignored.
    pub fn apply(&mut self, event: MenuEvent) -> Option<MenuNotice> {
        if self.state != MenuState::Browsing {
            return None;
        }

        match event {
            MenuEvent::MoveNext => {
                self.move_next();
                None
            }
            MenuEvent::MovePrevious => {
                self.move_previous();
                None
            }
            MenuEvent::JumpTo(letter) => {
                self.jump_to(letter);
                None
            }
            MenuEvent::Confirm => match self.selection {
                Some(index) => {
                    self.state = MenuState::Confirmed(index);
                    None
                }
                None => Some(MenuNotice::NothingSelected),
            },
            MenuEvent::Cancel => {
                self.state = MenuState::Cancelled;
                None
            }
            MenuEvent::Unknown => Some(MenuNotice::UnrecognizedInput),
        }
    }

    fn move_next(&mut self) {
        if self.names.is_empty() {
            return;
        }

        self.selection = Some(match self.selection {
            None => 0,
            Some(index) => (index + 1) % self.names.len(),
        });
    }

    fn move_previous(&mut self) {
        if self.names.is_empty() {
            return;
        }

        self.selection = Some(match self.selection {
            None | Some(0) => self.names.len() - 1,
            Some(index) => index - 1,
        });
    }

    /// First item whose name starts with `letter`, case-insensitively,
    /// scanning from the start of the range. No match leaves the selection
    /// unchanged.
    fn jump_to(&mut self, letter: char) {
        let found = self.names.iter().position(|name| {
            name.chars()
                .next()
                .is_some_and(|first| first.eq_ignore_ascii_case(&letter))
        });

        if let Some(index) = found {
            self.selection = Some(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_move_next_wraps_at_end() {
        let mut navigator = LevelNavigator::with_selection(names(&["a", "b", "c"]), 2);
        navigator.apply(MenuEvent::MoveNext);
        assert_eq!(navigator.selection(), Some(0));
    }

    #[test]
    fn test_move_previous_wraps_at_start() {
        let mut navigator = LevelNavigator::with_selection(names(&["a", "b", "c"]), 0);
        navigator.apply(MenuEvent::MovePrevious);
        assert_eq!(navigator.selection(), Some(2));
    }

    #[test]
    fn test_moves_on_single_item_range_stay_put() {
        let mut navigator = LevelNavigator::with_selection(names(&["only"]), 0);
        navigator.apply(MenuEvent::MoveNext);
        assert_eq!(navigator.selection(), Some(0));
        navigator.apply(MenuEvent::MovePrevious);
        assert_eq!(navigator.selection(), Some(0));
    }

    #[test]
    fn test_moves_from_unset_selection() {
        let mut next = LevelNavigator::new(names(&["a", "b", "c"]));
        next.apply(MenuEvent::MoveNext);
        assert_eq!(next.selection(), Some(0));

        let mut previous = LevelNavigator::new(names(&["a", "b", "c"]));
        previous.apply(MenuEvent::MovePrevious);
        assert_eq!(previous.selection(), Some(2));
    }

    #[test]
    fn test_moves_on_empty_range_are_noops() {
        let mut navigator = LevelNavigator::new(Vec::new());
        navigator.apply(MenuEvent::MoveNext);
        navigator.apply(MenuEvent::MovePrevious);
        assert_eq!(navigator.selection(), None);
    }

    #[test]
    fn test_jump_is_case_insensitive() {
        let mut navigator = LevelNavigator::new(names(&["alpha", "Beta", "gamma"]));
        navigator.apply(MenuEvent::JumpTo('b'));
        assert_eq!(navigator.selection(), Some(1));
        navigator.apply(MenuEvent::JumpTo('G'));
        assert_eq!(navigator.selection(), Some(2));
    }

    #[test]
    fn test_jump_without_match_leaves_selection() {
        let mut navigator = LevelNavigator::with_selection(names(&["alpha", "beta"]), 1);
        navigator.apply(MenuEvent::JumpTo('z'));
        assert_eq!(navigator.selection(), Some(1));
    }

    #[test]
    fn test_jump_is_idempotent_not_cyclic() {
        // Two entries share an initial; repeated jumps stay on the first.
        let mut navigator = LevelNavigator::new(names(&["backup", "build", "clean"]));
        navigator.apply(MenuEvent::JumpTo('b'));
        assert_eq!(navigator.selection(), Some(0));
        navigator.apply(MenuEvent::JumpTo('b'));
        assert_eq!(navigator.selection(), Some(0));
    }

    #[test]
    fn test_confirm_without_selection_is_a_notice() {
        let mut navigator = LevelNavigator::new(names(&["a"]));
        let notice = navigator.apply(MenuEvent::Confirm);
        assert_eq!(notice, Some(MenuNotice::NothingSelected));
        assert_eq!(navigator.state(), MenuState::Browsing);
    }

    #[test]
    fn test_confirm_with_selection_is_terminal() {
        let mut navigator = LevelNavigator::with_selection(names(&["a", "b"]), 1);
        let notice = navigator.apply(MenuEvent::Confirm);
        assert_eq!(notice, None);
        assert_eq!(navigator.state(), MenuState::Confirmed(1));
    }

    #[test]
    fn test_cancel_is_terminal() {
        let mut navigator = LevelNavigator::new(names(&["a"]));
        navigator.apply(MenuEvent::Cancel);
        assert_eq!(navigator.state(), MenuState::Cancelled);
    }

    #[test]
    fn test_unknown_input_is_a_notice() {
        let mut navigator = LevelNavigator::new(names(&["a"]));
        let notice = navigator.apply(MenuEvent::Unknown);
        assert_eq!(notice, Some(MenuNotice::UnrecognizedInput));
        assert_eq!(navigator.state(), MenuState::Browsing);
    }

    #[test]
    fn test_events_after_terminal_state_are_ignored() {
        let mut navigator = LevelNavigator::with_selection(names(&["a", "b"]), 0);
        navigator.apply(MenuEvent::Confirm);
        navigator.apply(MenuEvent::MoveNext);
        assert_eq!(navigator.state(), MenuState::Confirmed(0));
        assert_eq!(navigator.selection(), Some(0));
    }

    #[test]
    fn test_with_selection_clamps_to_range() {
        let navigator = LevelNavigator::with_selection(names(&["a", "b"]), 9);
        assert_eq!(navigator.selection(), Some(1));
    }
}
