//! Types shared by the menu navigator, input mapping and rendering.

use std::fmt::{Display, Formatter};

/// Abstract navigation event, decoupled from the keys that produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    MoveNext,
    MovePrevious,
    JumpTo(char),
    Confirm,
    Cancel,
    Unknown,
}

/// State of one menu level. `Confirmed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Browsing,
    Confirmed(usize),
    Cancelled,
}

/// Transient feedback shown to the user without leaving `Browsing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuNotice {
    NothingSelected,
    UnrecognizedInput,
}

impl Display for MenuNotice {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuNotice::NothingSelected => formatter.write_str("pick one before confirming"),
            MenuNotice::UnrecognizedInput => formatter.write_str("unrecognized input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_messages() {
        assert_eq!(
            format!("{}", MenuNotice::NothingSelected),
            "pick one before confirming"
        );
        assert_eq!(
            format!("{}", MenuNotice::UnrecognizedInput),
            "unrecognized input"
        );
    }

    #[test]
    fn test_menu_state_equality() {
        assert_eq!(MenuState::Confirmed(3), MenuState::Confirmed(3));
        assert_ne!(MenuState::Confirmed(3), MenuState::Confirmed(4));
        assert_ne!(MenuState::Browsing, MenuState::Cancelled);
    }
}
