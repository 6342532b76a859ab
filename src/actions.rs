use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    OpenHelp,
    CloseHelp,
    ToggleHeaderPanel,
    FocusNext,
    FocusPrev,
    MinimizeFocused,
    CloseFocused,
    RestoreAll,
    ReopenWindows,
    SelectNextStock,
    SelectPrevStock,
    ToggleMatrixTape,
    ToggleMouseCapture,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::OpenHelp => "Open help",
            Action::CloseHelp => "Close help",
            Action::ToggleHeaderPanel => "Collapse/expand analysis header",
            Action::FocusNext => "Focus next window",
            Action::FocusPrev => "Focus previous window",
            Action::MinimizeFocused => "Minimize focused window",
            Action::CloseFocused => "Close focused window",
            Action::RestoreAll => "Restore all docked windows",
            Action::ReopenWindows => "Reopen default windows",
            Action::SelectNextStock => "Select next stock",
            Action::SelectPrevStock => "Select previous stock",
            Action::ToggleMatrixTape => "Toggle today/previous matrix",
            Action::ToggleMouseCapture => "Toggle mouse capture",
        };
        write!(f, "{}", s)
    }
}
