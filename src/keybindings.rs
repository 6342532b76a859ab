use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// The default binding table, in help-overlay display order.
pub fn default_bindings() -> Vec<(KeyCombo, Action)> {
    vec![
        (
            KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
            Action::Quit,
        ),
        (KeyCombo::plain(KeyCode::Char('?')), Action::OpenHelp),
        (KeyCombo::plain(KeyCode::Esc), Action::CloseHelp),
        (
            KeyCombo::plain(KeyCode::Char('t')),
            Action::ToggleHeaderPanel,
        ),
        (KeyCombo::plain(KeyCode::Tab), Action::FocusNext),
        (KeyCombo::plain(KeyCode::BackTab), Action::FocusPrev),
        (KeyCombo::plain(KeyCode::Char('m')), Action::MinimizeFocused),
        (KeyCombo::plain(KeyCode::Char('x')), Action::CloseFocused),
        (KeyCombo::plain(KeyCode::Char('r')), Action::RestoreAll),
        (
            KeyCombo::new(KeyCode::Char('n'), KeyModifiers::CONTROL),
            Action::ReopenWindows,
        ),
        (KeyCombo::plain(KeyCode::Down), Action::SelectNextStock),
        (KeyCombo::plain(KeyCode::Up), Action::SelectPrevStock),
        (KeyCombo::plain(KeyCode::Char('p')), Action::ToggleMatrixTape),
        (
            KeyCombo::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            Action::ToggleMouseCapture,
        ),
    ]
}

/// First binding matching `key`, if any.
pub fn action_for(bindings: &[(KeyCombo, Action)], key: &KeyEvent) -> Option<Action> {
    bindings
        .iter()
        .find(|(combo, _)| combo.matches(key))
        .map(|(_, action)| *action)
}
