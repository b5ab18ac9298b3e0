use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Animate one page forward
    NextPage,
    /// Animate one page backward
    PrevPage,
    /// Suspend/resume the auto-scroll clock
    TogglePause,
    /// Re-apply the configured item list (exercises reconfigure)
    Reload,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::Quit,

        // Manual paging
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NextPage,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::PrevPage,
        (KeyCode::Right, KeyModifiers::NONE) => Action::NextPage,
        (KeyCode::Left, KeyModifiers::NONE) => Action::PrevPage,

        // Auto-scroll control
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::TogglePause,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Reload,

        _ => Action::None,
    }
}
