//! Event handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Navigation
    MoveUp,
    MoveDown,
    JumpToTop,
    JumpToBottom,
    PageUp,
    PageDown,

    // Tree operations
    Collapse,
    Expand,

    /// Open the current folder or play the current file (Enter).
    Activate,

    /// Toggle completed on the current video (Space).
    ToggleComplete,

    // UI toggles
    ToggleHelp,
    ToggleTheme,

    // Other actions
    Refresh,
    NextView,
    PrevView,
    Cancel,

    // Application
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,

            (KeyCode::Esc, _) => KeyAction::Cancel,

            // Navigation - vim style
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::MoveDown,
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::MoveUp,
            (KeyCode::Char('h'), KeyModifiers::NONE) => KeyAction::Collapse,
            (KeyCode::Char('l'), KeyModifiers::NONE) => KeyAction::Expand,

            // Navigation - arrow keys
            (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Up, _) => KeyAction::MoveUp,
            (KeyCode::Left, _) => KeyAction::Collapse,
            (KeyCode::Right, _) => KeyAction::Expand,

            // Jump
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::JumpToTop,
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::JumpToBottom,
            (KeyCode::Home, _) => KeyAction::JumpToTop,
            (KeyCode::End, _) => KeyAction::JumpToBottom,

            // Page navigation
            (KeyCode::PageUp, _) => KeyAction::PageUp,
            (KeyCode::PageDown, _) => KeyAction::PageDown,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::PageUp,
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => KeyAction::PageDown,

            // Completion
            (KeyCode::Char(' '), KeyModifiers::NONE) => KeyAction::ToggleComplete,

            // Open/play
            (KeyCode::Enter, _) => KeyAction::Activate,

            // Rescan
            (KeyCode::Char('R'), KeyModifiers::SHIFT) => KeyAction::Refresh,

            // UI toggles
            (KeyCode::Char('?'), KeyModifiers::NONE) => KeyAction::ToggleHelp,
            (KeyCode::Char('?'), KeyModifiers::SHIFT) => KeyAction::ToggleHelp,
            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTheme,

            // View switching
            (KeyCode::Tab, KeyModifiers::NONE) => KeyAction::NextView,
            (KeyCode::BackTab, _) => KeyAction::PrevView,

            _ => KeyAction::None,
        }
    }
}

/// A section of key bindings for the help display.
pub struct HelpSection {
    pub title: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Get all key bindings organized by section for help display.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Navigation",
            bindings: vec![
                KeyBinding { keys: "j/k ↑/↓", description: "Move up/down" },
                KeyBinding { keys: "h/l ←/→", description: "Collapse/expand folder" },
                KeyBinding { keys: "g/G", description: "Jump to top/bottom" },
                KeyBinding { keys: "Ctrl-u/d", description: "Page up/down" },
            ],
        },
        HelpSection {
            title: "Course",
            bindings: vec![
                KeyBinding { keys: "Enter", description: "Open folder / play file" },
                KeyBinding { keys: "Space", description: "Toggle video completed" },
                KeyBinding { keys: "R", description: "Rescan course folder" },
            ],
        },
        HelpSection {
            title: "Views & Display",
            bindings: vec![
                KeyBinding { keys: "Tab/S-Tab", description: "Switch view" },
                KeyBinding { keys: "t", description: "Toggle dark/light theme" },
                KeyBinding { keys: "Esc", description: "Dismiss status message" },
            ],
        },
        HelpSection {
            title: "Application",
            bindings: vec![
                KeyBinding { keys: "?", description: "Show this help" },
                KeyBinding { keys: "q", description: "Quit" },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
        KeyAction::from_key_event(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_basic_bindings() {
        assert_eq!(key(KeyCode::Char('j'), KeyModifiers::NONE), KeyAction::MoveDown);
        assert_eq!(key(KeyCode::Enter, KeyModifiers::NONE), KeyAction::Activate);
        assert_eq!(key(KeyCode::Char(' '), KeyModifiers::NONE), KeyAction::ToggleComplete);
        assert_eq!(key(KeyCode::Char('R'), KeyModifiers::SHIFT), KeyAction::Refresh);
        assert_eq!(key(KeyCode::Char('q'), KeyModifiers::NONE), KeyAction::Quit);
    }

    #[test]
    fn test_unbound_key_is_none() {
        assert_eq!(key(KeyCode::Char('z'), KeyModifiers::NONE), KeyAction::None);
    }
}
