use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NextSection,
    PrevSection,
    FirstSection,
    LastSection,
    /// Jump to a section by zero-based index (digit keys)
    GoToSection(usize),
    ToggleEffects,
    ToggleHelp,
    ExitMode,
    Quit,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // Any key closes the help overlay
    if app.mode == Mode::Help {
        return Action::ExitMode;
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Section navigation
        (KeyCode::Down, _) | (KeyCode::PageDown, _) => Action::NextSection,
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::NextSection,
        (KeyCode::Up, _) | (KeyCode::PageUp, _) => Action::PrevSection,
        (KeyCode::Home, _) => Action::FirstSection,
        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::FirstSection,
        (KeyCode::End, _) => Action::LastSection,
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::LastSection,

        // Direct jumps, like clicking a navigation dot
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::GoToSection(c as usize - '1' as usize)
        }

        // Toggles
        (KeyCode::Char('e'), KeyModifiers::NONE) => Action::ToggleEffects,
        (KeyCode::Char('?'), _) => Action::ToggleHelp,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageflow_core::{AppConfig, Deck};

    fn app() -> App {
        App::new(AppConfig::default(), Deck::demo())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        let app = app();
        assert_eq!(handle_key_event(key(KeyCode::Down), &app), Action::NextSection);
        assert_eq!(handle_key_event(key(KeyCode::PageDown), &app), Action::NextSection);
        assert_eq!(handle_key_event(key(KeyCode::Char(' ')), &app), Action::NextSection);
        assert_eq!(handle_key_event(key(KeyCode::Up), &app), Action::PrevSection);
        assert_eq!(handle_key_event(key(KeyCode::PageUp), &app), Action::PrevSection);
        assert_eq!(handle_key_event(key(KeyCode::Home), &app), Action::FirstSection);
        assert_eq!(handle_key_event(key(KeyCode::End), &app), Action::LastSection);
    }

    #[test]
    fn test_digit_jump() {
        let app = app();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('1')), &app),
            Action::GoToSection(0)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('9')), &app),
            Action::GoToSection(8)
        );
    }

    #[test]
    fn test_quit_keys() {
        let app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app), Action::Quit);
        assert_eq!(
            handle_key_event(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &app
            ),
            Action::Quit
        );
    }

    #[test]
    fn test_any_key_leaves_help() {
        let mut app = app();
        app.mode = Mode::Help;
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &app), Action::ExitMode);
        assert_eq!(handle_key_event(key(KeyCode::Down), &app), Action::ExitMode);
    }

    #[test]
    fn test_unbound_key_is_none() {
        let app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('z')), &app), Action::None);
    }
}
