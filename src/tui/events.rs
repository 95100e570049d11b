use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    OpenChat,
    CloseChat,
    MoveUp,
    MoveDown,
    NextMode,
    PrevMode,
    SelectSubject,
    ChatInput(char),
    DeleteChar,
    SubmitMessage,
    CopyTranscript,
    None,
}

/// Poll for keyboard events and convert to actions.
///
/// Key bindings depend on whether the chat pane is open: while it is,
/// printable characters feed the input line instead of navigating the map.
pub fn poll_event(timeout: Duration, chat_open: bool) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
    {
        return Ok(key_to_action(key, chat_open));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent, chat_open: bool) -> Action {
    // Ctrl+C always quits, regardless of focus
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        return Action::Quit;
    }

    if chat_open {
        chat_key_to_action(key)
    } else {
        map_key_to_action(key)
    }
}

fn map_key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,

        // Subject navigation (Vim/Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::MoveUp,
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::Enter, _) => Action::SelectSubject,

        // Content tabs
        (KeyCode::Tab, _) | (KeyCode::Right, _) => Action::NextMode,
        (KeyCode::BackTab, _) | (KeyCode::Left, _) => Action::PrevMode,

        // The header's "Ask Assistant" button
        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::OpenChat,

        _ => Action::None,
    }
}

fn chat_key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::CloseChat,
        (KeyCode::Enter, _) => Action::SubmitMessage,
        (KeyCode::Backspace, _) => Action::DeleteChar,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyTranscript,

        // Chat input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::ChatInput(c)
        }

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_c_quits_in_both_modes() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_c, false), Action::Quit);
        assert_eq!(key_to_action(ctrl_c, true), Action::Quit);
    }

    #[test]
    fn test_esc_depends_on_focus() {
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(key_to_action(esc, false), Action::Quit);
        assert_eq!(key_to_action(esc, true), Action::CloseChat);
    }

    #[test]
    fn test_map_navigation() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(key_to_action(up, false), Action::MoveUp);

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(key_to_action(down, false), Action::MoveDown);

        let k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(key_to_action(k, false), Action::MoveUp);

        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_n, false), Action::MoveDown);
    }

    #[test]
    fn test_enter_depends_on_focus() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(key_to_action(enter, false), Action::SelectSubject);
        assert_eq!(key_to_action(enter, true), Action::SubmitMessage);
    }

    #[test]
    fn test_tab_cycles_modes() {
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(key_to_action(tab, false), Action::NextMode);

        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(key_to_action(back_tab, false), Action::PrevMode);
    }

    #[test]
    fn test_open_chat_key() {
        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_to_action(a, false), Action::OpenChat);
    }

    #[test]
    fn test_chars_type_into_open_chat() {
        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_to_action(a, true), Action::ChatInput('a'));

        let shift_a = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(key_to_action(shift_a, true), Action::ChatInput('A'));

        let backspace = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(key_to_action(backspace, true), Action::DeleteChar);
    }

    #[test]
    fn test_q_types_into_chat_but_quits_on_map() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(key_to_action(q, false), Action::Quit);
        assert_eq!(key_to_action(q, true), Action::ChatInput('q'));
    }

    #[test]
    fn test_copy_transcript_key() {
        let ctrl_y = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_y, true), Action::CopyTranscript);
    }

    #[test]
    fn test_unknown_key() {
        let unknown = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(key_to_action(unknown, false), Action::None);
        assert_eq!(key_to_action(unknown, true), Action::None);
    }
}
