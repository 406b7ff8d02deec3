//! Key bindings. Arrow keys and the a/d keys both move the selector.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::game::{Input, Mode};

/// Only presses count; release and repeat events are reported on some platforms.
pub fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

/// In-game bindings. Unbound keys map to `None` and are ignored.
pub fn game_input(key: &KeyEvent) -> Option<Input> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Input::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Input::MoveRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Input::Drop),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Input::Quit),
        _ => None,
    }
}

/// Answer to the mode menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Start(Mode),
    Exit,
}

pub fn menu_choice(key: &KeyEvent) -> Option<MenuChoice> {
    match key.code {
        KeyCode::Char('1') => Some(MenuChoice::Start(Mode::PlayerVsPlayer)),
        KeyCode::Char('2') => Some(MenuChoice::Start(Mode::PlayerVsBot)),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Yes/no answer to "play again?".
pub fn play_again(key: &KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_game_bindings() {
        assert_eq!(game_input(&key(KeyCode::Char('a'))), Some(Input::MoveLeft));
        assert_eq!(game_input(&key(KeyCode::Left)), Some(Input::MoveLeft));
        assert_eq!(game_input(&key(KeyCode::Char('D'))), Some(Input::MoveRight));
        assert_eq!(game_input(&key(KeyCode::Enter)), Some(Input::Drop));
        assert_eq!(game_input(&key(KeyCode::Char('q'))), Some(Input::Quit));
        assert_eq!(game_input(&key(KeyCode::Char('x'))), None);
        assert_eq!(game_input(&key(KeyCode::Tab)), None);
    }

    #[test]
    fn test_menu_bindings() {
        assert_eq!(
            menu_choice(&key(KeyCode::Char('1'))),
            Some(MenuChoice::Start(Mode::PlayerVsPlayer))
        );
        assert_eq!(
            menu_choice(&key(KeyCode::Char('2'))),
            Some(MenuChoice::Start(Mode::PlayerVsBot))
        );
        assert_eq!(menu_choice(&key(KeyCode::Char('3'))), None);
        assert_eq!(menu_choice(&key(KeyCode::Esc)), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_play_again_bindings() {
        assert_eq!(play_again(&key(KeyCode::Char('Y'))), Some(true));
        assert_eq!(play_again(&key(KeyCode::Char('n'))), Some(false));
        assert_eq!(play_again(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_only_presses_count() {
        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert!(!is_press(&release));
        assert!(is_press(&key(KeyCode::Enter)));
    }
}
