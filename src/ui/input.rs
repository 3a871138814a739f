use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::calc::{Operator, Token};
use crate::ui::app::App;
use crate::ui::keypad::KeypadIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || matches!(key.code, KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Up => app.dispatch_keypad(KeypadIntent::MoveUp),
        KeyCode::Down => app.dispatch_keypad(KeypadIntent::MoveDown),
        KeyCode::Left => app.dispatch_keypad(KeypadIntent::MoveLeft),
        KeyCode::Right => app.dispatch_keypad(KeypadIntent::MoveRight),
        KeyCode::Char(' ') => app.press_focused(),
        _ => {
            if let Some(token) = key_to_token(key) {
                app.press(token);
            }
        }
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.click_at(mouse.column, mouse.row);
    }
}

/// Map a key press to the token its keypad twin would emit.
fn key_to_token(key: KeyEvent) -> Option<Token> {
    match key.code {
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            Some(Token::Digit(ch as u8 - b'0'))
        }
        KeyCode::Char('.') => Some(Token::Point),
        KeyCode::Char('+') => Some(Token::Op(Operator::Add)),
        KeyCode::Char('-') => Some(Token::Op(Operator::Subtract)),
        KeyCode::Char('*') => Some(Token::Op(Operator::Multiply)),
        KeyCode::Char('/') => Some(Token::Op(Operator::Divide)),
        KeyCode::Char('(') => Some(Token::OpenParen),
        KeyCode::Char(')') => Some(Token::CloseParen),
        KeyCode::Char('=') | KeyCode::Enter => Some(Token::Evaluate),
        KeyCode::Backspace => Some(Token::DeleteLast),
        KeyCode::Char('c') | KeyCode::Esc => Some(Token::Clear),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn digits_and_operators_append() {
        let mut app = App::new(&Config::default());
        for code in ['3', '+', '4'] {
            handle_key(&mut app, press(KeyCode::Char(code)));
        }
        assert_eq!(app.calc().buffer, "3+4");
    }

    #[test]
    fn enter_evaluates() {
        let mut app = App::new(&Config::default());
        for code in ['3', '+', '4'] {
            handle_key(&mut app, press(KeyCode::Char(code)));
        }
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.calc().buffer, "7");
    }

    #[test]
    fn backspace_deletes_last() {
        let mut app = App::new(&Config::default());
        handle_key(&mut app, press(KeyCode::Char('8')));
        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.calc().buffer, "");
    }

    #[test]
    fn escape_clears() {
        let mut app = App::new(&Config::default());
        handle_key(&mut app, press(KeyCode::Char('9')));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.calc().buffer, "");
    }

    #[test]
    fn q_quits() {
        let mut app = App::new(&Config::default());
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new(&Config::default());
        let key = KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        handle_key(&mut app, key);
        assert_eq!(app.calc().buffer, "");
    }
}
