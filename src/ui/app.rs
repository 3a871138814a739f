use ratatui::layout::Rect;

use crate::calc::{CalcReducer, CalcState, Token};
use crate::config::Config;
use crate::mvi::Reducer;
use crate::ui::keypad::{key_at, KeypadIntent, KeypadReducer, KeypadState};
use crate::ui::layout;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Accumulator state (MVI pattern).
    calc: CalcState,
    /// Keypad focus state (MVI pattern).
    keypad: KeypadState,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            size: None,
            calc: CalcState::new(config.display.precision),
            keypad: KeypadState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {}

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn calc(&self) -> &CalcState {
        &self.calc
    }

    pub fn keypad(&self) -> &KeypadState {
        &self.keypad
    }

    /// Feed one token into the accumulator. This is the only path by which
    /// the buffer changes, whatever input produced the token.
    pub fn press(&mut self, token: Token) {
        dispatch_mvi!(self, calc, CalcReducer, token);
    }

    /// Move or set the keypad focus.
    pub fn dispatch_keypad(&mut self, intent: KeypadIntent) {
        dispatch_mvi!(self, keypad, KeypadReducer, intent);
    }

    /// Activate the focused keypad button.
    pub fn press_focused(&mut self) {
        if let Some(key) = key_at(self.keypad.row, self.keypad.col) {
            self.press(key.token);
        }
    }

    /// Activate the button under a screen coordinate, if any.
    pub fn click_at(&mut self, x: u16, y: u16) {
        let Some((cols, rows)) = self.size else {
            return;
        };
        let area = Rect {
            x: 0,
            y: 0,
            width: cols,
            height: rows,
        };
        let (_, _, keypad, _) = layout::layout_regions(area);
        if let Some((row, col)) = layout::hit_test(keypad, x, y) {
            self.dispatch_keypad(KeypadIntent::Focus { row, col });
            self.press_focused();
        }
    }
}
