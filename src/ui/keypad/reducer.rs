use crate::mvi::Reducer;
use crate::ui::keypad::intent::KeypadIntent;
use crate::ui::keypad::keys::{COLS, ROWS};
use crate::ui::keypad::state::KeypadState;

pub struct KeypadReducer;

impl Reducer for KeypadReducer {
    type State = KeypadState;
    type Intent = KeypadIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let KeypadState { row, col } = state;
        match intent {
            KeypadIntent::MoveUp => KeypadState {
                row: if row == 0 { ROWS - 1 } else { row - 1 },
                col,
            },
            KeypadIntent::MoveDown => KeypadState {
                row: if row + 1 >= ROWS { 0 } else { row + 1 },
                col,
            },
            KeypadIntent::MoveLeft => KeypadState {
                row,
                col: if col == 0 { COLS - 1 } else { col - 1 },
            },
            KeypadIntent::MoveRight => KeypadState {
                row,
                col: if col + 1 >= COLS { 0 } else { col + 1 },
            },
            KeypadIntent::Focus { row, col } => {
                if row < ROWS && col < COLS {
                    KeypadState { row, col }
                } else {
                    state
                }
            }
        }
    }
}
