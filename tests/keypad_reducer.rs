use tenkey::mvi::Reducer;
use tenkey::ui::keypad::{key_at, KeypadIntent, KeypadReducer, KeypadState, COLS, ROWS};

#[test]
fn default_focus_is_top_left() {
    let state = KeypadState::default();
    assert_eq!((state.row, state.col), (0, 0));
}

#[test]
fn move_down_then_up_returns_home() {
    let state = KeypadReducer::reduce(KeypadState::default(), KeypadIntent::MoveDown);
    assert_eq!(state.row, 1);
    let state = KeypadReducer::reduce(state, KeypadIntent::MoveUp);
    assert_eq!(state.row, 0);
}

#[test]
fn vertical_movement_wraps() {
    let state = KeypadReducer::reduce(KeypadState::default(), KeypadIntent::MoveUp);
    assert_eq!(state.row, ROWS - 1);
    let state = KeypadReducer::reduce(state, KeypadIntent::MoveDown);
    assert_eq!(state.row, 0);
}

#[test]
fn horizontal_movement_wraps() {
    let state = KeypadReducer::reduce(KeypadState::default(), KeypadIntent::MoveLeft);
    assert_eq!(state.col, COLS - 1);
    let state = KeypadReducer::reduce(state, KeypadIntent::MoveRight);
    assert_eq!(state.col, 0);
}

#[test]
fn focus_intent_jumps_to_cell() {
    let state = KeypadReducer::reduce(
        KeypadState::default(),
        KeypadIntent::Focus { row: 2, col: 3 },
    );
    assert_eq!((state.row, state.col), (2, 3));
}

#[test]
fn focus_out_of_range_is_ignored() {
    let state = KeypadReducer::reduce(
        KeypadState { row: 1, col: 1 },
        KeypadIntent::Focus { row: ROWS, col: 0 },
    );
    assert_eq!((state.row, state.col), (1, 1));
}

#[test]
fn every_focusable_cell_has_a_key() {
    for row in 0..ROWS {
        for col in 0..COLS {
            assert!(key_at(row, col).is_some(), "missing key at {row},{col}");
        }
    }
}
