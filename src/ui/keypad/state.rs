use crate::mvi::UiState;

/// Which keypad button currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeypadState {
    pub row: usize,
    pub col: usize,
}

impl UiState for KeypadState {}
