use crate::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadIntent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Move focus directly to a cell (mouse hover/click).
    Focus { row: usize, col: usize },
}

impl Intent for KeypadIntent {}
