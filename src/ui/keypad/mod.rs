//! The keypad: a fixed grid of buttons and its selection state.

mod intent;
mod keys;
mod reducer;
mod state;

pub use intent::KeypadIntent;
pub use keys::{key_at, Key, COLS, KEYPAD, ROWS};
pub use reducer::KeypadReducer;
pub use state::KeypadState;
