//! The expression accumulator.
//!
//! One buffer, one operation: every button press becomes a [`Token`] and
//! the [`CalcReducer`] folds it into the [`CalcState`]. The buffer is the
//! only state the calculator has; the display mirrors it verbatim.

mod reducer;
mod state;
mod token;

pub use reducer::{CalcReducer, ERROR_MARKER};
pub use state::{CalcState, Phase};
pub use token::{Operator, Token};
