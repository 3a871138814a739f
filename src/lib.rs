//! tenkey — a ten-key calculator for the terminal.
//!
//! The application is a single event loop: a keypad of buttons feeds
//! discrete tokens into an expression accumulator, and the display mirrors
//! the accumulator's buffer after every press. Evaluation runs through a
//! dedicated lexer/parser pipeline in [`eval`]; no text is ever interpreted
//! as code.

pub mod calc;
pub mod config;
pub mod eval;
pub mod mvi;
pub mod ui;
