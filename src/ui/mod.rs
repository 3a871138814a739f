pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod keypad;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
