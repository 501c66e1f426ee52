//! Terminal front-end.
//!
//! Implements the view, timer and sound collaborators with crossterm and reads the keyboard.

pub mod screen;
pub mod input;
pub mod guard;

pub use guard::TerminalGuard;
pub use input::spawn_input_thread;
pub use screen::{Screen, TerminalBell, TerminalView};
