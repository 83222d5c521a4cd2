//! UI module - line-based terminal front end

pub mod terminal;

pub use terminal::{play, MenuChoice, Terminal, TerminalOptions};
