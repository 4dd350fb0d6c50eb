//! Built-in subscription sources.
//!
//! - **Terminal events** ([`terminal_events`], [`TerminalEvents`]) -- keyboard,
//!   mouse, resize, focus, and paste events from the terminal.

mod terminal;

pub use terminal::*;
