//! Container chrome shared by the select's trigger and option list.

use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders};

/// A bordered block whose border style follows focus.
pub fn focus_block<'a>(title: Option<&'a str>, focused: bool, focused_style: Style, unfocused_style: Style) -> Block<'a> {
    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(if focused { BorderType::Thick } else { BorderType::Plain })
        .border_style(if focused { focused_style } else { unfocused_style });
    match title {
        Some(title) => block.title(title),
        None => block,
    }
}

/// The plain bordered block the option list is drawn in.
pub fn list_block<'a>(border_style: Style) -> Block<'a> {
    Block::new().borders(Borders::ALL).border_style(border_style)
}
