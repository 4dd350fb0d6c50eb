use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};

/// Terminal events produced by the runtime's event loop.
///
/// Delivered to the application through the
/// [`terminal_events`](crate::subscriptions::terminal_events) subscription,
/// which maps each event into the model's `Message` type.
///
/// # Example
///
/// ```rust,ignore
/// use pearl_core::{terminal_events, TerminalEvent};
///
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|ev| match ev {
///         TerminalEvent::Key(k) => Some(Msg::Key(k)),
///         TerminalEvent::Mouse(m) => Some(Msg::Mouse(m)),
///         TerminalEvent::FocusLost => Some(Msg::Blur),
///         _ => None,
///     })]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
    /// Bracketed paste content.
    Paste(String),
}

impl TerminalEvent {
    /// The key event, if this is a key *press*.
    ///
    /// Some platforms report release and repeat events as well; widgets that
    /// toggle state must only see presses or they fire twice per keystroke.
    pub fn key_press(&self) -> Option<KeyEvent> {
        match self {
            TerminalEvent::Key(k) if k.kind == KeyEventKind::Press => Some(*k),
            _ => None,
        }
    }
}

impl From<crossterm::event::Event> for TerminalEvent {
    fn from(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(k) => TerminalEvent::Key(k),
            crossterm::event::Event::Mouse(m) => TerminalEvent::Mouse(m),
            crossterm::event::Event::Resize(w, h) => TerminalEvent::Resize(w, h),
            crossterm::event::Event::FocusGained => TerminalEvent::FocusGained,
            crossterm::event::Event::FocusLost => TerminalEvent::FocusLost,
            crossterm::event::Event::Paste(s) => TerminalEvent::Paste(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn key_press_passes_presses() {
        let ev = TerminalEvent::Key(key(KeyCode::Enter, KeyEventKind::Press));
        assert_eq!(ev.key_press().map(|k| k.code), Some(KeyCode::Enter));
    }

    #[test]
    fn key_press_drops_releases() {
        let ev = TerminalEvent::Key(key(KeyCode::Enter, KeyEventKind::Release));
        assert!(ev.key_press().is_none());
        assert!(TerminalEvent::FocusLost.key_press().is_none());
    }

    #[test]
    fn converts_from_crossterm() {
        let ev: TerminalEvent = crossterm::event::Event::Resize(80, 24).into();
        assert_eq!(ev, TerminalEvent::Resize(80, 24));
        let ev: TerminalEvent = crossterm::event::Event::FocusLost.into();
        assert_eq!(ev, TerminalEvent::FocusLost);
    }
}
