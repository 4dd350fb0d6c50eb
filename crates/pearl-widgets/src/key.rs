//! Key bindings for the select and a key map trait for help lines.

use crate::reducer::NavKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single key press with optional modifier keys (Ctrl, Alt, Shift).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombination {
    /// A key with no modifiers.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A key with the Ctrl modifier.
    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    fn matches(&self, event: &KeyEvent) -> bool {
        self.code == event.code && event.modifiers.contains(self.modifiers)
    }
}

/// One or more key combinations bound to a described action.
#[derive(Debug, Clone)]
pub struct Binding {
    pub keys: Vec<KeyCombination>,
    /// Short key legend for help lines, e.g. `"↑/↓"`.
    pub help_key: String,
    pub description: String,
    /// Disabled bindings never match.
    pub enabled: bool,
}

impl Binding {
    pub fn new(
        keys: Vec<KeyCombination>,
        help_key: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            keys,
            help_key: help_key.into(),
            description: description.into(),
            enabled: true,
        }
    }

    /// Whether `event` triggers this binding.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.enabled && self.keys.iter().any(|k| k.matches(event))
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Types that can describe their bindings for a help line.
pub trait KeyMap {
    fn short_help(&self) -> Vec<&Binding>;

    /// `"key desc · key desc"` built from [`short_help`](KeyMap::short_help).
    fn help_line(&self) -> String {
        self.short_help()
            .iter()
            .filter(|b| b.enabled)
            .map(|b| format!("{} {}", b.help_key, b.description))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

/// Keys the select reacts to while focused.
#[derive(Debug, Clone)]
pub struct SelectKeyMap {
    /// Open, or close committing the highlighted option.
    pub toggle: Binding,
    pub next: Binding,
    pub prev: Binding,
    /// Close without committing.
    pub dismiss: Binding,
}

impl Default for SelectKeyMap {
    fn default() -> Self {
        Self {
            toggle: Binding::new(
                vec![
                    KeyCombination::new(KeyCode::Enter),
                    KeyCombination::new(KeyCode::Char(' ')),
                ],
                "enter/space",
                "open/choose",
            ),
            next: Binding::new(vec![KeyCombination::new(KeyCode::Down)], "↓", "next"),
            prev: Binding::new(vec![KeyCombination::new(KeyCode::Up)], "↑", "prev"),
            dismiss: Binding::new(vec![KeyCombination::new(KeyCode::Esc)], "esc", "close"),
        }
    }
}

impl SelectKeyMap {
    /// Translate a key event into a navigation key, if bound.
    pub fn action(&self, event: &KeyEvent) -> Option<NavKey> {
        [
            (&self.toggle, NavKey::Toggle),
            (&self.next, NavKey::Next),
            (&self.prev, NavKey::Prev),
            (&self.dismiss, NavKey::Dismiss),
        ]
        .into_iter()
        .find(|(binding, _)| binding.matches(event))
        .map(|(_, nav)| nav)
    }
}

impl KeyMap for SelectKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.toggle, &self.prev, &self.next, &self.dismiss]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn default_actions() {
        let keys = SelectKeyMap::default();
        assert_eq!(keys.action(&key(KeyCode::Enter)), Some(NavKey::Toggle));
        assert_eq!(keys.action(&key(KeyCode::Char(' '))), Some(NavKey::Toggle));
        assert_eq!(keys.action(&key(KeyCode::Down)), Some(NavKey::Next));
        assert_eq!(keys.action(&key(KeyCode::Up)), Some(NavKey::Prev));
        assert_eq!(keys.action(&key(KeyCode::Esc)), Some(NavKey::Dismiss));
        assert_eq!(keys.action(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn rebinding_and_disabling() {
        let keys = SelectKeyMap {
            next: Binding::new(vec![KeyCombination::ctrl(KeyCode::Char('n'))], "^n", "next"),
            dismiss: SelectKeyMap::default().dismiss.enabled(false),
            ..SelectKeyMap::default()
        };
        let ctrl_n = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('n'))
        };
        assert_eq!(keys.action(&ctrl_n), Some(NavKey::Next));
        assert_eq!(keys.action(&key(KeyCode::Down)), None);
        assert_eq!(keys.action(&key(KeyCode::Esc)), None);
    }

    #[test]
    fn help_line_skips_disabled() {
        let keys = SelectKeyMap {
            dismiss: SelectKeyMap::default().dismiss.enabled(false),
            ..SelectKeyMap::default()
        };
        assert_eq!(keys.help_line(), "enter/space open/choose · ↑ prev · ↓ next");
    }
}
