//! Key bindings shared by the components in this crate.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es under a single action and
//! carries the short help text shown by the [`help`](crate::help) component.
//! Components expose their bindings through the [`KeyMap`] trait.
//!
//! ```rust
//! use chat_widgets::key::{Binding, KeyPress};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let up = Binding::new(vec![KeyCode::Up]).with_help("↑", "previous item");
//! let save = Binding::new(vec![KeyPress::new(KeyCode::Char('s'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+s", "save");
//!
//! assert_eq!(up.help().key, "↑");
//! assert!(save.enabled());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single key together with the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers required alongside the key.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Creates a key press from a code and modifier set.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Returns `true` when the given code and modifiers trigger this key press.
    ///
    /// Shift is ignored for character keys and back-tab since terminals
    /// already fold it into the reported key.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.code != code {
            return false;
        }
        match code {
            KeyCode::Char(_) | KeyCode::BackTab => {
                (self.modifiers - KeyModifiers::SHIFT) == (modifiers - KeyModifiers::SHIFT)
            }
            _ => self.modifiers == modifiers,
        }
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self::new(code, modifiers)
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Human readable key label, e.g. `"↑/k"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding triggered by any of `keys`.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help key label and description.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Marks the binding as disabled; disabled bindings never match and are
    /// hidden from help.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Key presses that trigger this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding is active.
    pub fn enabled(&self) -> bool {
        !self.disabled
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns `true` if the bubbletea key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.matches_code(msg.key, msg.modifiers)
    }

    /// Returns `true` if the raw crossterm event triggers this binding.
    pub fn matches_event(&self, event: &KeyEvent) -> bool {
        self.matches_code(event.code, event.modifiers)
    }

    fn matches_code(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(code, modifiers))
    }
}

/// Returns `true` if any of `bindings` matches the key message.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Exposes a component's bindings for help rendering.
pub trait KeyMap {
    /// Bindings shown in the single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped into columns for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(key: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg { key, modifiers }
    }

    #[test]
    fn test_binding_matches_any_key() {
        let b = Binding::new(vec![KeyCode::Right, KeyCode::Enter]);
        assert!(b.matches(&msg(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(b.matches(&msg(KeyCode::Right, KeyModifiers::NONE)));
        assert!(!b.matches(&msg(KeyCode::Left, KeyModifiers::NONE)));
    }

    #[test]
    fn test_modifiers_must_match_for_named_keys() {
        let b = Binding::new(vec![KeyCode::Up]);
        assert!(!b.matches(&msg(KeyCode::Up, KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_shift_ignored_for_chars() {
        let b = Binding::new(vec![KeyCode::Char('G')]);
        assert!(b.matches(&msg(KeyCode::Char('G'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]).with_disabled(true);
        assert!(!b.matches(&msg(KeyCode::Enter, KeyModifiers::NONE)));
        b.set_enabled(true);
        assert!(b.matches(&msg(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_matches_helper() {
        let a = Binding::new(vec![KeyCode::Tab]);
        let b = Binding::new(vec![KeyCode::BackTab]);
        assert!(matches(&msg(KeyCode::BackTab, KeyModifiers::SHIFT), &[&a, &b]));
        assert!(!matches(&msg(KeyCode::Esc, KeyModifiers::NONE), &[&a, &b]));
    }
}
