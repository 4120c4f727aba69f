//! Chord → callback table with duplicate detection.

use super::chord::{Chord, Key};
use crate::key;
use bubbletea_rs::Cmd;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Callback fired when a registered chord is released.
///
/// The returned command, if any, is handed back to the bubbletea runtime.
pub type ShortcutCallback = Box<dyn FnMut() -> Option<Cmd> + Send>;

/// Errors raised while registering shortcuts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortcutError {
    /// The chord already has a callback in this scope.
    #[error("the keyboard shortcut {chord} is already registered")]
    Duplicate {
        /// Canonical chord that collided.
        chord: Chord,
    },
    /// No keys were given.
    #[error("a keyboard shortcut needs at least one key")]
    EmptyChord,
}

/// A chord, its callback, and help text.
pub struct Shortcut {
    chord: Chord,
    callback: ShortcutCallback,
    binding: key::Binding,
}

impl Shortcut {
    /// Creates a shortcut for `keys`.
    pub fn new<F>(keys: impl IntoIterator<Item = Key>, callback: F) -> Self
    where
        F: FnMut() -> Option<Cmd> + Send + 'static,
    {
        let chord = Chord::new(keys);
        let binding = key::Binding::new(Vec::<key::KeyPress>::new()).with_help(chord.to_string(), "");
        Self {
            chord,
            callback: Box::new(callback),
            binding,
        }
    }

    /// Sets the description shown in help.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.binding = self.binding.with_help(self.chord.to_string(), description);
        self
    }

    /// The canonical chord.
    pub fn chord(&self) -> &Chord {
        &self.chord
    }

    /// Help entry for this shortcut.
    pub fn binding(&self) -> &key::Binding {
        &self.binding
    }
}

impl fmt::Debug for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shortcut")
            .field("chord", &self.chord)
            .field("help", self.binding.help())
            .finish_non_exhaustive()
    }
}

/// Holds at most one callback per canonical chord.
///
/// Registration order does not matter for conflict detection: whichever
/// consumer registers a chord second gets [`ShortcutError::Duplicate`] and
/// the first registration stays in place.
///
/// ```rust
/// use chat_widgets::shortcut::{Key, ShortcutError, ShortcutRegistry};
///
/// let mut registry = ShortcutRegistry::new();
/// registry.register([Key::CtrlCmd, Key::Char('C')], || None).unwrap();
///
/// let err = registry.register([Key::Char('c'), Key::CtrlCmd], || None).unwrap_err();
/// assert!(matches!(err, ShortcutError::Duplicate { .. }));
/// ```
#[derive(Debug, Default)]
pub struct ShortcutRegistry {
    shortcuts: BTreeMap<Chord, Shortcut>,
}

impl ShortcutRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for the chord formed by `keys`.
    pub fn register<F>(
        &mut self,
        keys: impl IntoIterator<Item = Key>,
        callback: F,
    ) -> Result<(), ShortcutError>
    where
        F: FnMut() -> Option<Cmd> + Send + 'static,
    {
        self.register_shortcut(Shortcut::new(keys, callback))
    }

    /// Registers a fully built shortcut.
    pub fn register_shortcut(&mut self, shortcut: Shortcut) -> Result<(), ShortcutError> {
        if shortcut.chord.is_empty() {
            return Err(ShortcutError::EmptyChord);
        }
        if self.shortcuts.contains_key(&shortcut.chord) {
            return Err(ShortcutError::Duplicate {
                chord: shortcut.chord,
            });
        }
        log::debug!("registered shortcut {}", shortcut.chord);
        self.shortcuts.insert(shortcut.chord.clone(), shortcut);
        Ok(())
    }

    /// Whether `chord` has a callback.
    pub fn contains(&self, chord: &Chord) -> bool {
        self.shortcuts.contains_key(chord)
    }

    /// Registered chords in canonical order.
    pub fn chords(&self) -> impl Iterator<Item = &Chord> {
        self.shortcuts.keys()
    }

    /// Number of registered shortcuts.
    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }

    /// Runs the callback for `chord`.
    ///
    /// Returns `None` both when nothing is registered and when the callback
    /// produced no command; unmatched chords are not an error.
    pub fn dispatch(&mut self, chord: &Chord) -> Option<Cmd> {
        match self.shortcuts.get_mut(chord) {
            Some(shortcut) => {
                log::debug!("shortcut {} fired", chord);
                (shortcut.callback)()
            }
            None => {
                log::trace!("no shortcut for {}", chord);
                None
            }
        }
    }
}

impl key::KeyMap for ShortcutRegistry {
    fn short_help(&self) -> Vec<&key::Binding> {
        self.shortcuts.values().map(Shortcut::binding).collect()
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![self.shortcuts.values().map(Shortcut::binding).collect()]
    }
}
