//! Global keyboard chords.
//!
//! A [`ShortcutProvider`] owns a [`ShortcutRegistry`] for one UI subtree and
//! watches key events. Keys pressed down accumulate in a [`KeySet`]; the first
//! key released turns the held keys into a canonical [`Chord`] and, if a
//! callback is registered for it, runs that callback exactly once. The set is
//! emptied after every release whether or not anything matched.
//!
//! ## Keys
//!
//! | Physical key | Token |
//! |---|---|
//! | any printable character | the character, uppercased |
//! | Control, Super, Meta, Command | `CtrlCmd` |
//! | Shift | `Shift` |
//! | Alt / Option | `Alt` |
//!
//! Chords are sets: `["CtrlCmd", "C"]` and `["C", "CtrlCmd"]` are the same
//! chord, identified canonically as `C+CtrlCmd`.
//!
//! ## Conflicts
//!
//! Each chord may have at most one callback per provider. Registering a chord
//! a second time fails immediately with [`ShortcutError::Duplicate`], before
//! any key is pressed.
//!
//! ## Consumers
//!
//! ```rust
//! use chat_widgets::shortcut::{Key, ShortcutConsumer, ShortcutError, ShortcutProvider, ShortcutRegistry};
//!
//! struct Composer;
//!
//! impl ShortcutConsumer for Composer {
//!     fn register_shortcuts(&self, registry: &mut ShortcutRegistry) -> Result<(), ShortcutError> {
//!         registry.register([Key::CtrlCmd, Key::Char('E')], || None)
//!     }
//! }
//!
//! let mut provider = ShortcutProvider::new();
//! provider.mount(&Composer).unwrap();
//! assert!(provider.mount(&Composer).is_err());
//! ```

mod chord;
mod provider;
mod registry;

pub use chord::{Chord, ChordParseError, Key, KeySet};
pub use provider::{ProviderConfig, ShortcutConsumer, ShortcutProvider};
pub use registry::{Shortcut, ShortcutCallback, ShortcutError, ShortcutRegistry};

#[cfg(test)]
mod tests;
