#![warn(missing_docs)]

//! # bubbletea-chat-widgets
//!
//! Sidebar lists and global keyboard shortcuts for chat-style terminal
//! applications built with [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! Chat clients show two kinds of sidebar: a rail of servers and, for the
//! current server, a list of channels grouped under headings. Both need to be
//! usable from the keyboard alone and describable to a screen reader. This
//! crate provides that list once, generically, plus the two sidebars built on
//! top of it and a small registry of application-wide key chords.
//!
//! Every component follows the Elm Architecture used by bubbletea-rs:
//! `update()` takes a message and may return a command, `view()` renders a
//! string.
//!
//! ## Components
//!
//! - [`accessible_list`]: a controlled, sectioned list with wraparound arrow
//!   navigation, explicit commits, tab stops and an accessibility tree
//! - [`sidebar`]: `ChannelsList` and `ServersList`
//! - [`shortcut`]: chord registration with duplicate detection, and a
//!   provider that turns key events into callbacks
//! - [`help`] and [`key`]: key bindings and the help line that lists them
//!
//! ## Focus Management
//!
//! Lists implement [`Component`], so a parent can move focus between them:
//!
//! ```rust
//! use chat_widgets::prelude::*;
//! use bubbletea_rs::Cmd;
//!
//! fn cycle<T: Component>(component: &mut T) {
//!     let _cmd: Option<Cmd> = component.focus();
//!     assert!(component.focused());
//!     component.blur();
//!     assert!(!component.focused());
//! }
//!
//! let data = ListData::new(Selection::new("A", 1)).with_section("A", vec![1, 2]);
//! let mut list = AccessibleList::with_display_names("Numbers", data).unwrap();
//! cycle(&mut list);
//! ```
//!
//! ## Shortcuts
//!
//! ```rust
//! use chat_widgets::shortcut::{Chord, ShortcutProvider};
//!
//! let mut provider = ShortcutProvider::new();
//! let chord: Chord = "ctrl+k".parse().unwrap();
//! provider.register(chord.keys().copied(), || None).unwrap();
//! assert!(provider.register(chord.keys().copied(), || None).is_err());
//! ```

pub mod accessible_list;
pub mod help;
pub mod key;
pub mod shortcut;
pub mod sidebar;

use bubbletea_rs::Cmd;

/// Components that can hold keyboard focus.
///
/// A parent that owns several components calls `focus()` on the one that
/// should receive keys and `blur()` on the rest.
///
/// ```rust
/// use chat_widgets::prelude::*;
///
/// let mut channels = ChannelsList::new(
///     "Server",
///     vec![],
///     Default::default(),
///     SidebarSelection::default(),
/// )
/// .unwrap();
/// assert!(!channels.focused());
/// channels.focus();
/// assert!(channels.focused());
/// ```
pub trait Component {
    /// Gives the component keyboard focus.
    ///
    /// May return a command to run, e.g. to start a blink timer.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes keyboard focus.
    fn blur(&mut self);

    /// Whether the component holds keyboard focus.
    fn focused(&self) -> bool;
}

pub use accessible_list::Model as AccessibleList;
pub use accessible_list::{
    AccessNode, AccessibleListKeyMap, DefaultDelegate as ListDefaultDelegate, FocusHandle,
    FocusTarget, KeyOutcome, ListData, ListDelegate, ListError, ListStyles, Role, Selection,
};
pub use help::Model as HelpModel;
pub use key::{matches, Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use shortcut::{
    Chord, ChordParseError, Key, KeySet, ProviderConfig, Shortcut, ShortcutConsumer,
    ShortcutError, ShortcutProvider, ShortcutRegistry,
};
pub use sidebar::{ChannelsList, ServersList, SidebarSelection};

/// Prelude module for convenient imports.
///
/// ```rust
/// use chat_widgets::prelude::*;
/// ```
pub mod prelude {
    pub use crate::accessible_list::Model as AccessibleList;
    pub use crate::accessible_list::{
        AccessibleListKeyMap, DefaultDelegate as ListDefaultDelegate, KeyOutcome, ListData,
        ListDelegate, ListError, ListStyles, Selection,
    };
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
    pub use crate::shortcut::{
        Chord, Key, ProviderConfig, Shortcut, ShortcutConsumer, ShortcutError, ShortcutProvider,
        ShortcutRegistry,
    };
    pub use crate::sidebar::{ChannelsList, ServersList, SidebarSelection};
    pub use crate::Component;
}
