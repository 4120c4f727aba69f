//! Keyboard-navigable list of items grouped into titled sections.
//!
//! The list is *controlled*: the owner passes the sections, the items of each
//! section and the current selection, and is told through `on_select` when
//! the user commits an item. The list itself only tracks keyboard focus.
//!
//! ## Keys
//!
//! | Key | Effect while an item has focus |
//! |---|---|
//! | `↑` / `↓` | move focus, wrapping across section and list boundaries |
//! | `→` / `enter` | commit the focused item |
//! | `tab` | leave the list |
//! | `shift+tab` | back to the container |
//!
//! Tab stops are the container and the selected item, in that order. Every
//! other item is reached with the arrow keys. A left click on an item row
//! commits that item directly.
//!
//! ## Wraparound
//!
//! `↓` on the last item of a section focuses the first item of the next
//! section; on the last item of the last section it focuses the first item
//! of the first section. `↑` mirrors this. Empty sections are rejected with
//! [`ListError::EmptySection`] so the traversal always has somewhere to go.
//!
//! ## Presentation
//!
//! Rendering goes through a [`ListDelegate`]. The list builds the structure
//! and hands each part its role, id, label and focus flags; the delegate
//! turns those props into styled text. [`DefaultDelegate`] draws a bordered
//! box with [`ListStyles`]. The same structure is exposed to assistive
//! tooling as an [`AccessNode`] tree via [`Model::accessibility_tree`].
//!
//! ```rust
//! use chat_widgets::accessible_list::{ListData, Model, Selection};
//! use chat_widgets::Component;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let data = ListData::new(Selection::new("A", 2))
//!     .with_section("A", vec![1, 2])
//!     .with_section("B", vec![3]);
//! let mut list = Model::with_display_names("Numbers", data).unwrap();
//!
//! list.focus();
//! list.focus_next_stop();
//! let down = KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::NONE };
//! assert!(list.handle_key(&down).is_handled());
//! assert_eq!(list.focused_item().map(|s| s.item), Some(3));
//! ```

mod defaultdelegate;
mod focus;
pub mod keys;
mod model;
mod navigation;
mod rendering;
pub mod style;
mod types;


pub use defaultdelegate::DefaultDelegate;
pub use focus::{FocusHandle, FocusTarget};
pub use keys::AccessibleListKeyMap;
pub use model::Model;
pub use rendering::AccessNode;
pub use style::ListStyles;
pub use types::{
    ContainerProps, ItemProps, KeyOutcome, ListData, ListDelegate, ListError, NameOf, OnSelect,
    Role, RowLayout, SectionProps, SectionTitleProps, Selection, TitleProps,
};

use crate::key::{self, KeyMap as _};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, MouseMsg, Msg};
use crossterm::event::MouseEvent;
use std::fmt::Display;

impl<T: Clone + PartialEq + Send + 'static> Component for Model<T> {
    /// Focuses the container, the list's first tab stop.
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = FocusTarget::Container;
        None
    }

    fn blur(&mut self) {
        self.focus = FocusTarget::Outside;
    }

    fn focused(&self) -> bool {
        self.focus != FocusTarget::Outside
    }
}

impl<T: Clone + PartialEq + Send + 'static> Model<T> {
    /// Handles a bubbletea message: key presses and mouse clicks.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg).into_cmd();
        }
        if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            return self.handle_mouse(&MouseEvent {
                kind: mouse.button,
                column: mouse.x,
                row: mouse.y,
                modifiers: mouse.modifiers,
            });
        }
        if let Some(mouse) = msg.downcast_ref::<MouseEvent>() {
            return self.handle_mouse(mouse);
        }
        None
    }
}

impl<T> BubbleTeaModel for Model<T>
where
    T: Clone + PartialEq + Display + Default + Send + Sync + 'static,
{
    fn init() -> (Self, Option<Cmd>) {
        (Model::empty("List"), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}

impl<T: Clone + PartialEq + Send + 'static> key::KeyMap for Model<T> {
    fn short_help(&self) -> Vec<&key::Binding> {
        self.keymap.short_help()
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        self.keymap.full_help()
    }
}
