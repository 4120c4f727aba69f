//! Core types for the accessible list.
//!
//! - [`Selection`] and [`ListData`]: the data an owner hands to the list
//! - [`ListDelegate`] and the `*Props` structs: the presentation slots
//! - [`Role`]: accessibility roles attached to each rendered part
//! - [`ListError`]: data the list refuses to render

use super::focus::FocusHandle;
use bubbletea_rs::Cmd;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Returns a section-unique name for an item.
pub type NameOf<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// Called when an item is committed by click, Right, or Enter.
///
/// Runs synchronously inside `update`; the returned command is passed back
/// to the bubbletea runtime.
pub type OnSelect<T> = Box<dyn Fn(&Selection<T>) -> Option<Cmd> + Send + Sync>;

/// A section name plus an item inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection<T> {
    /// Section the item belongs to.
    pub section: String,
    /// The item.
    pub item: T,
}

impl<T> Selection<T> {
    /// Creates a selection.
    pub fn new(section: impl Into<String>, item: T) -> Self {
        Self {
            section: section.into(),
            item,
        }
    }
}

/// Everything the list renders: ordered sections, their items, and the
/// owner's current selection.
///
/// ```rust
/// use chat_widgets::accessible_list::{ListData, Selection};
///
/// let data = ListData::new(Selection::new("A", "2"))
///     .with_section("A", vec!["1", "2"])
///     .with_section("B", vec!["2", "3", "4"]);
/// assert_eq!(data.sections, vec!["A", "B"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ListData<T> {
    /// Section names in display order.
    pub sections: Vec<String>,
    /// Items of each section in display order.
    pub items_by_section: HashMap<String, Vec<T>>,
    /// The owner's current selection.
    pub selected: Selection<T>,
}

impl<T> ListData<T> {
    /// Data with no sections.
    pub fn new(selected: Selection<T>) -> Self {
        Self {
            sections: Vec::new(),
            items_by_section: HashMap::new(),
            selected,
        }
    }

    /// Appends a section with its items.
    pub fn with_section(mut self, section: impl Into<String>, items: Vec<T>) -> Self {
        let section = section.into();
        self.sections.push(section.clone());
        self.items_by_section.insert(section, items);
        self
    }
}

/// Data the list cannot render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// A listed section has no items; wraparound traversal needs at least one.
    #[error("section `{0}` has no items")]
    EmptySection(String),
    /// A listed section has no entry in the item map.
    #[error("section `{0}` is listed but has no items entry")]
    MissingSection(String),
    /// A section name appears twice.
    #[error("section `{0}` is listed more than once")]
    DuplicateSection(String),
    /// Two items in one section share a name.
    #[error("item name `{name}` appears twice in section `{section}`")]
    DuplicateItemName {
        /// Section holding the clash.
        section: String,
        /// The repeated name.
        name: String,
    },
}

/// Accessibility role of a rendered part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The whole list.
    Listbox,
    /// Decorative; not announced on its own.
    Presentation,
    /// One section.
    Group,
    /// One selectable item.
    Option,
}

impl Role {
    /// ARIA role name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Listbox => "listbox",
            Role::Presentation => "presentation",
            Role::Group => "group",
            Role::Option => "option",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Props for the outer container.
#[derive(Debug, Clone, Copy)]
pub struct ContainerProps<'a> {
    /// Always [`Role::Listbox`].
    pub role: Role,
    /// The container is one tab stop.
    pub tab_reachable: bool,
    /// Id of the title element that names the list.
    pub labelled_by: &'a str,
    /// The container itself holds keyboard focus.
    pub focused: bool,
}

/// Props for the list title.
#[derive(Debug, Clone, Copy)]
pub struct TitleProps<'a> {
    /// Element id referenced by [`ContainerProps::labelled_by`].
    pub id: &'a str,
    /// Always [`Role::Presentation`].
    pub role: Role,
    /// Title text.
    pub text: &'a str,
}

/// Props for a section wrapper.
#[derive(Debug, Clone, Copy)]
pub struct SectionProps<'a> {
    /// Always [`Role::Group`].
    pub role: Role,
    /// Accessible label, the section name.
    pub label: &'a str,
    /// Section element id.
    pub id: &'a str,
}

/// Props for a section heading.
#[derive(Debug, Clone, Copy)]
pub struct SectionTitleProps<'a> {
    /// Section element id.
    pub id: &'a str,
    /// Section name.
    pub text: &'a str,
}

/// Props for one item.
#[derive(Debug)]
pub struct ItemProps<'a, T> {
    /// The item value.
    pub item: &'a T,
    /// Name from the naming projection.
    pub name: &'a str,
    /// `"{section id}-{item id}"`.
    pub id: &'a str,
    /// Always [`Role::Option`].
    pub role: Role,
    /// This is the owner's current selection.
    pub selected: bool,
    /// Reachable by Tab; true only for the selected item.
    pub tab_reachable: bool,
    /// Holds keyboard focus right now.
    pub focused: bool,
    /// Handle used to move focus to this item.
    pub handle: FocusHandle,
    /// Available width in cells, `0` when unbounded.
    pub width: usize,
}

/// Line counts a delegate produces, used to map pointer rows to items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    /// Lines before the title, e.g. a top border.
    pub top_inset: usize,
    /// Lines taken by the rendered title.
    pub title_height: usize,
    /// Lines taken by a section heading.
    pub section_title_height: usize,
    /// Lines taken by one item.
    pub item_height: usize,
    /// Blank lines inserted between sections.
    pub section_gap: usize,
}

impl Default for RowLayout {
    fn default() -> Self {
        Self {
            top_inset: 0,
            title_height: 1,
            section_title_height: 1,
            item_height: 1,
            section_gap: 0,
        }
    }
}

/// Presentation slots for the list.
///
/// The list decides structure, roles, focus and selection; a delegate only
/// turns props into styled text. `layout` must describe the line counts the
/// render methods actually produce.
pub trait ListDelegate<T> {
    /// Wraps the whole list.
    fn render_container(&self, props: &ContainerProps<'_>, children: &str) -> String;

    /// Renders the list title.
    fn render_title(&self, props: &TitleProps<'_>) -> String;

    /// Wraps one section (heading followed by its items).
    fn render_section(&self, _props: &SectionProps<'_>, children: &str) -> String {
        children.to_string()
    }

    /// Renders a section heading.
    fn render_section_title(&self, props: &SectionTitleProps<'_>) -> String;

    /// Renders one item.
    fn render_item(&self, props: &ItemProps<'_, T>) -> String;

    /// Line counts of the rendered parts.
    fn layout(&self) -> RowLayout {
        RowLayout::default()
    }
}

/// Whether a key was consumed by the list.
///
/// `Handled` corresponds to stopping propagation; parents should not act on
/// a key the list handled.
pub enum KeyOutcome {
    /// The key was not for the list.
    Ignored,
    /// The list acted on the key, possibly producing a command.
    Handled(Option<Cmd>),
}

impl KeyOutcome {
    /// Whether the list consumed the key.
    pub fn is_handled(&self) -> bool {
        matches!(self, KeyOutcome::Handled(_))
    }

    /// The produced command, if any.
    pub fn into_cmd(self) -> Option<Cmd> {
        match self {
            KeyOutcome::Handled(cmd) => cmd,
            KeyOutcome::Ignored => None,
        }
    }
}

impl fmt::Debug for KeyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyOutcome::Ignored => f.write_str("Ignored"),
            KeyOutcome::Handled(cmd) => f
                .debug_tuple("Handled")
                .field(&cmd.as_ref().map(|_| "Cmd"))
                .finish(),
        }
    }
}

/// Turns a display name into an element id fragment.
pub(crate) fn element_id(name: &str) -> String {
    name.replace(' ', "_")
}
