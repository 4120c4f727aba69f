//! The list model: data, presentation slots, and focus state.

use super::defaultdelegate::DefaultDelegate;
use super::focus::{FocusHandle, FocusTable, FocusTarget};
use super::keys::AccessibleListKeyMap;
use super::types::{ListData, ListDelegate, ListError, NameOf, OnSelect, Selection};
use bubbletea_rs::Cmd;
use std::collections::HashMap;
use std::fmt::Display;

/// A keyboard-navigable, screen-reader friendly list of items grouped into
/// sections.
///
/// The list never changes the selection on its own. It renders the
/// selection it was given, moves keyboard *focus* with Up/Down, and reports
/// a *commit* (Right, Enter, or a click) through the `on_select` callback.
/// The owner stores the new selection and passes it back with
/// [`set_selected`](Model::set_selected).
///
/// ```rust
/// use chat_widgets::accessible_list::{ListData, Model, Selection};
/// use chat_widgets::Component;
///
/// let data = ListData::new(Selection::new("A", "2".to_string()))
///     .with_section("A", vec!["1".to_string(), "2".to_string()])
///     .with_section("B", vec!["3".to_string()]);
/// let mut list = Model::with_display_names("Channels", data).unwrap();
///
/// list.focus();
/// list.focus_next_stop(); // container -> selected item
/// assert_eq!(list.focused_item().as_ref().map(|s| s.item.as_str()), Some("2"));
/// ```
pub struct Model<T> {
    pub(super) title: String,
    pub(super) sections: Vec<String>,
    pub(super) items_by_section: HashMap<String, Vec<T>>,
    pub(super) selected: Selection<T>,
    pub(super) name_of: NameOf<T>,
    pub(super) on_select: Option<OnSelect<T>>,
    pub(super) delegate: Box<dyn ListDelegate<T> + Send + Sync>,
    pub(super) keymap: AccessibleListKeyMap,
    pub(super) focus_table: FocusTable,
    pub(super) focus: FocusTarget,
    /// Screen row of the list's first line, for pointer hit-testing.
    pub(super) top: u16,
    /// Screen column of the list's left edge.
    pub(super) left: u16,
    pub(super) width: usize,
}

impl<T: Clone + PartialEq + Send + 'static> Model<T> {
    /// Creates a list from its data, a naming projection and a delegate.
    ///
    /// The focus table is built right away, so malformed data is rejected
    /// here rather than on the first render.
    ///
    /// # Arguments
    ///
    /// * `title` - Accessible name of the list, also drawn as its heading
    /// * `data` - Section order, items per section and the owner's selection
    /// * `name_of` - Item name used for display, ids and focus lookup; must
    ///   be unique within a section
    /// * `delegate` - Presentation slots; see [`ListDelegate`]
    ///
    /// # Errors
    ///
    /// Returns a [`ListError`] if a section is empty, missing from the item
    /// map or listed twice, or if two items of one section share a name.
    ///
    /// # Examples
    ///
    /// ```
    /// use chat_widgets::accessible_list::{DefaultDelegate, ListData, ListError, Model, Selection};
    ///
    /// let data = ListData::new(Selection::new("Lobby", 1u32))
    ///     .with_section("Lobby", vec![1, 2]);
    /// let list = Model::new("Rooms", data, |n: &u32| format!("room-{n}"), DefaultDelegate::new())
    ///     .unwrap();
    /// assert_eq!(list.sections(), ["Lobby"]);
    ///
    /// let empty = ListData::new(Selection::new("Lobby", 1u32)).with_section("Lobby", vec![]);
    /// let err = Model::new("Rooms", empty, |n: &u32| n.to_string(), DefaultDelegate::new());
    /// assert!(matches!(err, Err(ListError::EmptySection(_))));
    /// ```
    pub fn new<F, D>(
        title: impl Into<String>,
        data: ListData<T>,
        name_of: F,
        delegate: D,
    ) -> Result<Self, ListError>
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
        D: ListDelegate<T> + Send + Sync + 'static,
    {
        let delegate: Box<dyn ListDelegate<T> + Send + Sync> = Box::new(delegate);
        let focus_table = FocusTable::build(
            &data.sections,
            &data.items_by_section,
            &name_of,
            delegate.layout(),
        )?;
        let list = Self {
            title: title.into(),
            sections: data.sections,
            items_by_section: data.items_by_section,
            selected: data.selected,
            name_of: Box::new(name_of),
            on_select: None,
            delegate,
            keymap: AccessibleListKeyMap::default(),
            focus_table,
            focus: FocusTarget::Outside,
            top: 0,
            left: 0,
            width: 0,
        };
        list.warn_if_stale();
        Ok(list)
    }

    /// Creates a list whose item names come from `Display` and which uses
    /// [`DefaultDelegate`].
    pub fn with_display_names(title: impl Into<String>, data: ListData<T>) -> Result<Self, ListError>
    where
        T: Display,
    {
        Self::new(title, data, |item: &T| item.to_string(), DefaultDelegate::new())
    }

    /// A list with no sections, named by `Display`.
    ///
    /// Nothing is selectable until [`set_data`](Model::set_data) installs
    /// sections.
    pub fn empty(title: impl Into<String>) -> Self
    where
        T: Display + Default,
    {
        Self {
            title: title.into(),
            sections: Vec::new(),
            items_by_section: HashMap::new(),
            selected: Selection::new(String::new(), T::default()),
            name_of: Box::new(|item: &T| item.to_string()),
            on_select: None,
            delegate: Box::new(DefaultDelegate::new()),
            keymap: AccessibleListKeyMap::default(),
            focus_table: FocusTable::default(),
            focus: FocusTarget::Outside,
            top: 0,
            left: 0,
            width: 0,
        }
    }

    /// Sets the callback run when an item is committed.
    pub fn with_on_select<F>(mut self, on_select: F) -> Self
    where
        F: Fn(&Selection<T>) -> Option<Cmd> + Send + Sync + 'static,
    {
        self.on_select = Some(Box::new(on_select));
        self
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: AccessibleListKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the screen row where the list is drawn.
    pub fn with_top(mut self, top: u16) -> Self {
        self.top = top;
        self
    }

    /// Sets the screen column where the list's left edge is drawn.
    pub fn with_left(mut self, left: u16) -> Self {
        self.left = left;
        self
    }

    /// Sets the width available to item text; `0` leaves names uncut.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the presentation delegate and re-runs layout.
    pub fn set_delegate<D>(&mut self, delegate: D)
    where
        D: ListDelegate<T> + Send + Sync + 'static,
    {
        self.delegate = Box::new(delegate);
        self.rebuild();
    }

    /// Replaces sections, items and selection in one render pass.
    ///
    /// Keyboard focus follows the focused item by `(section, name)`: if the
    /// same item is still present it keeps focus under its new handle,
    /// otherwise focus falls back to the container.
    ///
    /// # Errors
    ///
    /// Same checks as [`Model::new`]. On error the previous data stays in
    /// place and the list keeps rendering it.
    ///
    /// # Examples
    ///
    /// ```
    /// use chat_widgets::accessible_list::{ListData, Model, Selection};
    ///
    /// let data = ListData::new(Selection::new("A", 1)).with_section("A", vec![1]);
    /// let mut list = Model::with_display_names("Numbers", data).unwrap();
    ///
    /// let bad = ListData::new(Selection::new("A", 1)).with_section("A", vec![1, 1]);
    /// assert!(list.set_data(bad).is_err());
    /// assert_eq!(list.items("A"), Some(&[1][..]));
    ///
    /// let next = ListData::new(Selection::new("B", 2)).with_section("B", vec![2, 3]);
    /// list.set_data(next).unwrap();
    /// assert_eq!(list.sections(), ["B"]);
    /// ```
    pub fn set_data(&mut self, data: ListData<T>) -> Result<(), ListError> {
        let table = FocusTable::build(
            &data.sections,
            &data.items_by_section,
            &self.name_of,
            self.delegate.layout(),
        )?;
        self.sections = data.sections;
        self.items_by_section = data.items_by_section;
        self.selected = data.selected;
        self.install(table);
        self.warn_if_stale();
        Ok(())
    }

    /// Replaces the selection the list renders.
    pub fn set_selected(&mut self, selected: Selection<T>) {
        self.selected = selected;
        self.warn_if_stale();
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Sets the screen row where the list is drawn.
    pub fn set_top(&mut self, top: u16) {
        self.top = top;
    }

    /// Sets the screen column where the list's left edge is drawn.
    pub fn set_left(&mut self, left: u16) {
        self.left = left;
    }

    /// The title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Section names in order.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Items of `section`.
    pub fn items(&self, section: &str) -> Option<&[T]> {
        self.items_by_section.get(section).map(Vec::as_slice)
    }

    /// The selection being rendered.
    pub fn selected(&self) -> &Selection<T> {
        &self.selected
    }

    /// Key bindings.
    pub fn keymap(&self) -> &AccessibleListKeyMap {
        &self.keymap
    }

    /// Where keyboard focus sits.
    pub fn focus_target(&self) -> FocusTarget {
        self.focus
    }

    /// The item holding keyboard focus, as a selection.
    pub fn focused_item(&self) -> Option<Selection<T>> {
        match self.focus {
            FocusTarget::Item(handle) => self.selection_for(handle),
            _ => None,
        }
    }

    /// Whether the rendered selection exists in the current data.
    pub fn selection_is_present(&self) -> bool {
        self.selected_handle().is_some()
    }

    /// Handle of the selected item, the only item reachable with Tab.
    pub fn selected_handle(&self) -> Option<FocusHandle> {
        let items = self.items_by_section.get(&self.selected.section)?;
        if !items.contains(&self.selected.item) {
            return None;
        }
        let name = (self.name_of)(&self.selected.item);
        self.focus_table.lookup(&self.selected.section, &name)
    }

    /// Handle for the item called `name` in `section`.
    pub fn handle_for(&self, section: &str, name: &str) -> Option<FocusHandle> {
        self.focus_table.lookup(section, name)
    }

    pub(super) fn selection_for(&self, handle: FocusHandle) -> Option<Selection<T>> {
        let entry = self.focus_table.entry(handle)?;
        let item = self
            .items_by_section
            .get(&entry.section)?
            .get(entry.item_index)?
            .clone();
        Some(Selection::new(entry.section.clone(), item))
    }

    fn rebuild(&mut self) {
        // Data was validated when it was installed; only row positions change.
        if let Ok(table) = FocusTable::build(
            &self.sections,
            &self.items_by_section,
            &self.name_of,
            self.delegate.layout(),
        ) {
            self.install(table);
        }
    }

    /// Swaps in a new table and re-attaches item focus by section and name.
    fn install(&mut self, table: FocusTable) {
        let previous = match self.focus {
            FocusTarget::Item(handle) => self
                .focus_table
                .entry(handle)
                .map(|e| (e.section.clone(), e.name.clone())),
            _ => None,
        };
        self.focus_table = table;
        log::debug!(
            "list '{}' laid out {} items",
            self.title,
            self.focus_table.len()
        );

        if let Some((section, name)) = previous {
            self.focus = match self.focus_table.lookup(&section, &name) {
                Some(handle) => FocusTarget::Item(handle),
                None => FocusTarget::Container,
            };
        }
    }

    fn warn_if_stale(&self) {
        if !self.sections.is_empty() && !self.selection_is_present() {
            log::warn!(
                "list '{}': selection in section '{}' is not among the rendered items",
                self.title,
                self.selected.section
            );
        }
    }
}
