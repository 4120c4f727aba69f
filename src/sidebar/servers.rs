//! Server rail.

use super::{sidebar_data, SidebarSelection};
use crate::accessible_list::{self, DefaultDelegate, ListError, ListStyles};
use crate::key::{self, KeyMap as _};
use crate::Component;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use std::collections::HashMap;

/// Title of the server rail.
pub const SERVERS_TITLE: &str = "Servers";

/// The servers the user belongs to, grouped, titled "Servers".
///
/// Drawn with [`ListStyles::inverted`] so it stands apart from the channel
/// list next to it.
pub struct ServersList {
    list: accessible_list::Model<String>,
}

impl ServersList {
    /// Creates the server rail, titled [`SERVERS_TITLE`].
    ///
    /// # Arguments
    ///
    /// * `groups` - Server group names in display order
    /// * `servers_by_group` - Server names of every group in `groups`
    /// * `selected` - The server the owner currently shows; its name goes in
    ///   [`SidebarSelection::channel`]
    ///
    /// # Errors
    ///
    /// Same checks as [`ChannelsList::new`](super::ChannelsList::new).
    ///
    /// # Examples
    ///
    /// ```
    /// use chat_widgets::sidebar::{ServersList, SidebarSelection};
    /// use std::collections::HashMap;
    ///
    /// let mut by_group = HashMap::new();
    /// by_group.insert("Group 1".to_string(), vec!["CS222 Discord".to_string()]);
    /// let rail = ServersList::new(
    ///     vec!["Group 1".to_string()],
    ///     by_group,
    ///     SidebarSelection::new("Group 1", "CS222 Discord"),
    /// )
    /// .unwrap();
    /// assert_eq!(rail.selected().channel, "CS222 Discord");
    /// ```
    pub fn new(
        groups: Vec<String>,
        servers_by_group: HashMap<String, Vec<String>>,
        selected: SidebarSelection,
    ) -> Result<Self, ListError> {
        let list = accessible_list::Model::new(
            SERVERS_TITLE,
            sidebar_data(groups, servers_by_group, selected),
            String::clone,
            Self::delegate(),
        )?;
        Ok(Self { list })
    }

    fn delegate() -> DefaultDelegate {
        DefaultDelegate::new().with_styles(ListStyles::inverted())
    }

    /// Sets the callback run when a server is committed.
    pub fn with_on_select<F>(self, on_select: F) -> Self
    where
        F: Fn(&SidebarSelection) -> Option<Cmd> + Send + Sync + 'static,
    {
        Self {
            list: self
                .list
                .with_on_select(move |s| on_select(&SidebarSelection::from(s))),
        }
    }

    /// Sets the screen row where the rail is drawn.
    pub fn with_top(mut self, top: u16) -> Self {
        self.list.set_top(top);
        self
    }

    /// Sets the screen column of the rail's left edge.
    pub fn with_left(mut self, left: u16) -> Self {
        self.list.set_left(left);
        self
    }

    /// Replaces groups, servers and selection.
    pub fn set_data(
        &mut self,
        groups: Vec<String>,
        servers_by_group: HashMap<String, Vec<String>>,
        selected: SidebarSelection,
    ) -> Result<(), ListError> {
        self.list
            .set_data(sidebar_data(groups, servers_by_group, selected))
    }

    /// Replaces the selected server.
    pub fn set_selected(&mut self, selected: SidebarSelection) {
        self.list.set_selected(selected.into());
    }

    /// The selected server; `channel` holds the server name.
    pub fn selected(&self) -> SidebarSelection {
        self.list.selected().into()
    }

    /// The underlying list.
    pub fn list(&self) -> &accessible_list::Model<String> {
        &self.list
    }

    /// The underlying list, mutably.
    pub fn list_mut(&mut self) -> &mut accessible_list::Model<String> {
        &mut self.list
    }

    /// Handles a key press or mouse click.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.list.update(msg)
    }

    /// Renders the rail.
    pub fn view(&self) -> String {
        self.list.view()
    }
}

impl Component for ServersList {
    fn focus(&mut self) -> Option<Cmd> {
        self.list.focus()
    }

    fn blur(&mut self) {
        self.list.blur();
    }

    fn focused(&self) -> bool {
        self.list.focused()
    }
}

impl BubbleTeaModel for ServersList {
    fn init() -> (Self, Option<Cmd>) {
        let mut list = accessible_list::Model::empty(SERVERS_TITLE);
        list.set_delegate(Self::delegate());
        (Self { list }, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        ServersList::update(self, msg)
    }

    fn view(&self) -> String {
        ServersList::view(self)
    }
}

impl key::KeyMap for ServersList {
    fn short_help(&self) -> Vec<&key::Binding> {
        self.list.short_help()
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        self.list.full_help()
    }
}
