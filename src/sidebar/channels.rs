//! Channel list for one chat server.

use super::{sidebar_data, SidebarSelection};
use crate::accessible_list::{self, style::CHANNEL_GLYPH, DefaultDelegate, ListError};
use crate::key::{self, KeyMap as _};
use crate::Component;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use std::collections::HashMap;

/// The channels of one server, grouped, each drawn with a `#` glyph.
///
/// The list is labelled by the server name. Committing a channel reports a
/// [`SidebarSelection`]; the owner decides whether to switch to it.
///
/// ```rust
/// use chat_widgets::sidebar::{ChannelsList, SidebarSelection};
/// use std::collections::HashMap;
///
/// let mut by_group = HashMap::new();
/// by_group.insert("Group 1".to_string(), vec!["channel-1".to_string()]);
///
/// let channels = ChannelsList::new(
///     "CS222 Discord",
///     vec!["Group 1".to_string()],
///     by_group,
///     SidebarSelection::new("Group 1", "channel-1"),
/// )
/// .unwrap()
/// .with_on_select(|selection| {
///     println!("switch to {}", selection.channel);
///     None
/// });
/// assert_eq!(channels.list().title(), "CS222 Discord");
/// ```
pub struct ChannelsList {
    list: accessible_list::Model<String>,
}

impl ChannelsList {
    /// Creates the channel list for one server.
    ///
    /// # Arguments
    ///
    /// * `server_name` - Labels the list and is drawn as its title
    /// * `groups` - Group names in display order
    /// * `channels_by_group` - Channel names of every group in `groups`
    /// * `selected` - The channel the owner currently shows
    ///
    /// # Errors
    ///
    /// Returns a [`ListError`] if a group has no entry in
    /// `channels_by_group`, has no channels, appears twice, or lists the same
    /// channel twice. Groups present in the map but not in `groups` are
    /// ignored.
    pub fn new(
        server_name: impl Into<String>,
        groups: Vec<String>,
        channels_by_group: HashMap<String, Vec<String>>,
        selected: SidebarSelection,
    ) -> Result<Self, ListError> {
        let list = accessible_list::Model::new(
            server_name,
            sidebar_data(groups, channels_by_group, selected),
            String::clone,
            Self::delegate(),
        )?;
        Ok(Self { list })
    }

    fn delegate() -> DefaultDelegate {
        DefaultDelegate::new().with_glyph(CHANNEL_GLYPH)
    }

    /// Sets the callback run when a channel is committed.
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

    /// Sets the screen row where the list is drawn.
    pub fn with_top(mut self, top: u16) -> Self {
        self.list.set_top(top);
        self
    }

    /// Sets the screen column of the list's left edge.
    pub fn with_left(mut self, left: u16) -> Self {
        self.list.set_left(left);
        self
    }

    /// Replaces the server name shown as the title.
    pub fn set_server_name(&mut self, server_name: impl Into<String>) {
        self.list.set_title(server_name);
    }

    /// Replaces groups, channels and selection.
    pub fn set_data(
        &mut self,
        groups: Vec<String>,
        channels_by_group: HashMap<String, Vec<String>>,
        selected: SidebarSelection,
    ) -> Result<(), ListError> {
        self.list
            .set_data(sidebar_data(groups, channels_by_group, selected))
    }

    /// Replaces the selected channel.
    pub fn set_selected(&mut self, selected: SidebarSelection) {
        self.list.set_selected(selected.into());
    }

    /// The selected channel.
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

    /// Renders the list.
    pub fn view(&self) -> String {
        self.list.view()
    }
}

impl Component for ChannelsList {
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

impl BubbleTeaModel for ChannelsList {
    fn init() -> (Self, Option<Cmd>) {
        let mut list = accessible_list::Model::empty("Channels");
        list.set_delegate(Self::delegate());
        (Self { list }, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        ChannelsList::update(self, msg)
    }

    fn view(&self) -> String {
        ChannelsList::view(self)
    }
}

impl key::KeyMap for ChannelsList {
    fn short_help(&self) -> Vec<&key::Binding> {
        self.list.short_help()
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        self.list.full_help()
    }
}
