//! Chat sidebar lists built on [`accessible_list`](crate::accessible_list).
//!
//! - [`ChannelsList`]: channels of one server, grouped, with a `#` glyph
//! - [`ServersList`]: the servers the user belongs to, grouped
//!
//! Both speak in terms of a [`SidebarSelection`] (group plus entry name)
//! and forward everything else to the underlying list.

mod channels;
mod servers;

#[cfg(test)]
mod tests;

pub use channels::ChannelsList;
pub use servers::{ServersList, SERVERS_TITLE};

use crate::accessible_list::{ListData, Selection};
use std::collections::HashMap;

/// A group name plus the entry (channel or server) selected inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SidebarSelection {
    /// Group the entry belongs to.
    pub group: String,
    /// Channel or server name.
    pub channel: String,
}

impl SidebarSelection {
    /// Creates a selection.
    pub fn new(group: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            channel: channel.into(),
        }
    }
}

impl From<Selection<String>> for SidebarSelection {
    fn from(s: Selection<String>) -> Self {
        Self {
            group: s.section,
            channel: s.item,
        }
    }
}

impl From<&Selection<String>> for SidebarSelection {
    fn from(s: &Selection<String>) -> Self {
        Self::new(s.section.clone(), s.item.clone())
    }
}

impl From<SidebarSelection> for Selection<String> {
    fn from(s: SidebarSelection) -> Self {
        Selection::new(s.group, s.channel)
    }
}

/// Lays out `groups` in order with their entries from `by_group`.
///
/// A group missing from the map is passed through as listed so the list
/// reports it as an error instead of silently dropping it.
fn sidebar_data(
    groups: Vec<String>,
    mut by_group: HashMap<String, Vec<String>>,
    selected: SidebarSelection,
) -> ListData<String> {
    let items_by_section = groups
        .iter()
        .filter_map(|g| by_group.remove_entry(g))
        .collect();
    ListData {
        sections: groups,
        items_by_section,
        selected: selected.into(),
    }
}
