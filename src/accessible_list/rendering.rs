//! Rendering and the accessibility tree.

use super::focus::{FocusHandle, FocusTarget};
use super::model::Model;
use super::types::{
    element_id, ContainerProps, ItemProps, Role, SectionProps, SectionTitleProps, TitleProps,
};

/// One node of the list's accessibility tree.
///
/// This is what a screen reader would be told about the list: roles,
/// accessible names, ids and which nodes are reachable with Tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessNode {
    /// Role of the node.
    pub role: Role,
    /// Accessible name: the title for the listbox, the section name for a
    /// group, the item name for an option.
    pub name: String,
    /// Element id.
    pub id: String,
    /// Whether Tab can reach the node.
    pub tab_reachable: bool,
    /// Whether the node is the owner's selection.
    pub selected: bool,
    /// Visible text content.
    pub text: String,
    /// Child nodes in render order.
    pub children: Vec<AccessNode>,
}

impl AccessNode {
    /// Depth-first search for the first node with `role` and `name`.
    pub fn find(&self, role: Role, name: &str) -> Option<&AccessNode> {
        if self.role == role && self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(role, name))
    }

    /// All nodes with `role`, depth-first.
    pub fn all(&self, role: Role) -> Vec<&AccessNode> {
        let mut out = Vec::new();
        self.collect(role, &mut out);
        out
    }

    fn collect<'a>(&'a self, role: Role, out: &mut Vec<&'a AccessNode>) {
        if self.role == role {
            out.push(self);
        }
        for child in &self.children {
            child.collect(role, out);
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> Model<T> {
    fn title_id(&self) -> String {
        element_id(&self.title)
    }

    fn is_selected(&self, section: &str, item: &T) -> bool {
        self.selected.section == section && self.selected.item == *item
    }

    fn is_focused(&self, handle: FocusHandle) -> bool {
        self.focus == FocusTarget::Item(handle)
    }

    /// Renders the list through its delegate.
    pub fn view(&self) -> String {
        let title_id = self.title_id();
        let mut body = self.delegate.render_title(&TitleProps {
            id: &title_id,
            role: Role::Presentation,
            text: &self.title,
        });

        let gap = self.delegate.layout().section_gap;
        for (index, section) in self.sections.iter().enumerate() {
            let Some(items) = self.items_by_section.get(section) else {
                continue;
            };
            let section_id = element_id(section);

            let mut lines = vec![self.delegate.render_section_title(&SectionTitleProps {
                id: &section_id,
                text: section,
            })];
            for item in items {
                let name = (self.name_of)(item);
                let Some(handle) = self.focus_table.lookup(section, &name) else {
                    continue;
                };
                let id = self
                    .focus_table
                    .entry(handle)
                    .map(|e| e.id.clone())
                    .unwrap_or_default();
                let selected = self.is_selected(section, item);
                lines.push(self.delegate.render_item(&ItemProps {
                    item,
                    name: &name,
                    id: &id,
                    role: Role::Option,
                    selected,
                    tab_reachable: selected,
                    focused: self.is_focused(handle),
                    handle,
                    width: self.width,
                }));
            }

            let block = self.delegate.render_section(
                &SectionProps {
                    role: Role::Group,
                    label: section,
                    id: &section_id,
                },
                &lines.join("\n"),
            );

            body.push('\n');
            if index > 0 {
                body.push_str(&"\n".repeat(gap));
            }
            body.push_str(&block);
        }

        self.delegate.render_container(
            &ContainerProps {
                role: Role::Listbox,
                tab_reachable: true,
                labelled_by: &title_id,
                focused: self.focus == FocusTarget::Container,
            },
            &body,
        )
    }

    /// Builds the accessibility tree for the current render.
    pub fn accessibility_tree(&self) -> AccessNode {
        let reachable = self.selected_handle();
        let children = self
            .sections
            .iter()
            .filter_map(|section| {
                let items = self.items_by_section.get(section)?;
                let options = items
                    .iter()
                    .filter_map(|item| {
                        let name = (self.name_of)(item);
                        let handle = self.focus_table.lookup(section, &name)?;
                        let entry = self.focus_table.entry(handle)?;
                        Some(AccessNode {
                            role: Role::Option,
                            id: entry.id.clone(),
                            tab_reachable: reachable == Some(handle),
                            selected: self.is_selected(section, item),
                            text: name.clone(),
                            name,
                            children: Vec::new(),
                        })
                    })
                    .collect();
                Some(AccessNode {
                    role: Role::Group,
                    name: section.clone(),
                    id: element_id(section),
                    tab_reachable: false,
                    selected: false,
                    text: section.clone(),
                    children: options,
                })
            })
            .collect();

        AccessNode {
            role: Role::Listbox,
            name: self.title.clone(),
            id: self.title_id(),
            tab_reachable: true,
            selected: false,
            text: self.title.clone(),
            children,
        }
    }
}
