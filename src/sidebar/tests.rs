//! Tests for the sidebar lists.

use super::*;
use crate::accessible_list::{FocusTarget, ListError, Role};
use crate::Component;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::{Arc, Mutex};

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

fn groups() -> Vec<String> {
    vec!["A".to_string(), "B".to_string(), "C".to_string()]
}

fn by_group() -> HashMap<String, Vec<String>> {
    let mut map = HashMap::new();
    map.insert("A".to_string(), vec!["1".to_string(), "2".to_string()]);
    map.insert(
        "B".to_string(),
        vec!["2".to_string(), "3".to_string(), "4".to_string()],
    );
    map.insert("C".to_string(), vec!["5".to_string()]);
    map
}

fn channels() -> (ChannelsList, Arc<Mutex<Vec<SidebarSelection>>>) {
    let picked = Arc::new(Mutex::new(Vec::new()));
    let sink = picked.clone();
    let list = ChannelsList::new("Server name", groups(), by_group(), SidebarSelection::new("A", "2"))
        .unwrap()
        .with_on_select(move |s| {
            sink.lock().unwrap().push(s.clone());
            None
        });
    (list, picked)
}

fn focused(list: &ChannelsList) -> SidebarSelection {
    list.list()
        .focused_item()
        .map(SidebarSelection::from)
        .expect("a channel should hold focus")
}

#[test]
fn test_server_name_labels_the_list() {
    let list = ChannelsList::new(
        "Server name",
        vec![],
        HashMap::new(),
        SidebarSelection::new("A", "1"),
    )
    .unwrap();
    let tree = list.list().accessibility_tree();
    assert_eq!(tree.role, Role::Listbox);
    assert_eq!(tree.name, "Server name");
    assert!(strip_ansi_escapes::strip_str(list.view()).contains("Server name"));
}

#[test]
fn test_groups_are_listed_with_their_channels() {
    let (list, _) = channels();
    let tree = list.list().accessibility_tree();

    let names: Vec<Vec<&str>> = tree
        .all(Role::Group)
        .iter()
        .map(|g| g.children.iter().map(|o| o.name.as_str()).collect())
        .collect();
    assert_eq!(names, vec![vec!["1", "2"], vec!["2", "3", "4"], vec!["5"]]);

    let view = strip_ansi_escapes::strip_str(list.view());
    assert!(view.contains("# 3"));
    // Group headings are drawn uppercase.
    assert!(view.contains('B'));
}

#[test]
fn test_click_reports_group_and_channel() {
    let (mut list, picked) = channels();
    let handle = list.list().handle_for("B", "3").unwrap();
    list.list_mut().click(handle);
    assert_eq!(*picked.lock().unwrap(), vec![SidebarSelection::new("B", "3")]);
}

#[test]
fn test_keyboard_walk_and_commit() {
    let (mut list, picked) = channels();
    list.focus();
    list.update(key(KeyCode::Tab));
    assert_eq!(focused(&list), SidebarSelection::new("A", "2"));

    list.update(key(KeyCode::Up));
    list.update(key(KeyCode::Up));
    assert_eq!(focused(&list), SidebarSelection::new("C", "5"));

    list.update(key(KeyCode::Down));
    list.update(key(KeyCode::Right));
    assert_eq!(*picked.lock().unwrap(), vec![SidebarSelection::new("A", "1")]);
}

#[test]
fn test_owner_applies_selection() {
    let (mut list, picked) = channels();
    list.focus();
    list.update(key(KeyCode::Tab));
    list.update(key(KeyCode::Down));
    list.update(key(KeyCode::Enter));

    let choice = picked.lock().unwrap()[0].clone();
    assert_eq!(list.selected(), SidebarSelection::new("A", "2"));
    list.set_selected(choice);
    assert_eq!(list.selected(), SidebarSelection::new("B", "2"));
}

#[test]
fn test_set_data_reports_missing_group() {
    let (mut list, _) = channels();
    let mut map = by_group();
    map.remove("C");
    assert_eq!(
        list.set_data(groups(), map, SidebarSelection::new("A", "1")),
        Err(ListError::MissingSection("C".to_string()))
    );
    assert_eq!(list.list().sections(), ["A", "B", "C"]);
}

#[test]
fn test_blur_leaves_the_list() {
    let (mut list, _) = channels();
    list.focus();
    assert!(list.focused());
    list.blur();
    assert_eq!(list.list().focus_target(), FocusTarget::Outside);
}

#[test]
fn test_servers_rail_is_titled_servers() {
    let mut map = HashMap::new();
    map.insert(
        "Group 1".to_string(),
        vec!["CS222 Discord".to_string(), "Book Club".to_string()],
    );
    let picked = Arc::new(Mutex::new(None));
    let sink = picked.clone();
    let mut rail = ServersList::new(
        vec!["Group 1".to_string()],
        map,
        SidebarSelection::new("Group 1", "CS222 Discord"),
    )
    .unwrap()
    .with_on_select(move |s| {
        *sink.lock().unwrap() = Some(s.clone());
        None
    });

    assert_eq!(rail.list().title(), SERVERS_TITLE);
    let view = strip_ansi_escapes::strip_str(rail.view());
    assert!(view.contains("Book Club"));
    assert!(!view.contains('#'));

    rail.focus();
    rail.update(key(KeyCode::Tab));
    rail.update(key(KeyCode::Down));
    rail.update(key(KeyCode::Enter));
    assert_eq!(
        *picked.lock().unwrap(),
        Some(SidebarSelection::new("Group 1", "Book Club"))
    );
    assert_eq!(
        rail.list().accessibility_tree().children[0].children[0].id,
        "Group_1-CS222_Discord"
    );
}

#[test]
fn test_init_builds_empty_lists() {
    use bubbletea_rs::Model as _;
    let (channels, cmd) = ChannelsList::init();
    assert!(cmd.is_none());
    assert!(channels.list().sections().is_empty());

    let (servers, _) = ServersList::init();
    assert_eq!(servers.list().title(), "Servers");
}
