//! Chat sidebar demo.
//!
//! A server rail and a channel list side by side. Arrow keys move focus
//! inside a list, Right or Enter picks the focused entry, Tab and Shift+Tab
//! walk between the lists. Global chords:
//!
//! - `ctrl+k`: jump to the channel list
//! - `ctrl+s`: jump to the server rail
//! - `ctrl+q`: quit
//!
//! Logs go to `chat-sidebar.log` so they do not disturb the terminal UI.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model, MouseMotion, MouseMsg, Msg, Program};
use chat_widgets::prelude::*;
use crossterm::event::KeyCode;
use lipgloss_extras::lipgloss;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::collections::HashMap;
use std::fs::File;

/// A server was picked in the rail.
struct ServerPicked(SidebarSelection);

/// A channel was picked in the channel list.
struct ChannelPicked(SidebarSelection);

/// Which sidebar should receive keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Servers,
    Channels,
}

struct FocusPane(Pane);

fn send(msg: impl std::any::Any + Send) -> Cmd {
    Box::pin(async move { Some(Box::new(msg) as Msg) })
}

fn groups(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn by_group(entries: Vec<(&str, Vec<&str>)>) -> HashMap<String, Vec<String>> {
    entries
        .into_iter()
        .map(|(group, items)| (group.to_string(), groups(&items)))
        .collect()
}

/// Channels of `server` plus the channel to select first.
fn server_channels(server: &str) -> (Vec<String>, HashMap<String, Vec<String>>, SidebarSelection) {
    match server {
        "Book Club" => (
            groups(&["Reading"]),
            by_group(vec![("Reading", vec!["this-month", "next-month"])]),
            SidebarSelection::new("Reading", "this-month"),
        ),
        _ => (
            groups(&["Group 1", "Group 2"]),
            by_group(vec![
                ("Group 1", vec!["channel-1", "channel-2"]),
                ("Group 2", vec!["channel-3", "channel-4"]),
            ]),
            SidebarSelection::new("Group 1", "channel-2"),
        ),
    }
}

struct App {
    servers: ServersList,
    channels: ChannelsList,
    shortcuts: ShortcutProvider,
    help: HelpModel,
    pane: Pane,
}

impl App {
    fn build() -> Result<Self, Box<dyn std::error::Error>> {
        let servers = ServersList::new(
            groups(&["Group 1", "Group 2"]),
            by_group(vec![
                ("Group 1", vec!["CS222 Discord", "Study Group"]),
                ("Group 2", vec!["Book Club"]),
            ]),
            SidebarSelection::new("Group 1", "CS222 Discord"),
        )?
        .with_on_select(|s| Some(send(ServerPicked(s.clone()))));

        let (channel_groups, channels_by_group, selected) = server_channels("CS222 Discord");
        let channels = ChannelsList::new("CS222 Discord", channel_groups, channels_by_group, selected)?
            .with_on_select(|s| Some(send(ChannelPicked(s.clone()))));

        let mut shortcuts = ShortcutProvider::new();
        shortcuts.register_shortcut(
            Shortcut::new([Key::CtrlCmd, Key::Char('K')], || {
                Some(send(FocusPane(Pane::Channels)))
            })
            .with_description("channels"),
        )?;
        shortcuts.register_shortcut(
            Shortcut::new([Key::CtrlCmd, Key::Char('S')], || {
                Some(send(FocusPane(Pane::Servers)))
            })
            .with_description("servers"),
        )?;
        shortcuts.register_shortcut(
            Shortcut::new([Key::CtrlCmd, Key::Char('Q')], || Some(quit())).with_description("quit"),
        )?;

        let mut app = Self {
            servers,
            channels,
            shortcuts,
            help: HelpModel::new(),
            pane: Pane::Channels,
        };
        app.focus_pane(Pane::Channels);
        Ok(app)
    }

    fn focus_pane(&mut self, pane: Pane) {
        log::debug!("focus {:?}", pane);
        self.pane = pane;
        match pane {
            Pane::Servers => {
                self.channels.blur();
                self.servers.focus();
                self.servers.list_mut().focus_next_stop();
            }
            Pane::Channels => {
                self.servers.blur();
                self.channels.focus();
                self.channels.list_mut().focus_next_stop();
            }
        }
    }

    fn switch_server(&mut self, selection: SidebarSelection) {
        let (channel_groups, channels_by_group, selected) = server_channels(&selection.channel);
        match self
            .channels
            .set_data(channel_groups, channels_by_group, selected)
        {
            Ok(()) => {
                self.channels.set_server_name(selection.channel.clone());
                self.servers.set_selected(selection);
            }
            Err(err) => log::error!("cannot show channels of {}: {}", selection.channel, err),
        }
    }

    /// Offers a click to both sidebars; each only reacts inside its own
    /// columns.
    fn handle_mouse(&mut self, mouse: &MouseMsg) -> Option<Cmd> {
        // The channel list starts one blank column right of the rail.
        let rail_width = lipgloss::width(&self.servers.view());
        self.channels
            .list_mut()
            .set_left(u16::try_from(rail_width + 1).unwrap_or(u16::MAX));

        self.servers
            .update(Box::new(mouse.clone()))
            .or_else(|| self.channels.update(Box::new(mouse.clone())))
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        let list = match self.pane {
            Pane::Servers => self.servers.list_mut(),
            Pane::Channels => self.channels.list_mut(),
        };
        let outcome = list.handle_key(key);
        if outcome.is_handled() {
            return outcome.into_cmd();
        }

        match key.key {
            KeyCode::Tab | KeyCode::BackTab => {
                let next = match self.pane {
                    Pane::Servers => Pane::Channels,
                    Pane::Channels => Pane::Servers,
                };
                self.focus_pane(next);
                None
            }
            KeyCode::Esc => Some(quit()),
            _ => None,
        }
    }
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        match App::build() {
            Ok(app) => (app, None),
            Err(err) => {
                log::error!("sample data rejected: {}", err);
                let (servers, _) = ServersList::init();
                let (channels, _) = ChannelsList::init();
                let app = App {
                    servers,
                    channels,
                    shortcuts: ShortcutProvider::new(),
                    help: HelpModel::new(),
                    pane: Pane::Channels,
                };
                (app, Some(quit()))
            }
        }
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(ServerPicked(selection)) = msg.downcast_ref::<ServerPicked>() {
            self.switch_server(selection.clone());
            return None;
        }
        if let Some(ChannelPicked(selection)) = msg.downcast_ref::<ChannelPicked>() {
            log::info!("joined #{}", selection.channel);
            self.channels.set_selected(selection.clone());
            return None;
        }
        if let Some(FocusPane(pane)) = msg.downcast_ref::<FocusPane>() {
            self.focus_pane(*pane);
            return None;
        }

        if let Some(cmd) = self.shortcuts.update(&msg) {
            return Some(cmd);
        }
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }
        if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            return self.handle_mouse(mouse);
        }
        None
    }

    fn view(&self) -> String {
        let servers = self.servers.view();
        let channels = self.channels.view();
        let sidebars =
            lipgloss::join_horizontal(lipgloss::TOP, &[servers.as_str(), " ", channels.as_str()]);
        let list_help = match self.pane {
            Pane::Servers => self.help.view(&self.servers),
            Pane::Channels => self.help.view(&self.channels),
        };
        let shortcut_help = self.help.view(self.shortcuts.registry());
        format!("{}\n\n{}\n{}", sidebars, list_help, shortcut_help)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("chat-sidebar.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let program = Program::<App>::builder()
        .alt_screen(true)
        .mouse_motion(MouseMotion::Cell)
        .signal_handler(true)
        .build()?;
    program.run().await?;
    Ok(())
}
