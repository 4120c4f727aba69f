//! Key bindings for the accessible list.
//!
//! - **Focus movement**: `↑` / `↓`, wrapping across sections
//! - **Commit**: `→` or `enter` selects the focused item
//! - **Tab stops**: `tab` / `shift+tab` walk container → selected item → out

use crate::key::{self, Binding};
use crossterm::event::KeyCode;

/// Key bindings used by [`Model`](super::Model).
#[derive(Debug, Clone)]
pub struct AccessibleListKeyMap {
    /// Focus the previous item.
    pub focus_up: Binding,
    /// Focus the next item.
    pub focus_down: Binding,
    /// Select the focused item.
    pub commit: Binding,
    /// Move to the next tab stop.
    pub next_stop: Binding,
    /// Move to the previous tab stop.
    pub prev_stop: Binding,
}

impl Default for AccessibleListKeyMap {
    fn default() -> Self {
        Self {
            focus_up: Binding::new(vec![KeyCode::Up]).with_help("↑", "previous"),
            focus_down: Binding::new(vec![KeyCode::Down]).with_help("↓", "next"),
            commit: Binding::new(vec![KeyCode::Right, KeyCode::Enter])
                .with_help("→/enter", "select"),
            next_stop: Binding::new(vec![KeyCode::Tab]).with_help("tab", "next area"),
            prev_stop: Binding::new(vec![KeyCode::BackTab]).with_help("shift+tab", "previous area"),
        }
    }
}

impl key::KeyMap for AccessibleListKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.focus_up, &self.focus_down, &self.commit]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.focus_up, &self.focus_down, &self.commit],
            vec![&self.next_stop, &self.prev_stop],
        ]
    }
}
