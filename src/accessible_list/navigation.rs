//! Focus movement, commits, and tab stops.
//!
//! Focus movement and selection are separate steps. Up/Down only move
//! focus; Right/Enter or a click commit the focused (or clicked) item
//! through `on_select`. Nothing here ever writes `selected`.

use super::focus::{FocusHandle, FocusTarget};
use super::model::Model;
use super::types::KeyOutcome;
use bubbletea_rs::{Cmd, KeyMsg};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use lipgloss_extras::lipgloss;

impl<T: Clone + PartialEq + Send + 'static> Model<T> {
    /// Moves focus to the item behind `handle`.
    ///
    /// Returns `false` if the handle does not belong to the current render.
    pub fn focus_item(&mut self, handle: FocusHandle) -> bool {
        if self.focus_table.entry(handle).is_none() {
            return false;
        }
        self.focus = FocusTarget::Item(handle);
        true
    }

    /// Moves focus to the next item, wrapping to the first item of the next
    /// section. Does nothing unless an item holds focus.
    pub fn focus_down(&mut self) -> bool {
        self.step(|table, h| table.next(h))
    }

    /// Moves focus to the previous item, wrapping to the last item of the
    /// previous section. Does nothing unless an item holds focus.
    pub fn focus_up(&mut self) -> bool {
        self.step(|table, h| table.prev(h))
    }

    fn step<F>(&mut self, f: F) -> bool
    where
        F: Fn(&super::focus::FocusTable, FocusHandle) -> Option<FocusHandle>,
    {
        let FocusTarget::Item(current) = self.focus else {
            return false;
        };
        match f(&self.focus_table, current) {
            Some(next) => {
                if let Some(entry) = self.focus_table.entry(next) {
                    log::trace!("focus -> {}", entry.id);
                }
                self.focus = FocusTarget::Item(next);
                true
            }
            None => false,
        }
    }

    /// Commits the focused item.
    pub fn commit(&mut self) -> Option<Cmd> {
        match self.focus {
            FocusTarget::Item(handle) => self.select(handle),
            _ => None,
        }
    }

    /// Commits the item behind `handle`, as a pointer click does.
    pub fn click(&mut self, handle: FocusHandle) -> Option<Cmd> {
        self.select(handle)
    }

    /// Commits the item drawn on `row`, counted from the list's first line.
    pub fn click_row(&mut self, row: usize) -> Option<Cmd> {
        let handle = self.focus_table.hit_test(row)?;
        self.click(handle)
    }

    fn select(&self, handle: FocusHandle) -> Option<Cmd> {
        let selection = self.selection_for(handle)?;
        log::debug!(
            "list '{}' committed item {} in section '{}'",
            self.title,
            handle.index(),
            selection.section
        );
        self.on_select.as_ref().and_then(|cb| cb(&selection))
    }

    /// Tab: container → selected item → out of the list.
    ///
    /// Returns `true` while focus stays inside the list.
    pub fn focus_next_stop(&mut self) -> bool {
        match self.focus {
            FocusTarget::Outside => {
                self.focus = FocusTarget::Container;
                true
            }
            FocusTarget::Container => match self.selected_handle() {
                Some(handle) => {
                    self.focus = FocusTarget::Item(handle);
                    true
                }
                None => {
                    self.focus = FocusTarget::Outside;
                    false
                }
            },
            FocusTarget::Item(_) => {
                self.focus = FocusTarget::Outside;
                false
            }
        }
    }

    /// Shift+Tab: item → container → out of the list.
    ///
    /// Returns `true` while focus stays inside the list.
    pub fn focus_prev_stop(&mut self) -> bool {
        match self.focus {
            FocusTarget::Item(_) => {
                self.focus = FocusTarget::Container;
                true
            }
            FocusTarget::Container | FocusTarget::Outside => {
                self.focus = FocusTarget::Outside;
                false
            }
        }
    }

    /// Handles a key press.
    ///
    /// Up, Down, Right and Enter are consumed while an item holds focus.
    /// Tab keys are consumed while focus stays inside the list. Anything
    /// else is left for the parent.
    pub fn handle_key(&mut self, msg: &KeyMsg) -> KeyOutcome {
        if self.focus == FocusTarget::Outside {
            return KeyOutcome::Ignored;
        }

        if self.keymap.next_stop.matches(msg) {
            return if self.focus_next_stop() {
                KeyOutcome::Handled(None)
            } else {
                KeyOutcome::Ignored
            };
        }
        if self.keymap.prev_stop.matches(msg) {
            return if self.focus_prev_stop() {
                KeyOutcome::Handled(None)
            } else {
                KeyOutcome::Ignored
            };
        }

        if !matches!(self.focus, FocusTarget::Item(_)) {
            return KeyOutcome::Ignored;
        }

        if self.keymap.focus_up.matches(msg) {
            self.focus_up();
            KeyOutcome::Handled(None)
        } else if self.keymap.focus_down.matches(msg) {
            self.focus_down();
            KeyOutcome::Handled(None)
        } else if self.keymap.commit.matches(msg) {
            KeyOutcome::Handled(self.commit())
        } else {
            KeyOutcome::Ignored
        }
    }

    /// Handles a mouse event; a left press on an item row commits it.
    ///
    /// The press must land inside the rendered list: at or below
    /// [`with_top`](Model::with_top), and between
    /// [`with_left`](Model::with_left) and the widest rendered line. Lists
    /// drawn side by side therefore only react to presses on themselves.
    pub fn handle_mouse(&mut self, event: &MouseEvent) -> Option<Cmd> {
        if event.kind != MouseEventKind::Down(MouseButton::Left)
            || event.row < self.top
            || event.column < self.left
        {
            return None;
        }
        let column = usize::from(event.column - self.left);
        if column >= lipgloss::width(&self.view()) {
            return None;
        }
        self.click_row(usize::from(event.row - self.top))
    }
}
