//! Styles for the default list presentation.
//!
//! Colors follow a gray palette that flips between light and dark terminals
//! through `AdaptiveColor`. The container border brightens while the list
//! itself holds focus; the focused item gets a left bar, the selected item
//! is bold on a tinted background.

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Glyph drawn before channel names.
pub const CHANNEL_GLYPH: &str = "#";

/// Truncation marker for names wider than the list.
pub const ELLIPSIS: &str = "…";

/// Styles used by [`DefaultDelegate`](super::DefaultDelegate).
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// Container while focus is elsewhere.
    pub container: Style,
    /// Container while it holds focus itself.
    pub container_focused: Style,
    /// List title.
    pub title: Style,
    /// Section heading.
    pub section_title: Style,
    /// Plain item.
    pub item: Style,
    /// The owner's selected item.
    pub item_selected: Style,
    /// Item holding keyboard focus.
    pub item_focused: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        let text = AdaptiveColor {
            Light: "#1F2937",
            Dark: "#F9FAFB",
        };
        let muted = AdaptiveColor {
            Light: "#4B5563",
            Dark: "#D1D5DB",
        };
        let selected_bg = AdaptiveColor {
            Light: "#D1D5DB",
            Dark: "#6B7280",
        };

        let container = Style::new()
            .border_style(lipgloss::rounded_border())
            .border_foreground(Color::from("#374151"))
            .padding(0, 1, 0, 1);
        let container_focused = container
            .clone()
            .border_foreground(Color::from("#F9FAFB"));
        let item = Style::new().foreground(text).padding(0, 0, 0, 2);

        Self {
            container,
            container_focused,
            title: Style::new().foreground(muted.clone()).bold(true),
            section_title: Style::new()
                .foreground(muted)
                .padding(0, 0, 0, 1),
            item_selected: item.clone().background(selected_bg).bold(true),
            // Unset border sides render as enabled, so all four are spelled
            // out to keep the focused item on a single line.
            item_focused: Style::new()
                .border_style(lipgloss::normal_border())
                .border_top(false)
                .border_right(false)
                .border_bottom(false)
                .border_left(true)
                .border_left_foreground(Color::from("#F9FAFB"))
                .padding(0, 0, 0, 1),
            item,
        }
    }
}

impl ListStyles {
    /// Inverted palette: light text on a dark rail in light mode and the
    /// reverse in dark mode. Used for the server rail so it reads apart from
    /// the channel list beside it.
    pub fn inverted() -> Self {
        let text = AdaptiveColor {
            Light: "#F9FAFB",
            Dark: "#1F2937",
        };
        let heading = AdaptiveColor {
            Light: "#D1D5DB",
            Dark: "#4B5563",
        };
        let selected_bg = AdaptiveColor {
            Light: "#6B7280",
            Dark: "#D1D5DB",
        };

        let item = Style::new().foreground(text).padding(0, 0, 0, 2);
        let base = Self::default();
        Self {
            title: Style::new().foreground(heading.clone()).bold(true),
            section_title: Style::new().foreground(heading).bold(true),
            item_selected: item.clone().background(selected_bg).bold(true),
            item,
            ..base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_item_is_one_line() {
        let styles = ListStyles::default();
        let focused = styles.item_focused.clone().render("general");
        assert_eq!(focused.lines().count(), 1);
        let plain = strip_ansi_escapes::strip_str(&focused);
        assert!(plain.starts_with('│'));
        assert!(plain.contains("│ general"));

        let both = styles
            .item_focused
            .clone()
            .inherit(styles.item_selected.clone())
            .render("general");
        assert_eq!(both.lines().count(), 1);
    }
}
