//! Default presentation for the accessible list.
//!
//! Draws a bordered container, a bold title followed by a blank line,
//! uppercase section headings, and one line per item. Item text is the
//! name from the list's naming projection, optionally prefixed with a glyph
//! and cut to the available width.

use super::style::{ListStyles, ELLIPSIS};
use super::types::{
    ContainerProps, ItemProps, ListDelegate, RowLayout, SectionTitleProps, TitleProps,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Delegate that renders any item by its name using [`ListStyles`].
#[derive(Debug, Clone, Default)]
pub struct DefaultDelegate {
    /// Visual styles.
    pub styles: ListStyles,
    /// Text drawn before each item name, e.g. `"#"`.
    pub glyph: Option<String>,
}

impl DefaultDelegate {
    /// Creates a delegate with default styles and no glyph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefixes each item with `glyph` and a space.
    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = Some(glyph.into());
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: ListStyles) -> Self {
        self.styles = styles;
        self
    }
}

impl<T> ListDelegate<T> for DefaultDelegate {
    fn render_container(&self, props: &ContainerProps<'_>, children: &str) -> String {
        let style = if props.focused {
            &self.styles.container_focused
        } else {
            &self.styles.container
        };
        style.clone().render(children)
    }

    fn render_title(&self, props: &TitleProps<'_>) -> String {
        format!("{}\n", self.styles.title.clone().render(props.text))
    }

    fn render_section_title(&self, props: &SectionTitleProps<'_>) -> String {
        self.styles
            .section_title
            .clone()
            .render(&props.text.to_uppercase())
    }

    fn render_item(&self, props: &ItemProps<'_, T>) -> String {
        let text = match &self.glyph {
            Some(glyph) => format!("{} {}", glyph, props.name),
            None => props.name.to_string(),
        };
        // Two cells of padding or focus bar precede every item.
        let text = if props.width > 2 {
            truncate(&text, props.width - 2)
        } else {
            text
        };

        let s = &self.styles;
        let style = match (props.focused, props.selected) {
            (true, true) => s.item_focused.clone().inherit(s.item_selected.clone()),
            (true, false) => s.item_focused.clone().inherit(s.item.clone()),
            (false, true) => s.item_selected.clone(),
            (false, false) => s.item.clone(),
        };
        style.render(&text)
    }

    fn layout(&self) -> RowLayout {
        RowLayout {
            top_inset: 1,
            title_height: 2,
            section_title_height: 1,
            item_height: 1,
            section_gap: 1,
        }
    }
}

/// Cuts `text` to at most `width` cells, ending with an ellipsis when cut.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(UnicodeWidthStr::width(ELLIPSIS));
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("general", 10), "general");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("announcements", 6), "annou…");
        assert_eq!(UnicodeWidthStr::width(truncate("announcements", 6).as_str()), 6);
    }

    #[test]
    fn test_truncate_respects_wide_chars() {
        let out = truncate("日本語チャンネル", 5);
        assert!(UnicodeWidthStr::width(out.as_str()) <= 5);
        assert!(out.ends_with(ELLIPSIS));
    }
}
