use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, List, ListItem, Widget},
};

use crate::{controller::format::capitalize, util::colors};

/// One category's choices. The cursor is drawn only while focused; the
/// chosen value is always marked.
pub struct OptionGroup<'a> {
    title: &'a str,
    items: &'a [String],
    cursor: usize,
    chosen: Option<&'a str>,
    focused: bool,
}

impl<'a> OptionGroup<'a> {
    pub fn new(title: &'a str, items: &'a [String]) -> Self {
        Self {
            title,
            items,
            cursor: 0,
            chosen: None,
            focused: false,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn chosen(mut self, chosen: Option<&'a str>) -> Self {
        self.chosen = chosen;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for OptionGroup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            colors::PRIMARY
        } else {
            colors::NEUTRAL
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", self.title));

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let is_chosen = self.chosen == Some(item.as_str());
                let is_cursor = self.focused && i == self.cursor;

                let marker = if is_chosen { "●" } else { "○" };
                let pointer = if is_cursor { ">" } else { " " };

                let mut style = if is_chosen {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::ACCENT)
                };
                if is_cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                ListItem::new(format!("{} {} {}", pointer, marker, capitalize(item))).style(style)
            })
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}
