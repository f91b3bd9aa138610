use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::{
    controller::render::{PlaylistView, TrackEntry},
    ui::util::preview_icon,
    util::colors,
};

pub struct PlaylistPanel<'a> {
    playlist: &'a PlaylistView,
    cursor: usize,
    focused: bool,
    /// 0-based index of the entry whose preview is active.
    previewing: Option<usize>,
}

impl<'a> PlaylistPanel<'a> {
    pub fn new(playlist: &'a PlaylistView, cursor: usize) -> Self {
        Self {
            playlist,
            cursor,
            focused: false,
            previewing: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn previewing(mut self, previewing: Option<usize>) -> Self {
        self.previewing = previewing;
        self
    }

    fn entry_line(&self, i: usize, entry: &'a TrackEntry) -> Line<'a> {
        let marker = match (&entry.preview_url, self.previewing == Some(i)) {
            (Some(_), true) => preview_icon(true),
            (Some(_), false) => preview_icon(false),
            (None, _) => " ",
        };

        Line::from(vec![
            Span::styled(
                format!("{:>3}. ", entry.index),
                Style::default().fg(colors::NEUTRAL),
            ),
            Span::styled(
                entry.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(entry.artist.as_str(), Style::default().fg(colors::ACCENT)),
            Span::styled(
                format!("  {}", entry.duration),
                Style::default().fg(colors::NEUTRAL),
            ),
            Span::styled(format!(" {}", marker), Style::default().fg(colors::PRIMARY)),
        ])
    }
}

impl Widget for PlaylistPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            colors::PRIMARY
        } else {
            colors::NEUTRAL
        };
        let footer = match &self.playlist.uri {
            Some(uri) => format!(" {} tracks · {} ", self.playlist.len(), uri),
            None => format!(" {} tracks ", self.playlist.len()),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", self.playlist.title))
            .title_bottom(footer);

        let items: Vec<ListItem> = self
            .playlist
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| ListItem::new(self.entry_line(i, entry)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(if self.focused { "> " } else { "  " });

        let mut state = ListState::default().with_selected(Some(self.cursor));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

/// Album, artwork and links for the entry under the cursor.
pub struct TrackDetails<'a> {
    entry: &'a TrackEntry,
}

impl<'a> TrackDetails<'a> {
    pub fn new(entry: &'a TrackEntry) -> Self {
        Self { entry }
    }
}

impl Widget for TrackDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label = Style::default().fg(colors::NEUTRAL);
        let value = Style::default().fg(colors::ACCENT);
        let row = |name: &'static str, text: String| {
            Line::from(vec![Span::styled(format!("{:<9}", name), label), Span::styled(text, value)])
        };

        let mut lines = vec![
            Line::styled(
                self.entry.name.clone(),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            row("Artist", self.entry.artist.clone()),
            row("Album", self.entry.album.clone()),
            row("Length", self.entry.duration.clone()),
            row("Artwork", self.entry.image.clone()),
        ];
        if let Some(popularity) = self.entry.popularity {
            lines.push(row("Rating", format!("{}/100", popularity)));
        }
        if let Some(url) = &self.entry.spotify_url {
            lines.push(row("Open", url.clone()));
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            if self.entry.preview_url.is_some() {
                "p / enter: play preview   s: stop"
            } else {
                "No preview for this track"
            },
            label,
        ));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL))
            .title(" Details ");

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
