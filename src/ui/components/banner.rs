use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::{
    controller::view::{Notice, NoticeKind},
    util::colors,
};

/// A single-message status line: generation errors and notices.
pub struct Banner<'a> {
    message: &'a str,
    color: ratatui::style::Color,
    hint: Option<&'a str>,
}

impl<'a> Banner<'a> {
    pub fn error(message: &'a str) -> Self {
        Self {
            message,
            color: colors::ERROR,
            hint: None,
        }
    }

    pub fn notice(notice: &'a Notice) -> Self {
        let color = match notice.kind {
            NoticeKind::Warning => colors::WARNING,
            NoticeKind::Alert => colors::ERROR,
        };
        Self {
            message: &notice.message,
            color,
            hint: Some("esc to dismiss"),
        }
    }
}

impl Widget for Banner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            self.message,
            Style::default().fg(self.color).add_modifier(Modifier::BOLD),
        )];
        if let Some(hint) = self.hint {
            spans.push(Span::styled(
                format!("  ({})", hint),
                Style::default().fg(colors::NEUTRAL),
            ));
        }

        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
