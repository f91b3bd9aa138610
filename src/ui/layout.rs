use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    controller::{Controller, selection::Category, view::ViewState},
    ui::{
        app::App,
        components::{Banner, OptionGroup, PlaylistPanel, Spinner, TrackDetails},
        state::{Options, Panel, UiState},
    },
    util::colors,
};

const DETAILS_WIDTH: u16 = 44;
const KEY_HINTS: &str =
    "←/→ focus  ↑/↓ move  enter select  g generate  p preview  s stop  esc dismiss  q quit";

pub struct AppLayout<'a> {
    pub controller: &'a Controller,
    pub options: &'a Options,
    pub state: &'a UiState,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a App) -> Self {
        Self {
            controller: &app.controller,
            options: &app.options,
            state: &app.state,
        }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let longest = Category::ALL
            .iter()
            .map(|c| self.options.for_category(*c).len())
            .max()
            .unwrap_or(0);
        let selector_height = u16::try_from(longest).unwrap_or(u16::MAX).saturating_add(2);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(selector_height),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_selectors(f, chunks[0]);
        self.render_generate(f, chunks[1]);
        self.render_status(f, chunks[2]);
        if let Some(notice) = self.controller.notice() {
            f.render_widget(Banner::notice(notice), chunks[3]);
        }
        self.render_playlist(f, chunks[4]);

        f.render_widget(
            Paragraph::new(KEY_HINTS)
                .style(Style::default().fg(colors::NEUTRAL))
                .alignment(Alignment::Center),
            chunks[5],
        );
    }

    fn render_selectors(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(area);

        for (category, column) in Category::ALL.into_iter().zip(columns.iter()) {
            let group = OptionGroup::new(category.label(), self.options.for_category(category))
                .cursor(self.state.cursor(category))
                .chosen(self.controller.selection().get(category))
                .focused(self.state.focus == Panel::from_category(category));
            f.render_widget(group, *column);
        }
    }

    fn render_generate(&self, f: &mut Frame, area: Rect) {
        let enabled = self.controller.can_generate() && !self.controller.is_loading();
        let (text, style) = if self.controller.is_loading() {
            ("  Generating...  ", Style::default().fg(colors::NEUTRAL))
        } else if enabled {
            (
                "  Generate playlist (g)  ",
                Style::default()
                    .fg(colors::BACKGROUND)
                    .bg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                "  Pick a mood, activity and time of day  ",
                Style::default().fg(colors::NEUTRAL),
            )
        };

        let button = Paragraph::new(Line::from(Span::styled(text, style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(Style::default().fg(if enabled {
                        colors::PRIMARY
                    } else {
                        colors::NEUTRAL
                    })),
            );
        f.render_widget(button, area);
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        if let Some(message) = self.controller.view().error() {
            f.render_widget(Banner::error(message), area);
        } else if self.controller.is_loading() {
            f.render_widget(
                Spinner::default()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Generating your playlist..."),
                area,
            );
        }
    }

    fn render_playlist(&self, f: &mut Frame, area: Rect) {
        let ViewState::Showing(playlist) = self.controller.view() else {
            return;
        };
        if playlist.is_empty() {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(DETAILS_WIDTH)])
            .split(area);

        let cursor = self
            .state
            .track_cursor
            .min(playlist.len().saturating_sub(1));
        let previewing = self.controller.active_preview().and_then(|active| {
            playlist
                .entries
                .iter()
                .position(|e| e.preview_url.as_deref() == Some(active.url.as_str()))
        });

        f.render_widget(
            PlaylistPanel::new(playlist, cursor)
                .focused(self.state.focus == Panel::Playlist)
                .previewing(previewing),
            chunks[0],
        );

        if let Some(entry) = playlist.entries.get(cursor) {
            f.render_widget(TrackDetails::new(entry), chunks[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        config::AppConfig,
        controller::{SERVICE_WARNING, view::Notice},
        http::{error::ApiError, models::HealthStatus},
    };

    fn draw(controller: &Controller) -> String {
        let options = Options::from_config(&AppConfig::default());
        let state = UiState::default();
        let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                AppLayout {
                    controller,
                    options: &options,
                    state: &state,
                }
                .render(f, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn selected() -> Controller {
        let mut controller = Controller::new("ph");
        controller.select_category(Category::Mood, "happy");
        controller.select_category(Category::Activity, "working");
        controller.select_category(Category::TimeOfDay, "morning");
        controller
    }

    fn disconnected() -> HealthStatus {
        HealthStatus {
            spotify_connected: false,
            status: None,
        }
    }

    #[test]
    fn loading_indicator_stays_visible_next_to_notice() {
        let mut controller = selected();
        controller.start_generation();
        controller.on_health_checked(Ok(disconnected()));
        assert_eq!(controller.notice(), Some(&Notice::warning(SERVICE_WARNING)));

        let screen = draw(&controller);

        assert!(screen.contains("Generating your playlist"));
        assert!(screen.contains("Spotify connection issue"));
        assert!(screen.contains("Generating..."));
        assert!(!screen.contains("Pick a mood"));
    }

    #[test]
    fn error_stays_visible_next_to_notice() {
        let mut controller = selected();
        let (token, _) = controller.start_generation();
        controller.complete_generation(
            token,
            Err(ApiError::Server {
                status: 400,
                message: Some("bad request".into()),
            }),
        );
        controller.on_health_checked(Ok(disconnected()));
        assert_eq!(controller.view(), &ViewState::Error("bad request".into()));

        let screen = draw(&controller);

        assert!(screen.contains("bad request"));
        assert!(screen.contains("Spotify connection issue"));
        assert!(screen.contains("Generate playlist (g)"));
    }

    #[test]
    fn incomplete_selection_asks_for_choices() {
        let screen = draw(&Controller::new("ph"));
        assert!(screen.contains("Pick a mood, activity and time of day"));
        assert!(!screen.contains("Generating"));
    }
}
