use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::info;

use crate::{
    audio::preview::PreviewPlayer,
    config::AppConfig,
    controller::{
        Controller,
        action::{Effect, UiAction},
    },
    event::events::Event,
    http::{ApiService, PlaylistService},
    util::task::TaskManager,
};

use super::{
    layout::AppLayout,
    message::AppMessage,
    state::{Options, UiState},
    tui,
    util::handler::EventHandler,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub api: Arc<ApiService>,
    pub player: PreviewPlayer,
    pub controller: Controller,
    pub options: Options,
    pub state: UiState,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let api = Arc::new(ApiService::new(config)?);
        let player = PreviewPlayer::new(api.clone(), event_tx.clone(), config.volume);

        Ok(Self {
            event_rx,
            event_tx,
            api,
            player,
            controller: Controller::new(config.placeholder_image.clone()),
            options: Options::from_config(config),
            state: UiState::default(),
            task_manager: TaskManager::new(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        info!(
            "Using backend at {} (audio output: {})",
            self.api.base_url(),
            self.player.has_output()
        );
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        self.check_service_health();
        while !self.should_quit {
            if self.has_focus {
                tui.draw(|f| self.ui(f))?;
            }

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.player.shutdown();
        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(&self, frame: &mut Frame) {
        let area = frame.area();
        AppLayout::new(self).render(frame, area);
    }

    fn check_service_health(&mut self) {
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        self.task_manager.spawn("health", async move {
            let _ = tx.send(Event::HealthChecked(api.health().await));
        });
    }

    pub fn update(&mut self, msg: AppMessage) {
        let track_count = self.controller.playlist().map_or(0, |p| p.len());

        match msg {
            AppMessage::Action(action) => self.dispatch(action),
            AppMessage::FocusNext => self.state.focus = self.state.focus.next(),
            AppMessage::FocusPrevious => self.state.focus = self.state.focus.previous(),
            AppMessage::CursorUp => self.state.move_cursor(-1, &self.options, track_count),
            AppMessage::CursorDown => self.state.move_cursor(1, &self.options, track_count),
            AppMessage::Confirm => match self.state.focus.category() {
                Some(category) => {
                    let value = self
                        .options
                        .for_category(category)
                        .get(self.state.cursor(category))
                        .cloned();
                    if let Some(value) = value {
                        self.dispatch(UiAction::Select(category, value));
                    }
                }
                None => self.preview_selected(track_count),
            },
            AppMessage::PreviewSelected => self.preview_selected(track_count),
        }
    }

    fn preview_selected(&mut self, track_count: usize) {
        if track_count > 0 {
            self.dispatch(UiAction::PlayPreview(self.state.track_cursor));
        }
    }

    fn dispatch(&mut self, action: UiAction) {
        match self.controller.handle(action, &self.player) {
            Effect::None => {}
            Effect::Quit => self.should_quit = true,
            Effect::Generate(token, request) => {
                let api = self.api.clone();
                let tx = self.event_tx.clone();
                // Older requests keep running; their results are dropped by token.
                tokio::spawn(async move {
                    let result = api.generate(&request).await;
                    let _ = tx.send(Event::PlaylistGenerated(token, result));
                });
            }
        }
    }
}
