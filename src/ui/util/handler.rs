use tracing::debug;

use crate::{
    controller::Controller,
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        state::UiState,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        tokio::select! {
            Some(evt) = tui.next() => Self::handle_event(app, evt, tui)?,
            Ok(evt) = app.event_rx.recv_async() => Self::handle_action(app, evt),
            else => app.should_quit = true,
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
        }

        Ok(())
    }

    pub fn handle_event(app: &mut App, evt: TerminalEvent, tui: &mut Tui) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => {
                if let Some(msg) = InputHandler::handle_key(key) {
                    app.update(msg);
                }
            }
            TerminalEvent::Resize(..) | TerminalEvent::Tick => {}
        }

        Ok(())
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        Self::apply(&mut app.controller, &mut app.state, evt);
    }

    /// Routes a background result into the controller; focus moves to the
    /// playlist only when a fresh result was applied.
    pub fn apply(controller: &mut Controller, state: &mut UiState, evt: Event) {
        match evt {
            Event::PlaylistGenerated(token, result) => {
                let applied = controller.complete_generation(token, result);
                if applied && controller.playlist().is_some() {
                    state.show_playlist();
                }
            }
            Event::HealthChecked(result) => controller.on_health_checked(result),
            Event::PreviewStarted(id) => debug!("Preview {} started", id),
            Event::PreviewEnded(id) => controller.on_preview_ended(id),
            Event::PreviewFailed(id, reason) => controller.on_preview_failed(id, &reason),
        }
    }
}
