use crate::{
    controller::action::UiAction,
    ui::message::AppMessage,
};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Action(UiAction::Quit)),
            (KeyCode::Char('q'), _) => Some(AppMessage::Action(UiAction::Quit)),
            (KeyCode::Char('g'), _) => Some(AppMessage::Action(UiAction::Generate)),
            (KeyCode::Char('s'), _) => Some(AppMessage::Action(UiAction::StopPreview)),
            (KeyCode::Esc, _) => Some(AppMessage::Action(UiAction::DismissNotice)),
            (KeyCode::Char('p'), _) => Some(AppMessage::PreviewSelected),
            (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => Some(AppMessage::Confirm),
            (KeyCode::Tab, _) | (KeyCode::Right, _) | (KeyCode::Char('l'), _) => {
                Some(AppMessage::FocusNext)
            }
            (KeyCode::BackTab, _) | (KeyCode::Left, _) | (KeyCode::Char('h'), _) => {
                Some(AppMessage::FocusPrevious)
            }
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => Some(AppMessage::CursorUp),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => Some(AppMessage::CursorDown),
            _ => None,
        }
    }
}
