use crate::controller::render::PlaylistView;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Showing(PlaylistView),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn playlist(&self) -> Option<&PlaylistView> {
        match self {
            ViewState::Showing(playlist) => Some(playlist),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Advisory, e.g. the backend reports a missing dependency.
    Warning,
    /// Needs acknowledging, e.g. a preview could not be played.
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    pub fn alert(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Alert,
            message: message.into(),
        }
    }
}
