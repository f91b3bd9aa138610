use crate::{controller::selection::Category, http::models::GenerateRequest};

/// Rendering-agnostic user intents. Front ends translate their own input
/// events into these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Select(Category, String),
    Generate,
    /// 0-based position in the shown playlist.
    PlayPreview(usize),
    StopPreview,
    DismissNotice,
    Quit,
}

/// Work the controller asks its host to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Generate(RequestToken, GenerateRequest),
    Quit,
}

/// Monotonic id attached to each generate request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(pub u64);
