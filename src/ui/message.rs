use crate::controller::action::UiAction;

/// Input after key mapping: either a controller action or local navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    Action(UiAction),
    FocusNext,
    FocusPrevious,
    CursorUp,
    CursorDown,
    /// Enter on the focused panel: select an option or preview a track.
    Confirm,
    PreviewSelected,
}
