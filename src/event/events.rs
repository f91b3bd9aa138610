use crate::{
    audio::traits::PreviewId,
    controller::action::RequestToken,
    http::{
        error::ApiError,
        models::{GeneratedPlaylist, HealthStatus},
    },
};

/// Results of background work, delivered to the UI loop.
#[derive(Debug)]
pub enum Event {
    PlaylistGenerated(RequestToken, Result<GeneratedPlaylist, ApiError>),
    HealthChecked(Result<HealthStatus, ApiError>),
    PreviewStarted(PreviewId),
    PreviewEnded(PreviewId),
    PreviewFailed(PreviewId, String),
}
