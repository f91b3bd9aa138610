use thiserror::Error;

pub const GENERIC_FAILURE: &str = "An error occurred while generating the playlist";
pub const SERVER_FAILURE: &str = "Failed to generate playlist";
pub const NO_TRACKS: &str = "No tracks found for your selection";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    #[error("Request rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No tracks found for your selection")]
    EmptyPlaylist,
}

impl ApiError {
    /// The text shown to the user when a generation fails.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            }
            | ApiError::Rejected {
                message: Some(message),
            } if !message.is_empty() => message.clone(),
            ApiError::Server { .. } => SERVER_FAILURE.to_string(),
            ApiError::Rejected { .. } | ApiError::EmptyPlaylist => NO_TRACKS.to_string(),
            ApiError::Transport(_) | ApiError::Decode(_) => GENERIC_FAILURE.to_string(),
        }
    }
}
