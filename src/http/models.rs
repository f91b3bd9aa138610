use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub mood: String,
    pub activity: String,
    pub time_of_day: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

impl Track {
    pub fn spotify_url(&self) -> Option<&str> {
        self.external_urls
            .as_ref()
            .and_then(|urls| urls.spotify.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PlaylistMetadata {
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub time_of_day: String,
    #[serde(default)]
    pub total_tracks: Option<usize>,
}

/// Raw body of a generate response, before success/emptiness is checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub playlist: Vec<Track>,
    #[serde(default)]
    pub metadata: PlaylistMetadata,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// A successful, non-empty generation result.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPlaylist {
    pub tracks: Vec<Track>,
    pub metadata: PlaylistMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub spotify_connected: bool,
    #[serde(default)]
    pub status: Option<String>,
}
