use crate::{
    controller::format::{escape_text, format_duration, playlist_title},
    http::models::{PlaylistMetadata, Track},
};

#[derive(Debug, Clone, PartialEq)]
pub struct TrackEntry {
    /// 1-based position in the playlist.
    pub index: usize,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub duration: String,
    pub image: String,
    pub preview_url: Option<String>,
    pub spotify_url: Option<String>,
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistView {
    pub title: String,
    pub entries: Vec<TrackEntry>,
    pub uri: Option<String>,
}

impl PlaylistView {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn render_playlist(
    tracks: &[Track],
    metadata: &PlaylistMetadata,
    placeholder_image: &str,
) -> PlaylistView {
    let entries = tracks
        .iter()
        .enumerate()
        .map(|(i, track)| TrackEntry {
            index: i + 1,
            name: escape_text(&track.name),
            artist: escape_text(&track.artist),
            album: escape_text(&track.album),
            duration: format_duration(track.duration_ms),
            image: track
                .image
                .as_deref()
                .filter(|url| !url.is_empty())
                .map_or_else(|| placeholder_image.to_string(), escape_text),
            preview_url: track.preview_url.clone().filter(|url| !url.is_empty()),
            spotify_url: track.spotify_url().map(escape_text),
            popularity: track.popularity,
        })
        .collect();

    PlaylistView {
        title: escape_text(&playlist_title(
            &metadata.mood,
            &metadata.activity,
            &metadata.time_of_day,
        )),
        entries,
        uri: playlist_uri(tracks).as_deref().map(escape_text),
    }
}

/// Joins track ids into a single `spotify:tracks:` URI.
pub fn playlist_uri(tracks: &[Track]) -> Option<String> {
    let ids: Vec<&str> = tracks
        .iter()
        .filter_map(|t| t.uri.as_deref())
        .filter_map(|uri| uri.rsplit(':').next())
        .filter(|id| !id.is_empty())
        .collect();

    if ids.is_empty() {
        None
    } else {
        Some(format!("spotify:tracks:{}", ids.join(",")))
    }
}
