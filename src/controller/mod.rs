pub mod action;
pub mod format;
pub mod preview;
pub mod render;
pub mod selection;
pub mod view;

use tracing::{debug, error, info, warn};

use crate::{
    audio::traits::{PreviewId, PreviewOutput},
    http::{
        PlaylistService,
        error::ApiError,
        models::{GenerateRequest, GeneratedPlaylist, HealthStatus},
    },
};

use self::{
    action::{Effect, RequestToken, UiAction},
    format::escape_text,
    preview::{ActivePreview, PreviewSlot},
    render::{PlaylistView, render_playlist},
    selection::{Category, Selection},
    view::{Notice, ViewState},
};

pub const PREVIEW_UNAVAILABLE: &str = "Preview not available for this track";
pub const PREVIEW_FAILED: &str = "Could not play preview";
pub const SERVICE_WARNING: &str =
    "⚠️ Spotify connection issue. Please check your API credentials.";

/// Owns the selection, the view state, the notice banner and the preview
/// slot for one session.
#[derive(Debug)]
pub struct Controller {
    selection: Selection,
    view: ViewState,
    notice: Option<Notice>,
    preview: PreviewSlot,
    latest_request: RequestToken,
    placeholder_image: String,
}

impl Controller {
    pub fn new(placeholder_image: impl Into<String>) -> Self {
        Self {
            selection: Selection::default(),
            view: ViewState::Idle,
            notice: None,
            preview: PreviewSlot::default(),
            latest_request: RequestToken::default(),
            placeholder_image: placeholder_image.into(),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn playlist(&self) -> Option<&PlaylistView> {
        self.view.playlist()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn active_preview(&self) -> Option<&ActivePreview> {
        self.preview.current()
    }

    pub fn is_loading(&self) -> bool {
        self.view.is_loading()
    }

    /// Whether the generate trigger is enabled.
    pub fn can_generate(&self) -> bool {
        self.selection.is_complete()
    }

    pub fn handle(&mut self, action: UiAction, output: &dyn PreviewOutput) -> Effect {
        match action {
            UiAction::Select(category, value) => {
                self.select_category(category, value);
                Effect::None
            }
            UiAction::Generate if self.can_generate() => {
                let (token, request) = self.start_generation();
                Effect::Generate(token, request)
            }
            UiAction::Generate => Effect::None,
            UiAction::PlayPreview(index) => {
                self.play_preview(index, output);
                Effect::None
            }
            UiAction::StopPreview => {
                self.stop_preview(output);
                Effect::None
            }
            UiAction::DismissNotice => {
                self.dismiss_notice();
                Effect::None
            }
            UiAction::Quit => {
                self.stop_preview(output);
                Effect::Quit
            }
        }
    }

    pub fn select_category(&mut self, category: Category, value: impl Into<String>) {
        let value = value.into();
        debug!("{} selected: {}", category, value);
        self.selection.set(category, value);
    }

    /// Enters the loading state and hands out the request to send.
    pub fn start_generation(&mut self) -> (RequestToken, GenerateRequest) {
        self.latest_request = RequestToken(self.latest_request.0 + 1);
        self.view = ViewState::Loading;
        self.notice = None;

        (self.latest_request, self.selection.to_request())
    }

    /// Applies a generate result. Results for anything but the latest request
    /// are dropped; returns whether this one was applied.
    pub fn complete_generation(
        &mut self,
        token: RequestToken,
        result: Result<GeneratedPlaylist, ApiError>,
    ) -> bool {
        if token != self.latest_request {
            debug!(
                "Discarding stale playlist response {:?} (latest {:?})",
                token, self.latest_request
            );
            return false;
        }

        self.view = match result {
            Ok(playlist) if playlist.tracks.is_empty() => {
                ViewState::Error(ApiError::EmptyPlaylist.user_message())
            }
            Ok(playlist) => {
                info!("Generated playlist with {} tracks", playlist.tracks.len());
                ViewState::Showing(self.render_playlist(&playlist))
            }
            Err(e) => {
                error!("Playlist generation failed: {}", e);
                ViewState::Error(escape_text(&e.user_message()))
            }
        };
        true
    }

    pub async fn generate_playlist(&mut self, service: &dyn PlaylistService) {
        let (token, request) = self.start_generation();
        let result = service.generate(&request).await;
        self.complete_generation(token, result);
    }

    pub fn render_playlist(&self, playlist: &GeneratedPlaylist) -> PlaylistView {
        render_playlist(&playlist.tracks, &playlist.metadata, &self.placeholder_image)
    }

    /// Plays the preview of the track at `index` in the shown playlist.
    pub fn play_preview(&mut self, index: usize, output: &dyn PreviewOutput) -> Option<PreviewId> {
        let url = self
            .playlist()
            .and_then(|p| p.entries.get(index))
            .and_then(|entry| entry.preview_url.clone());

        match url {
            Some(url) => {
                let id = self.preview.play(&url, Some(index), output);
                debug!("Preview {} requested for track {}: {}", id, index + 1, url);
                Some(id)
            }
            None => {
                self.notice = Some(Notice::alert(PREVIEW_UNAVAILABLE));
                None
            }
        }
    }

    pub fn play_preview_url(&mut self, url: &str, output: &dyn PreviewOutput) -> PreviewId {
        let id = self.preview.play(url, None, output);
        debug!("Preview {} requested: {}", id, url);
        id
    }

    pub fn stop_preview(&mut self, output: &dyn PreviewOutput) {
        self.preview.stop(output);
    }

    pub fn on_preview_ended(&mut self, id: PreviewId) {
        if self.preview.release(id) {
            debug!("Preview {} finished", id);
        }
    }

    pub fn on_preview_failed(&mut self, id: PreviewId, reason: &str) {
        if self.preview.release(id) {
            error!("Preview playback error: {}", reason);
            self.notice = Some(Notice::alert(PREVIEW_FAILED));
        } else {
            debug!("Ignoring failure of replaced preview {}: {}", id, reason);
        }
    }

    pub fn on_health_checked(&mut self, result: Result<HealthStatus, ApiError>) {
        match result {
            Ok(status) if status.spotify_connected => {
                info!("Backend healthy");
            }
            Ok(status) => {
                warn!("Backend reports music catalog disconnected: {:?}", status.status);
                self.notice = Some(Notice::warning(SERVICE_WARNING));
            }
            Err(e) => warn!("Health check failed: {}", e),
        }
    }

    pub async fn check_service_health(&mut self, service: &dyn PlaylistService) {
        let result = service.health().await;
        self.on_health_checked(result);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::preview::tests::{OutputCall, RecordingOutput};
    use super::*;
    use crate::http::models::{PlaylistMetadata, Track};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeService {
        generate: Mutex<Option<Result<GeneratedPlaylist, ApiError>>>,
        health: Mutex<Option<Result<HealthStatus, ApiError>>>,
        requests: Mutex<Vec<GenerateRequest>>,
    }

    impl FakeService {
        fn generating(result: Result<GeneratedPlaylist, ApiError>) -> Self {
            Self {
                generate: Mutex::new(Some(result)),
                health: Mutex::new(None),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn healthy(result: Result<HealthStatus, ApiError>) -> Self {
            Self {
                generate: Mutex::new(None),
                health: Mutex::new(Some(result)),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PlaylistService for FakeService {
        async fn generate(
            &self,
            request: &GenerateRequest,
        ) -> Result<GeneratedPlaylist, ApiError> {
            self.requests.lock().unwrap().push(request.clone());
            self.generate
                .lock()
                .unwrap()
                .take()
                .expect("unexpected generate call")
        }

        async fn health(&self) -> Result<HealthStatus, ApiError> {
            self.health
                .lock()
                .unwrap()
                .take()
                .expect("unexpected health call")
        }
    }

    fn track(name: &str, preview: Option<&str>) -> Track {
        Track {
            name: name.to_string(),
            artist: format!("{name} artist"),
            album: format!("{name} album"),
            duration_ms: 200_000,
            preview_url: preview.map(str::to_string),
            ..Default::default()
        }
    }

    fn playlist(tracks: Vec<Track>) -> GeneratedPlaylist {
        GeneratedPlaylist {
            tracks,
            metadata: PlaylistMetadata {
                mood: "happy".into(),
                activity: "working".into(),
                time_of_day: "morning".into(),
                total_tracks: None,
            },
        }
    }

    fn selected() -> Controller {
        let mut controller = Controller::new("placeholder");
        controller.select_category(Category::Mood, "happy");
        controller.select_category(Category::Activity, "working");
        controller.select_category(Category::TimeOfDay, "morning");
        controller
    }

    fn showing(tracks: Vec<Track>) -> Controller {
        let mut controller = selected();
        let (token, _) = controller.start_generation();
        assert!(controller.complete_generation(token, Ok(playlist(tracks))));
        controller
    }

    #[test]
    fn generate_enabled_only_with_full_selection() {
        let output = RecordingOutput::default();
        for missing in Category::ALL {
            let mut controller = Controller::new("ph");
            for category in Category::ALL.into_iter().filter(|c| *c != missing) {
                controller.select_category(category, "x");
            }
            assert!(!controller.can_generate());
            assert_eq!(controller.handle(UiAction::Generate, &output), Effect::None);
            assert_eq!(controller.view(), &ViewState::Idle);
        }

        let mut controller = selected();
        assert!(controller.can_generate());
        let effect = controller.handle(UiAction::Generate, &output);
        assert!(matches!(effect, Effect::Generate(RequestToken(1), _)));
        assert!(controller.is_loading());
    }

    #[test]
    fn reselecting_keeps_other_categories() {
        let mut controller = selected();
        controller.select_category(Category::Mood, "calm");
        assert_eq!(controller.selection().get(Category::Mood), Some("calm"));
        assert_eq!(controller.selection().get(Category::Activity), Some("working"));
        assert_eq!(controller.selection().get(Category::TimeOfDay), Some("morning"));
    }

    #[tokio::test]
    async fn end_to_end_two_tracks_are_rendered() {
        let service = FakeService::generating(Ok(playlist(vec![
            track("Sunrise", Some("https://p/1")),
            track("Coffee", None),
        ])));
        let mut controller = selected();

        controller.generate_playlist(&service).await;

        assert_eq!(
            service.requests.lock().unwrap().as_slice(),
            &[GenerateRequest {
                mood: "happy".into(),
                activity: "working".into(),
                time_of_day: "morning".into(),
            }]
        );
        let view = controller.playlist().expect("playlist shown");
        assert_eq!(view.title, "Happy Working • Morning");
        assert_eq!(view.len(), 2);
        assert_eq!(view.entries[0].index, 1);
        assert_eq!(view.entries[1].index, 2);
        assert_eq!(view.entries[1].image, "placeholder");
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn empty_playlist_ends_in_error() {
        let service = FakeService::generating(Ok(playlist(Vec::new())));
        let mut controller = selected();

        controller.generate_playlist(&service).await;

        assert_eq!(
            controller.view(),
            &ViewState::Error("No tracks found for your selection".into())
        );
        assert!(controller.playlist().is_none());
    }

    #[tokio::test]
    async fn server_message_is_shown_verbatim() {
        let service = FakeService::generating(Err(ApiError::Server {
            status: 400,
            message: Some("bad request".into()),
        }));
        let mut controller = showing(vec![track("old", None)]);

        controller.generate_playlist(&service).await;

        assert_eq!(controller.view().error(), Some("bad request"));
        assert!(controller.playlist().is_none());
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn rejected_response_is_shown_verbatim() {
        let service = FakeService::generating(Err(ApiError::Rejected {
            message: Some("bad request".into()),
        }));
        let mut controller = selected();

        controller.generate_playlist(&service).await;

        assert_eq!(controller.view().error(), Some("bad request"));
    }

    #[tokio::test]
    async fn server_message_control_characters_are_escaped() {
        let service = FakeService::generating(Err(ApiError::Server {
            status: 500,
            message: Some("boom\u{1b}[2J".into()),
        }));
        let mut controller = selected();

        controller.generate_playlist(&service).await;

        assert_eq!(controller.view().error(), Some("boom\\u{1b}[2J"));
    }

    #[test]
    fn starting_generation_clears_previous_error_and_playlist() {
        let mut controller = selected();
        let (token, _) = controller.start_generation();
        controller.complete_generation(token, Err(ApiError::EmptyPlaylist));
        assert!(controller.view().error().is_some());

        controller.on_health_checked(Ok(HealthStatus::default()));
        assert!(controller.notice().is_some());

        controller.start_generation();
        assert_eq!(controller.view(), &ViewState::Loading);
        assert!(controller.notice().is_none());
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut controller = selected();
        let (first, _) = controller.start_generation();
        let (second, _) = controller.start_generation();
        assert!(first < second);

        assert!(!controller.complete_generation(first, Ok(playlist(vec![track("a", None)]))));
        assert!(controller.is_loading());

        assert!(controller.complete_generation(second, Err(ApiError::EmptyPlaylist)));
        assert!(controller.view().error().is_some());
    }

    #[test]
    fn previews_are_mutually_exclusive() {
        let output = RecordingOutput::default();
        let mut controller = showing(vec![
            track("a", Some("https://p/a")),
            track("b", Some("https://p/b")),
        ]);

        let first = controller.play_preview(0, &output).unwrap();
        let second = controller.play_preview(1, &output).unwrap();

        assert_eq!(
            output.calls(),
            vec![
                OutputCall::Start(first, "https://p/a".into()),
                OutputCall::Stop(first),
                OutputCall::Start(second, "https://p/b".into()),
            ]
        );
        assert_eq!(controller.active_preview().map(|p| p.id), Some(second));
    }

    #[test]
    fn active_preview_remembers_row_when_urls_repeat() {
        let output = RecordingOutput::default();
        let mut controller = showing(vec![
            track("a", Some("https://p/same")),
            track("b", Some("https://p/same")),
        ]);

        controller.play_preview(1, &output).unwrap();

        assert_eq!(controller.active_preview().and_then(|p| p.index), Some(1));

        controller.play_preview_url("https://p/same", &output);
        assert_eq!(controller.active_preview().and_then(|p| p.index), None);
    }

    #[test]
    fn natural_end_clears_slot_so_nothing_is_stopped_later() {
        let output = RecordingOutput::default();
        let mut controller = showing(vec![track("a", Some("https://p/a"))]);

        let id = controller.play_preview(0, &output).unwrap();
        controller.on_preview_ended(id);
        assert!(controller.active_preview().is_none());

        controller.stop_preview(&output);
        assert_eq!(output.calls(), vec![OutputCall::Start(id, "https://p/a".into())]);
    }

    #[test]
    fn preview_failure_raises_notice_and_keeps_playlist() {
        let output = RecordingOutput::default();
        let mut controller = showing(vec![track("a", Some("https://p/a"))]);

        let id = controller.play_preview(0, &output).unwrap();
        controller.on_preview_failed(id, "unsupported format");

        assert_eq!(controller.notice(), Some(&Notice::alert(PREVIEW_FAILED)));
        assert!(controller.active_preview().is_none());
        assert_eq!(controller.playlist().map(PlaylistView::len), Some(1));
    }

    #[test]
    fn track_without_preview_raises_notice() {
        let output = RecordingOutput::default();
        let mut controller = showing(vec![track("a", None)]);

        assert_eq!(controller.play_preview(0, &output), None);
        assert_eq!(controller.notice(), Some(&Notice::alert(PREVIEW_UNAVAILABLE)));
        assert!(output.calls().is_empty());

        controller.handle(UiAction::DismissNotice, &output);
        assert!(controller.notice().is_none());
    }

    #[test]
    fn quitting_stops_active_preview() {
        let output = RecordingOutput::default();
        let mut controller = showing(vec![track("a", Some("https://p/a"))]);
        let id = controller.play_preview(0, &output).unwrap();

        assert_eq!(controller.handle(UiAction::Quit, &output), Effect::Quit);
        assert_eq!(output.calls().last(), Some(&OutputCall::Stop(id)));
    }

    #[tokio::test]
    async fn disconnected_backend_raises_warning() {
        let service = FakeService::healthy(Ok(HealthStatus {
            spotify_connected: false,
            status: Some("disconnected".into()),
        }));
        let mut controller = Controller::new("ph");

        controller.check_service_health(&service).await;

        assert_eq!(controller.notice(), Some(&Notice::warning(SERVICE_WARNING)));
        assert_eq!(controller.view(), &ViewState::Idle);
    }

    #[tokio::test]
    async fn healthy_backend_and_failed_check_stay_quiet() {
        let mut controller = Controller::new("ph");
        let service = FakeService::healthy(Ok(HealthStatus {
            spotify_connected: true,
            status: None,
        }));
        controller.check_service_health(&service).await;
        assert!(controller.notice().is_none());

        let service = FakeService::healthy(Err(ApiError::Decode(
            serde_json::from_str::<HealthStatus>("nope").unwrap_err(),
        )));
        controller.check_service_health(&service).await;
        assert!(controller.notice().is_none());
    }
}
