use flume::Sender;
use rodio::{Decoder, Sink};
use std::{
    io::Cursor,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};
use tracing::{debug, warn};

use crate::{
    audio::{
        error::AudioError,
        playback::{PlaybackEngine, play_source},
        traits::{PreviewId, PreviewOutput},
    },
    event::events::Event,
    http::ApiService,
    util::task::TaskManager,
};

const PREVIEW_TASK: &str = "preview";
const MONITOR_INTERVAL: Duration = Duration::from_millis(100);
const NOTHING_PLAYING: PreviewId = 0;

/// Downloads and plays track previews through the local audio device,
/// reporting back over the app event channel.
pub struct PreviewPlayer {
    engine: Option<PlaybackEngine>,
    api: Arc<ApiService>,
    event_tx: Sender<Event>,
    tasks: Mutex<TaskManager>,
    playing: Arc<AtomicU64>,
}

impl PreviewPlayer {
    pub fn new(api: Arc<ApiService>, event_tx: Sender<Event>, volume: u8) -> Self {
        let engine = match PlaybackEngine::new(volume) {
            Ok(engine) => Some(engine),
            Err(e) => {
                warn!("No audio output available, previews disabled: {}", e);
                None
            }
        };

        Self::with_engine(engine, api, event_tx)
    }

    /// Builds a player around an already opened engine; `None` disables
    /// playback and every preview fails with a device error.
    pub fn with_engine(
        engine: Option<PlaybackEngine>,
        api: Arc<ApiService>,
        event_tx: Sender<Event>,
    ) -> Self {
        let player = Self {
            engine,
            api,
            event_tx,
            tasks: Mutex::new(TaskManager::new()),
            playing: Arc::new(AtomicU64::new(NOTHING_PLAYING)),
        };

        player.start_monitor();
        player
    }

    pub fn has_output(&self) -> bool {
        self.engine.is_some()
    }

    fn start_monitor(&self) {
        let Some(sink) = self.engine.as_ref().map(PlaybackEngine::sink) else {
            return;
        };
        let playing = self.playing.clone();
        let event_tx = self.event_tx.clone();

        tokio::spawn(async move {
            loop {
                tokio::time::sleep(MONITOR_INTERVAL).await;

                let id = playing.load(Ordering::Acquire);
                if id != NOTHING_PLAYING
                    && sink.empty()
                    && playing
                        .compare_exchange(id, NOTHING_PLAYING, Ordering::AcqRel, Ordering::Acquire)
                        .is_ok()
                {
                    let _ = event_tx.send(Event::PreviewEnded(id));
                }
            }
        });
    }

    fn with_tasks(&self, f: impl FnOnce(&mut TaskManager)) {
        match self.tasks.lock() {
            Ok(mut tasks) => f(&mut *tasks),
            Err(poisoned) => f(&mut *poisoned.into_inner()),
        }
    }

    pub fn shutdown(&self) {
        self.with_tasks(TaskManager::abort_all);
        self.playing.store(NOTHING_PLAYING, Ordering::Release);
        if let Some(engine) = &self.engine {
            engine.sink().stop();
        }
    }
}

impl PreviewOutput for PreviewPlayer {
    fn start(&self, id: PreviewId, url: &str) {
        let event_tx = self.event_tx.clone();

        let Some(sink) = self.engine.as_ref().map(PlaybackEngine::sink) else {
            let reason = AudioError::DeviceError("no output device".to_string());
            let _ = event_tx.send(Event::PreviewFailed(id, reason.to_string()));
            return;
        };
        let api = self.api.clone();
        let playing = self.playing.clone();
        let url = url.to_string();

        self.with_tasks(|tasks| {
            tasks.spawn(PREVIEW_TASK, async move {
                match load_and_play(&api, &sink, &url).await {
                    Ok(()) => {
                        playing.store(id, Ordering::Release);
                        debug!("Preview {} playing", id);
                        let _ = event_tx.send(Event::PreviewStarted(id));
                    }
                    Err(e) => {
                        let _ = event_tx.send(Event::PreviewFailed(id, e.to_string()));
                    }
                }
            });
        });
    }

    fn stop(&self, id: PreviewId) {
        self.with_tasks(|tasks| tasks.abort(PREVIEW_TASK));
        self.playing.store(NOTHING_PLAYING, Ordering::Release);
        if let Some(engine) = &self.engine {
            engine.sink().stop();
        }
        debug!("Preview {} stopped", id);
    }
}

async fn load_and_play(api: &ApiService, sink: &Sink, url: &str) -> Result<(), AudioError> {
    let decoder = load_preview(api, url).await?;
    play_source(sink, decoder);
    Ok(())
}

async fn load_preview(
    api: &ApiService,
    url: &str,
) -> Result<Decoder<Cursor<Vec<u8>>>, AudioError> {
    let bytes = api
        .fetch_preview(url)
        .await
        .map_err(|e| AudioError::NetworkError(e.to_string()))?;

    Decoder::new(Cursor::new(bytes)).map_err(|e| AudioError::DecodingError(e.to_string()))
}
