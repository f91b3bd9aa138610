use rodio::{OutputStream, OutputStreamBuilder, Sink, Source};
use std::sync::Arc;

/// Owns the output stream. The stream must stay on the thread that opened it;
/// only the [`Sink`] handle is shared with playback tasks.
pub struct PlaybackEngine {
    _stream: OutputStream,
    sink: Arc<Sink>,
}

impl PlaybackEngine {
    pub fn new(volume: u8) -> color_eyre::Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        stream.log_on_drop(false);
        let sink = Sink::connect_new(stream.mixer());
        sink.set_volume(f32::from(volume.min(100)) / 100.0);

        Ok(Self {
            _stream: stream,
            sink: Arc::new(sink),
        })
    }

    pub fn sink(&self) -> Arc<Sink> {
        self.sink.clone()
    }
}

pub fn play_source<S>(sink: &Sink, source: S)
where
    S: Source + Send + 'static,
{
    sink.stop();
    sink.append(source);
    sink.play();
}
