/// Identifies one preview request for the lifetime of the session.
pub type PreviewId = u64;

/// Where preview playback is carried out. Implementations report completion
/// and failure asynchronously, keyed by the id they were started with.
pub trait PreviewOutput {
    fn start(&self, id: PreviewId, url: &str);
    fn stop(&self, id: PreviewId);
}
