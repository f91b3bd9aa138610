use crate::audio::traits::{PreviewId, PreviewOutput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePreview {
    pub id: PreviewId,
    pub url: String,
    /// Row of the shown playlist, when started from one.
    pub index: Option<usize>,
}

/// Holds at most one active preview. Starting a new one stops the previous
/// one first.
#[derive(Debug, Default)]
pub struct PreviewSlot {
    current: Option<ActivePreview>,
    next_id: PreviewId,
}

impl PreviewSlot {
    pub fn current(&self) -> Option<&ActivePreview> {
        self.current.as_ref()
    }

    pub fn play(
        &mut self,
        url: &str,
        index: Option<usize>,
        output: &dyn PreviewOutput,
    ) -> PreviewId {
        self.stop(output);

        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(ActivePreview {
            id,
            url: url.to_string(),
            index,
        });
        output.start(id, url);
        id
    }

    pub fn stop(&mut self, output: &dyn PreviewOutput) {
        if let Some(active) = self.current.take() {
            output.stop(active.id);
        }
    }

    /// Clears the slot if `id` is still the active preview.
    pub fn release(&mut self, id: PreviewId) -> bool {
        if self.current.as_ref().is_some_and(|active| active.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
