// src/config/options.rs
use super::consts::*;

/// Class names that carry each role tag on a marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleVocabulary {
    pub planned: String,
    pub realized: String,
    pub changed: String,
    pub moved_or_canceled: String,
}

impl Default for RoleVocabulary {
    fn default() -> Self {
        Self {
            planned: s!(CLASS_PLANNED),
            realized: s!(CLASS_REALIZED),
            changed: s!(CLASS_CHANGED),
            moved_or_canceled: s!(CLASS_MOVED_OR_CANCELED),
        }
    }
}

/// Everything the decoder reads from the site's markup conventions.
/// `Default` matches the portal as currently served.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    pub vocabulary: RoleVocabulary,
    pub warning_panel_class: String,
    /// Removed from merged info when a planned lesson was moved or canceled.
    pub boilerplate: Vec<String>,
    /// Lower-case word used for "previously: <subject>" notes.
    pub previously_label: String,
    /// Threads used by `TimetableDecoder::decode_batch`.
    pub workers: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            vocabulary: RoleVocabulary::default(),
            warning_panel_class: s!(CLASS_WARNING_PANEL),
            boilerplate: BOILERPLATE_PHRASES.iter().map(|p| s!(*p)).collect(),
            previously_label: s!(PREVIOUSLY_LABEL),
            workers: WORKERS,
        }
    }
}

impl DecodeOptions {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }
}
