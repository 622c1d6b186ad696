//! Backend Model
//!
//! Local mirror of remote backend state: recording flag, censor word list and
//! the counters used to discard stale responses.

use chrono::{DateTime, Local};

/// Remote state as last reconciled from the backend
#[derive(Clone, Debug, Default)]
pub struct BackendModel {
    // ============================================
    // RECORDING
    // ============================================
    /// Whether the subsystem for the selected mode is running
    pub recording: bool,

    /// Bumped on every start/stop completion; polls issued earlier are dropped
    pub recording_epoch: u64,

    /// When the last status poll was applied
    pub last_status_at: Option<DateTime<Local>>,

    // ============================================
    // CENSOR WORDS
    // ============================================
    /// Censor words in backend order
    pub words: Vec<String>,

    /// Generation of the most recently issued word list refresh
    pub words_generation_issued: u64,

    /// Generation of the most recently applied word list
    pub words_generation_applied: u64,
}

impl BackendModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the generation number for a new word list refresh
    pub fn next_words_generation(&mut self) -> u64 {
        self.words_generation_issued += 1;
        self.words_generation_issued
    }

    /// Record that a start/stop completed; outstanding polls become stale
    pub fn bump_recording_epoch(&mut self) {
        self.recording_epoch += 1;
    }
}
