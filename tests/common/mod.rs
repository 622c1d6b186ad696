//! Shared test helpers: an in-memory backend behind the `ControlApi` seam

#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use echotui::api::{ActionAck, ApiError, BackendStatus, ControlApi, ProcessingParams};
use echotui::{Controller, ControllerOptions, Mode};

/// One call the controller made against the backend
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetStatus,
    GetWords,
    AddWord(String),
    RemoveWord(String),
    StartSafe,
    StartGroup(ProcessingParams),
    Stop(Mode),
}

#[derive(Debug, Default)]
pub struct FakeState {
    pub words: Vec<String>,
    pub safe_running: bool,
    pub group_running: bool,

    // Injected failures (returned instead of the normal behaviour)
    pub status_error: Option<ApiError>,
    pub words_error: Option<ApiError>,
    pub add_error: Option<ApiError>,
    pub start_error: Option<ApiError>,
    pub stop_error: Option<ApiError>,

    pub calls: Vec<Call>,
}

/// Behaves like the EchoEase backend: duplicate and empty words are rejected
/// with a detail, start/stop are idempotent
#[derive(Debug, Default)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
}

fn rejected(status: u16, detail: &str) -> ApiError {
    ApiError::Status {
        status,
        detail: Some(detail.to_string()),
    }
}

fn ack(status: &str) -> ActionAck {
    ActionAck {
        status: status.to_string(),
        word: None,
    }
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_words(words: &[&str]) -> Arc<Self> {
        let backend = Self::default();
        backend.state().words = words.iter().map(|w| w.to_string()).collect();
        Arc::new(backend)
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.state().calls.iter().filter(|c| *c == call).count()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    fn record(&self, call: Call) -> MutexGuard<'_, FakeState> {
        let mut state = self.state();
        state.calls.push(call);
        state
    }
}

#[async_trait]
impl ControlApi for FakeBackend {
    async fn get_status(&self) -> Result<BackendStatus, ApiError> {
        let state = self.record(Call::GetStatus);
        if let Some(err) = state.status_error.clone() {
            return Err(err);
        }
        Ok(BackendStatus {
            safe_mode_running: state.safe_running,
            group_mode_running: state.group_running,
        })
    }

    async fn get_words(&self) -> Result<Vec<String>, ApiError> {
        let state = self.record(Call::GetWords);
        if let Some(err) = state.words_error.clone() {
            return Err(err);
        }
        Ok(state.words.clone())
    }

    async fn add_word(&self, word: &str) -> Result<ActionAck, ApiError> {
        let mut state = self.record(Call::AddWord(word.to_string()));
        if let Some(err) = state.add_error.clone() {
            return Err(err);
        }
        let word = word.trim();
        if word.is_empty() {
            return Err(rejected(400, "Empty word"));
        }
        if state.words.iter().any(|w| w == word) {
            return Err(rejected(400, "Word already exists"));
        }
        state.words.push(word.to_string());
        Ok(ActionAck {
            status: "added".to_string(),
            word: Some(word.to_string()),
        })
    }

    async fn remove_word(&self, word: &str) -> Result<ActionAck, ApiError> {
        let mut state = self.record(Call::RemoveWord(word.to_string()));
        match state.words.iter().position(|w| w == word) {
            Some(idx) => {
                state.words.remove(idx);
                Ok(ack("removed"))
            }
            None => Err(rejected(404, "Word not found")),
        }
    }

    async fn start_safe_mode(&self) -> Result<ActionAck, ApiError> {
        let mut state = self.record(Call::StartSafe);
        if let Some(err) = state.start_error.clone() {
            return Err(err);
        }
        if state.safe_running {
            return Ok(ack("already_running"));
        }
        state.safe_running = true;
        Ok(ack("started"))
    }

    async fn start_group_mode(&self, params: &ProcessingParams) -> Result<ActionAck, ApiError> {
        let mut state = self.record(Call::StartGroup(*params));
        if let Some(err) = state.start_error.clone() {
            return Err(err);
        }
        if state.group_running {
            return Ok(ack("already_running"));
        }
        state.group_running = true;
        Ok(ack("started"))
    }

    async fn stop(&self, mode: Mode) -> Result<ActionAck, ApiError> {
        let mut state = self.record(Call::Stop(mode));
        if let Some(err) = state.stop_error.clone() {
            return Err(err);
        }
        let running = match mode {
            Mode::Safe => &mut state.safe_running,
            Mode::Group => &mut state.group_running,
        };
        if !*running {
            return Ok(ack("not_running"));
        }
        *running = false;
        Ok(ack("stopped"))
    }
}

/// Poll period long enough that the timer never fires during a test
pub const QUIET_POLL: Duration = Duration::from_secs(3600);

/// Controller wired to the fake, with the initial word list already applied
pub async fn controller(backend: &Arc<FakeBackend>) -> Controller {
    let mut ctrl = Controller::new(
        backend.clone(),
        ControllerOptions {
            poll_interval: QUIET_POLL,
            vim_mode: false,
        },
    );
    ctrl.settle().await;
    ctrl
}
