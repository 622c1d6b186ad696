//! Controller
//!
//! The controller owns the `Model`, issues requests to the backend through
//! the API worker and folds the responses back in (see `handlers::api`).
//! Operations are grouped by domain into submodules, all as `impl Controller`:
//!
//! - words: censor word list refresh, add, remove
//! - recording: status polling, start, stop, mode selection
//! - params: Group-mode processing parameters
//!
//! Nothing here blocks. An operation queues a request and returns. The
//! result is applied when `pump` (UI loop) or `settle` (tests) sees it.

pub(crate) mod params;
pub(crate) mod recording;
pub(crate) mod words;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::api::ControlApi;
use crate::handlers;
use crate::model::Model;
use crate::services::api::{spawn_api_service, ApiRequest, ApiResponse};
use crate::services::poller::{spawn_status_poller, PollerHandle};

/// Default interval between status polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct ControllerOptions {
    pub poll_interval: Duration,
    pub vim_mode: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            vim_mode: false,
        }
    }
}

pub struct Controller {
    pub model: Model,

    api_tx: UnboundedSender<ApiRequest>,
    api_rx: UnboundedReceiver<ApiResponse>,
    poller: Option<PollerHandle>,
    tick_rx: Option<UnboundedReceiver<()>>,

    /// Requests sent whose responses have not been applied yet
    pub(crate) in_flight: usize,

    /// Epoch of the outstanding status poll, if any. Further polls for the
    /// same epoch are skipped until it lands
    pub(crate) status_poll_epoch: Option<u64>,
}

impl Controller {
    /// Create the controller, start the poll timer and request the word list
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(api: Arc<dyn ControlApi>, options: ControllerOptions) -> Self {
        let (api_tx, api_rx) = spawn_api_service(api);
        let (poller, tick_rx) = spawn_status_poller(options.poll_interval);

        let mut controller = Self {
            model: Model::new(options.vim_mode),
            api_tx,
            api_rx,
            poller: Some(poller),
            tick_rx: Some(tick_rx),
            in_flight: 0,
            status_poll_epoch: None,
        };

        tracing::info!(
            poll_interval_ms = options.poll_interval.as_millis() as u64,
            "controller started"
        );

        controller.refresh_word_list();
        controller
    }

    /// Queue a request on the API worker
    pub(crate) fn dispatch(&mut self, request: ApiRequest) -> bool {
        match self.api_tx.send(request) {
            Ok(()) => {
                self.in_flight += 1;
                true
            }
            Err(e) => {
                tracing::warn!(request = ?e.0, "API worker is gone; request dropped");
                false
            }
        }
    }

    /// Apply everything that is ready without waiting: timer ticks become
    /// status polls, completed requests are reconciled into the model.
    /// Returns the number of responses applied.
    pub fn pump(&mut self) -> usize {
        let mut ticks = 0;
        if let Some(tick_rx) = self.tick_rx.as_mut() {
            while tick_rx.try_recv().is_ok() {
                ticks += 1;
            }
        }
        // Several ticks in one frame still mean one poll
        if ticks > 0 {
            self.poll_status();
        }

        let mut applied = 0;
        while let Ok(response) = self.api_rx.try_recv() {
            self.handle_api_response(response);
            applied += 1;
        }
        applied
    }

    /// Wait until every outstanding request (including follow-ups such as the
    /// refresh after an add) has been applied
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.api_rx.recv().await {
                Some(response) => self.handle_api_response(response),
                None => {
                    tracing::warn!("API response channel closed with requests outstanding");
                    self.in_flight = 0;
                    break;
                }
            }
        }
    }

    /// Handle API responses from background worker
    /// Delegated to handlers::api module
    pub fn handle_api_response(&mut self, response: ApiResponse) {
        handlers::handle_api_response(self, response);
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(PollerHandle::is_running)
    }

    /// Stop the poll timer. In-flight requests are left to finish.
    pub fn dispose(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.cancel();
            tracing::info!("status poller cancelled");
        }
        self.tick_rx = None;
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.dispose();
    }
}
