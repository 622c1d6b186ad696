use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::{ActionAck, ApiError, BackendStatus, ControlApi, ProcessingParams};
use crate::Mode;

/// What to start; Group mode always carries its parameter snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum StartCommand {
    Safe,
    Group(ProcessingParams),
}

impl StartCommand {
    pub fn mode(&self) -> Mode {
        match self {
            StartCommand::Safe => Mode::Safe,
            StartCommand::Group(_) => Mode::Group,
        }
    }
}

/// API request types
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    /// Poll backend status (tagged with the recording epoch at issue time)
    GetStatus { epoch: u64 },

    /// Refresh the censor word list
    GetWords { generation: u64 },

    /// Add a censor word (already trimmed)
    AddWord { word: String },

    /// Remove a censor word
    RemoveWord { word: String },

    /// Start capture
    Start(StartCommand),

    /// Stop capture for a mode
    Stop { mode: Mode },
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    StatusResult {
        epoch: u64,
        status: Result<BackendStatus, ApiError>,
    },

    WordsResult {
        generation: u64,
        words: Result<Vec<String>, ApiError>,
    },

    AddWordResult {
        word: String,
        result: Result<ActionAck, ApiError>,
    },

    RemoveWordResult {
        word: String,
        result: Result<ActionAck, ApiError>,
    },

    StartResult {
        mode: Mode,
        result: Result<ActionAck, ApiError>,
    },

    StopResult {
        mode: Mode,
        result: Result<ActionAck, ApiError>,
    },
}

/// Execute an API request and return the response
pub async fn execute_request(api: &dyn ControlApi, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::GetStatus { epoch } => {
            let status = api.get_status().await;
            ApiResponse::StatusResult { epoch, status }
        }

        ApiRequest::GetWords { generation } => {
            let words = api.get_words().await;
            ApiResponse::WordsResult { generation, words }
        }

        ApiRequest::AddWord { word } => {
            let result = api.add_word(&word).await;
            ApiResponse::AddWordResult { word, result }
        }

        ApiRequest::RemoveWord { word } => {
            let result = api.remove_word(&word).await;
            ApiResponse::RemoveWordResult { word, result }
        }

        ApiRequest::Start(command) => {
            let mode = command.mode();
            let result = match &command {
                StartCommand::Safe => api.start_safe_mode().await,
                StartCommand::Group(params) => api.start_group_mode(params).await,
            };
            ApiResponse::StartResult { mode, result }
        }

        ApiRequest::Stop { mode } => {
            let result = api.stop(mode).await;
            ApiResponse::StopResult { mode, result }
        }
    }
}

/// Spawn the API service worker
///
/// Every request runs in its own task, so a slow call never holds up the
/// others; completions arrive on the response channel in completion order.
/// No per-request retries.
pub fn spawn_api_service(
    api: Arc<dyn ControlApi>,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            tracing::debug!(?request, "dispatching API request");

            let api = Arc::clone(&api);
            let response_tx = response_tx.clone();
            tokio::spawn(async move {
                let response = execute_request(api.as_ref(), request).await;
                // Receiver gone means the controller was torn down
                let _ = response_tx.send(response);
            });
        }
        tracing::debug!("API service stopped: request channel closed");
    });

    (request_tx, response_rx)
}
