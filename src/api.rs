use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Mode;

/// Body of GET /status
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BackendStatus {
    #[serde(default)]
    pub safe_mode_running: bool,
    #[serde(default)]
    pub group_mode_running: bool,
}

impl BackendStatus {
    pub fn is_running(&self, mode: Mode) -> bool {
        match mode {
            Mode::Safe => self.safe_mode_running,
            Mode::Group => self.group_mode_running,
        }
    }
}

/// Group-mode processing parameters, sent as the body of POST /group_mode/start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessingParams {
    pub pitch: f64,
    pub volume: f64,
    pub speed: f64,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            pitch: -2.0,
            volume: 1.0,
            speed: 1.0,
        }
    }
}

/// Acknowledgement returned by the action endpoints ("started", "already_running", "added", ...)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActionAck {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub word: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    // FastAPI sends a string for HTTPException and a list for validation errors
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct WordItem<'a> {
    word: &'a str,
}

/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never completed (connect, DNS, timeout, body read)
    #[error("{0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    /// Success status but the body did not parse
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Backend-provided detail string, if the failure carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let message = crate::logic::errors::root_cause(&err);
        if err.is_decode() {
            ApiError::Decode(message)
        } else {
            ApiError::Network(message)
        }
    }
}

/// Operations the controller needs from the backend
#[async_trait]
pub trait ControlApi: Send + Sync {
    async fn get_status(&self) -> Result<BackendStatus, ApiError>;
    async fn get_words(&self) -> Result<Vec<String>, ApiError>;
    async fn add_word(&self, word: &str) -> Result<ActionAck, ApiError>;
    async fn remove_word(&self, word: &str) -> Result<ActionAck, ApiError>;
    async fn start_safe_mode(&self) -> Result<ActionAck, ApiError>;
    async fn start_group_mode(&self, params: &ProcessingParams) -> Result<ActionAck, ApiError>;
    async fn stop(&self, mode: Mode) -> Result<ActionAck, ApiError>;
}

#[derive(Clone)]
pub struct EchoClient {
    base_url: String,
    client: Client,
}

impl EchoClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn non-success responses into `ApiError::Status`, keeping the backend's detail
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.detail)
            .and_then(|value| value.as_str().map(str::to_string));

        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    /// Read an action acknowledgement. The body is informational, so a
    /// malformed one is logged and replaced with an empty ack.
    async fn read_ack(response: Response) -> Result<ActionAck, ApiError> {
        let text = response.text().await?;
        match serde_json::from_str::<ActionAck>(&text) {
            Ok(ack) => Ok(ack),
            Err(e) => {
                tracing::debug!(error = %e, body = %text, "unparseable action acknowledgement");
                Ok(ActionAck::default())
            }
        }
    }

    async fn post_action(&self, path: &str) -> Result<ActionAck, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.client.post(&url).send().await?;
        let response = Self::check_status(response).await?;
        Self::read_ack(response).await
    }
}

#[async_trait]
impl ControlApi for EchoClient {
    async fn get_status(&self) -> Result<BackendStatus, ApiError> {
        let url = format!("{}/status", self.base_url);
        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;

        let status: BackendStatus = response.json().await?;
        Ok(status)
    }

    async fn get_words(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/safe_mode/words", self.base_url);
        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;

        let words: Vec<String> = response.json().await?;
        Ok(words)
    }

    async fn add_word(&self, word: &str) -> Result<ActionAck, ApiError> {
        let url = format!("{}/safe_mode/words", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&WordItem { word })
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Self::read_ack(response).await
    }

    async fn remove_word(&self, word: &str) -> Result<ActionAck, ApiError> {
        let url = format!(
            "{}/safe_mode/words/{}",
            self.base_url,
            urlencoding::encode(word)
        );
        let response = self.client.delete(&url).send().await?;
        let response = Self::check_status(response).await?;
        Self::read_ack(response).await
    }

    async fn start_safe_mode(&self) -> Result<ActionAck, ApiError> {
        self.post_action("safe_mode/start").await
    }

    async fn start_group_mode(&self, params: &ProcessingParams) -> Result<ActionAck, ApiError> {
        let url = format!("{}/group_mode/start", self.base_url);
        let response = self.client.post(&url).json(params).send().await?;
        let response = Self::check_status(response).await?;
        Self::read_ack(response).await
    }

    async fn stop(&self, mode: Mode) -> Result<ActionAck, ApiError> {
        self.post_action(&format!("{}/stop", mode.path_segment())).await
    }
}
