use crate::api::ApiError;
use crate::Mode;

/// Fallback shown when adding a word fails without a usable backend detail
pub const ADD_WORD_FALLBACK: &str = "Could not add";

/// Walk an error chain and return the deepest (root cause) message
pub fn root_cause(error: &(dyn std::error::Error + 'static)) -> String {
    let mut deepest = error.to_string();
    let mut source = error.source();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}

/// Whether the request never got an HTTP answer
pub fn is_transport_failure(error: &ApiError) -> bool {
    matches!(error, ApiError::Network(_) | ApiError::Decode(_))
}

/// Reason appended to "Error starting: "
///
/// A backend rejection maps to a fixed per-mode message; anything else shows
/// the underlying error text.
pub fn start_failure_reason(mode: Mode, error: &ApiError) -> String {
    match error {
        ApiError::Status { .. } => match mode {
            Mode::Safe => "Failed to start safe mode".to_string(),
            Mode::Group => "Failed to start group mode".to_string(),
        },
        other => other.to_string(),
    }
}

/// Text for the blocking notification after a failed add
pub fn add_word_failure_message(error: &ApiError) -> String {
    match error.detail() {
        Some(detail) if !detail.trim().is_empty() => detail.to_string(),
        _ => ADD_WORD_FALLBACK.to_string(),
    }
}
