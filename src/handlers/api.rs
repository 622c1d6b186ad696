//! API Response Handler
//!
//! Reconciles responses from the backend worker into the model.

use chrono::Local;

use crate::logic::errors::{add_word_failure_message, is_transport_failure, start_failure_reason};
use crate::logic::status::{
    generation_is_newer, poll_is_current, recording_for, start_error, stop_error,
    STATUS_RECORDING, STATUS_STOPPED,
};
use crate::services::api::ApiResponse;
use crate::{Controller, Mode};

/// Handle API response from background service
///
/// Response types:
/// - StatusResult: recording flags, applied for the mode selected *now*
/// - WordsResult: replaces the word list (empty on failure)
/// - AddWordResult / RemoveWordResult: trigger a refresh or a notification
/// - StartResult / StopResult: recording flag and status line
pub fn handle_api_response(ctrl: &mut Controller, response: ApiResponse) {
    ctrl.in_flight = ctrl.in_flight.saturating_sub(1);

    match response {
        ApiResponse::StatusResult { epoch, status } => {
            if ctrl.status_poll_epoch == Some(epoch) {
                ctrl.status_poll_epoch = None;
            }

            let status = match status {
                Ok(status) => status,
                Err(e) => {
                    // Transient; keep the previous flag
                    tracing::debug!(error = %e, "status poll failed");
                    return;
                }
            };

            if !poll_is_current(epoch, ctrl.model.backend.recording_epoch) {
                tracing::debug!(
                    issued = epoch,
                    current = ctrl.model.backend.recording_epoch,
                    "discarding status issued before the last start/stop"
                );
                return;
            }

            let mode = ctrl.model.ui.mode;
            ctrl.model.backend.recording = recording_for(mode, &status);
            ctrl.model.backend.last_status_at = Some(Local::now());
        }

        ApiResponse::WordsResult { generation, words } => {
            if !generation_is_newer(generation, ctrl.model.backend.words_generation_applied) {
                tracing::debug!(
                    generation,
                    applied = ctrl.model.backend.words_generation_applied,
                    "discarding out-of-order word list"
                );
                return;
            }
            ctrl.model.backend.words_generation_applied = generation;

            let words = words.unwrap_or_else(|e| {
                // Never show a stale or partial list
                tracing::debug!(error = %e, "word list refresh failed; clearing");
                Vec::new()
            });
            ctrl.apply_word_list(words);
        }

        ApiResponse::AddWordResult { word, result } => match result {
            Ok(ack) => {
                tracing::info!(%word, status = %ack.status, "censor word added");
                // Keep anything typed since the submit
                if ctrl.model.ui.pending_word_input.trim() == word {
                    ctrl.model.ui.pending_word_input.clear();
                }
                ctrl.refresh_word_list();
            }
            Err(e) => {
                tracing::warn!(%word, error = %e, "failed to add censor word");
                ctrl.model.ui.notify(add_word_failure_message(&e));
            }
        },

        ApiResponse::RemoveWordResult { word, result } => match result {
            Ok(_) => {
                tracing::info!(%word, "censor word removed");
                ctrl.refresh_word_list();
            }
            Err(e) => {
                // Best effort; the word simply stays listed
                tracing::debug!(%word, error = %e, "failed to remove censor word");
            }
        },

        ApiResponse::StartResult { mode, result } => match result {
            Ok(ack) => {
                if ack.status == "already_running" {
                    tracing::info!(?mode, "backend reports capture already running");
                }
                ctrl.model.backend.bump_recording_epoch();
                ctrl.model.ui.status_message = STATUS_RECORDING.to_string();
                apply_recording_result(ctrl, mode, true);
            }
            Err(e) => {
                tracing::warn!(?mode, error = %e, "failed to start capture");
                ctrl.model.ui.status_message = start_error(&start_failure_reason(mode, &e));
            }
        },

        ApiResponse::StopResult { mode, result } => {
            // An HTTP answer of any status counts as stopped; only a request
            // that never completed leaves the flag alone
            match result {
                Err(e) if is_transport_failure(&e) => {
                    tracing::warn!(?mode, error = %e, "stop request did not complete");
                    ctrl.model.ui.status_message = stop_error(&e.to_string());
                }
                other => {
                    if let Err(e) = other {
                        tracing::warn!(?mode, error = %e, "backend rejected stop; clearing recording anyway");
                    }
                    ctrl.model.backend.bump_recording_epoch();
                    ctrl.model.ui.status_message = STATUS_STOPPED.to_string();
                    apply_recording_result(ctrl, mode, false);
                }
            }
        }
    }
}

/// Set the flag from a start/stop answer, unless the user switched modes while
/// it was in flight. The flag then belongs to another subsystem, so poll for it.
fn apply_recording_result(ctrl: &mut Controller, mode: Mode, recording: bool) {
    if ctrl.model.ui.mode == mode {
        ctrl.model.backend.recording = recording;
        return;
    }
    tracing::debug!(
        result_mode = ?mode,
        selected = ?ctrl.model.ui.mode,
        "start/stop answer for a mode no longer selected; polling"
    );
    ctrl.poll_status();
}
