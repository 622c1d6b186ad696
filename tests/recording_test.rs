//! Integration tests for start/stop and status polling
//!
//! Covers the recording flag lifecycle, the status line texts and the guards
//! that keep late poll answers from undoing a start or stop.

mod common;

use std::time::Duration;

use common::{controller, Call, FakeBackend};
use echotui::api::{ActionAck, ApiError, BackendStatus, ProcessingParams};
use echotui::services::ApiResponse;
use echotui::{Controller, ControllerOptions, Mode, ParamField};

#[tokio::test]
async fn test_safe_start_sets_recording() {
    let backend = FakeBackend::new();
    let mut ctrl = controller(&backend).await;

    ctrl.start();
    assert_eq!(ctrl.model.ui.status_message, "Starting...");
    ctrl.settle().await;

    assert!(ctrl.model.backend.recording);
    assert_eq!(ctrl.model.ui.status_message, "Recording...");
    assert_eq!(backend.count(&Call::StartSafe), 1);
    assert!(!ctrl.model.can_start());
    assert!(ctrl.model.can_stop());
}

#[tokio::test]
async fn test_already_running_counts_as_started() {
    let backend = FakeBackend::new();
    backend.state().safe_running = true;
    let mut ctrl = controller(&backend).await;

    ctrl.start();
    ctrl.settle().await;

    assert!(ctrl.model.backend.recording);
    assert_eq!(ctrl.model.ui.status_message, "Recording...");
}

#[tokio::test]
async fn test_group_start_sends_snapshot_of_params() {
    let backend = FakeBackend::new();
    let mut ctrl = controller(&backend).await;
    ctrl.set_mode(Mode::Group);
    ctrl.settle().await;

    assert!(ctrl.set_processing_param(ParamField::Pitch, 3.0));
    ctrl.start();
    // Still editable until the start lands; must not leak into the request
    assert!(ctrl.set_processing_param(ParamField::Pitch, 5.0));
    ctrl.settle().await;

    let expected = ProcessingParams {
        pitch: 3.0,
        volume: 1.0,
        speed: 1.0,
    };
    assert_eq!(backend.count(&Call::StartGroup(expected)), 1);
    assert_eq!(ctrl.model.ui.params.pitch, 5.0);
    assert!(ctrl.model.backend.recording);
}

#[tokio::test]
async fn test_start_rejected_shows_mode_message() {
    let backend = FakeBackend::new();
    backend.state().start_error = Some(ApiError::Status {
        status: 500,
        detail: None,
    });
    let mut ctrl = controller(&backend).await;

    ctrl.start();
    ctrl.settle().await;
    assert!(!ctrl.model.backend.recording);
    assert_eq!(
        ctrl.model.ui.status_message,
        "Error starting: Failed to start safe mode"
    );

    ctrl.set_mode(Mode::Group);
    ctrl.settle().await;
    ctrl.start();
    ctrl.settle().await;
    assert_eq!(
        ctrl.model.ui.status_message,
        "Error starting: Failed to start group mode"
    );
}

#[tokio::test]
async fn test_start_network_failure_shows_error_text() {
    let backend = FakeBackend::new();
    backend.state().start_error = Some(ApiError::Network("connection refused".to_string()));
    let mut ctrl = controller(&backend).await;

    ctrl.start();
    ctrl.settle().await;

    assert!(!ctrl.model.backend.recording);
    assert_eq!(
        ctrl.model.ui.status_message,
        "Error starting: connection refused"
    );
}

#[tokio::test]
async fn test_stop_clears_recording() {
    let backend = FakeBackend::new();
    let mut ctrl = controller(&backend).await;
    ctrl.start();
    ctrl.settle().await;

    ctrl.stop();
    assert_eq!(ctrl.model.ui.status_message, "Stopping...");
    ctrl.settle().await;

    assert!(!ctrl.model.backend.recording);
    assert_eq!(ctrl.model.ui.status_message, "Stopped");
    assert_eq!(backend.count(&Call::Stop(Mode::Safe)), 1);
}

#[tokio::test]
async fn test_stop_error_status_still_clears_recording() {
    let backend = FakeBackend::new();
    let mut ctrl = controller(&backend).await;
    ctrl.start();
    ctrl.settle().await;

    backend.state().stop_error = Some(ApiError::Status {
        status: 500,
        detail: None,
    });
    ctrl.stop();
    ctrl.settle().await;

    assert!(!ctrl.model.backend.recording);
    assert_eq!(ctrl.model.ui.status_message, "Stopped");
}

#[tokio::test]
async fn test_stop_network_failure_keeps_recording() {
    let backend = FakeBackend::new();
    let mut ctrl = controller(&backend).await;
    ctrl.start();
    ctrl.settle().await;

    backend.state().stop_error = Some(ApiError::Network("broken pipe".to_string()));
    ctrl.stop();
    ctrl.settle().await;

    assert!(ctrl.model.backend.recording);
    assert_eq!(ctrl.model.ui.status_message, "Error stopping: broken pipe");
}

#[tokio::test]
async fn test_start_landing_after_mode_switch_keeps_new_modes_flag() {
    let backend = FakeBackend::new();
    let mut ctrl = controller(&backend).await;

    // Safe start still in flight when the user switches to Group
    ctrl.start();
    ctrl.set_mode(Mode::Group);
    ctrl.settle().await;

    assert!(backend.state().safe_running);
    assert!(!ctrl.model.backend.recording);
    assert!(ctrl.model.can_start());
    assert!(ctrl.model.params_editable());
    assert_eq!(ctrl.model.ui.status_message, "Recording...");
}

#[tokio::test]
async fn test_stop_landing_after_mode_switch_keeps_new_modes_flag() {
    let backend = FakeBackend::new();
    let mut ctrl = controller(&backend).await;
    ctrl.start();
    ctrl.settle().await;
    assert!(ctrl.model.backend.recording);
    backend.state().group_running = true;

    // Safe stop still in flight when the user switches to the running Group
    ctrl.stop();
    ctrl.set_mode(Mode::Group);
    ctrl.settle().await;

    assert!(!backend.state().safe_running);
    assert!(ctrl.model.backend.recording);
    assert!(ctrl.model.can_stop());
    assert_eq!(ctrl.model.ui.status_message, "Stopped");
}

#[tokio::test]
async fn test_stale_outstanding_poll_does_not_block_new_one() {
    let backend = FakeBackend::new();
    let mut ctrl = controller(&backend).await;

    ctrl.poll_status();
    // Start completes while the poll above is still queued
    ctrl.handle_api_response(ApiResponse::StartResult {
        mode: Mode::Safe,
        result: Ok(ActionAck {
            status: "started".to_string(),
            word: None,
        }),
    });
    ctrl.poll_status();

    let both_sent = tokio::time::timeout(Duration::from_secs(5), async {
        while backend.count(&Call::GetStatus) < 2 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await;
    assert!(both_sent.is_ok(), "poll for the new epoch was skipped");
}

#[tokio::test]
async fn test_poll_updates_recording_and_timestamp() {
    let backend = FakeBackend::new();
    backend.state().safe_running = true;
    let mut ctrl = controller(&backend).await;
    assert!(ctrl.model.backend.last_status_at.is_none());

    ctrl.poll_status();
    ctrl.settle().await;

    assert!(ctrl.model.backend.recording);
    assert!(ctrl.model.backend.last_status_at.is_some());
}

#[tokio::test]
async fn test_switching_mode_reflects_that_modes_subsystem() {
    let backend = FakeBackend::new();
    backend.state().safe_running = true;
    let mut ctrl = controller(&backend).await;

    ctrl.poll_status();
    ctrl.settle().await;
    assert!(ctrl.model.backend.recording);

    // Group subsystem is idle, so switching shows "not recording"
    ctrl.set_mode(Mode::Group);
    ctrl.settle().await;
    assert!(!ctrl.model.backend.recording);
    assert!(ctrl.model.can_start());
}

#[tokio::test]
async fn test_poll_uses_mode_selected_when_answer_arrives() {
    let backend = FakeBackend::new();
    backend.state().group_running = true;
    let mut ctrl = controller(&backend).await;

    ctrl.poll_status();
    // Switch while the poll is outstanding
    ctrl.set_mode(Mode::Group);
    ctrl.settle().await;

    assert!(ctrl.model.backend.recording);
    // The mode switch did not issue a second poll while one was in flight
    assert_eq!(backend.count(&Call::GetStatus), 1);
}

#[tokio::test]
async fn test_only_one_poll_in_flight() {
    let backend = FakeBackend::new();
    let mut ctrl = controller(&backend).await;

    ctrl.poll_status();
    ctrl.poll_status();
    ctrl.poll_status();
    ctrl.settle().await;
    assert_eq!(backend.count(&Call::GetStatus), 1);

    // A new poll is allowed once the previous one landed
    ctrl.poll_status();
    ctrl.settle().await;
    assert_eq!(backend.count(&Call::GetStatus), 2);
}

#[tokio::test]
async fn test_poll_failure_keeps_flag() {
    let backend = FakeBackend::new();
    let mut ctrl = controller(&backend).await;
    ctrl.start();
    ctrl.settle().await;

    backend.state().status_error = Some(ApiError::Network("timed out".to_string()));
    ctrl.poll_status();
    ctrl.settle().await;

    assert!(ctrl.model.backend.recording);
    assert!(ctrl.model.backend.last_status_at.is_none());
}

#[tokio::test]
async fn test_poll_issued_before_start_is_discarded() {
    let backend = FakeBackend::new();
    let mut ctrl = controller(&backend).await;
    let epoch_before_start = ctrl.model.backend.recording_epoch;

    ctrl.start();
    ctrl.settle().await;
    assert!(ctrl.model.backend.recording);

    // Late answer from a poll sent before the start completed
    ctrl.handle_api_response(ApiResponse::StatusResult {
        epoch: epoch_before_start,
        status: Ok(BackendStatus::default()),
    });

    assert!(ctrl.model.backend.recording);
    assert!(ctrl.model.backend.last_status_at.is_none());
}

#[tokio::test]
async fn test_mode_switch_keeps_words_and_params() {
    let backend = FakeBackend::with_words(&["a"]);
    let mut ctrl = controller(&backend).await;
    ctrl.set_mode(Mode::Group);
    ctrl.set_processing_param(ParamField::Volume, 1.3);
    ctrl.settle().await;

    ctrl.set_mode(Mode::Safe);
    ctrl.settle().await;
    ctrl.set_mode(Mode::Group);
    ctrl.settle().await;

    assert_eq!(ctrl.model.backend.words, vec!["a"]);
    assert_eq!(ctrl.model.ui.params.volume, 1.3);
    // Mode switches poll status but never touch the word list
    assert_eq!(backend.count(&Call::GetWords), 1);
}

#[tokio::test]
async fn test_selecting_current_mode_is_a_no_op() {
    let backend = FakeBackend::new();
    let mut ctrl = controller(&backend).await;

    ctrl.set_mode(Mode::Safe);
    ctrl.settle().await;
    assert_eq!(backend.count(&Call::GetStatus), 0);
}

#[tokio::test]
async fn test_timer_polls_status() {
    let backend = FakeBackend::new();
    backend.state().safe_running = true;
    let mut ctrl = Controller::new(
        backend.clone(),
        ControllerOptions {
            poll_interval: Duration::from_millis(20),
            vim_mode: false,
        },
    );
    assert!(ctrl.is_polling());

    let waited = tokio::time::timeout(Duration::from_secs(5), async {
        while !ctrl.model.backend.recording {
            ctrl.pump();
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await;

    assert!(waited.is_ok(), "timer never produced a status poll");
    assert!(backend.count(&Call::GetStatus) >= 1);
}

#[tokio::test]
async fn test_dispose_stops_polling() {
    let backend = FakeBackend::new();
    let mut ctrl = Controller::new(
        backend.clone(),
        ControllerOptions {
            poll_interval: Duration::from_millis(10),
            vim_mode: false,
        },
    );
    ctrl.settle().await;
    assert!(ctrl.is_polling());

    ctrl.dispose();
    assert!(!ctrl.is_polling());

    tokio::time::sleep(Duration::from_millis(50)).await;
    ctrl.pump();
    ctrl.settle().await;
    assert_eq!(backend.count(&Call::GetStatus), 0);
}
