//! Recording status derivation and stale-response checks

use crate::api::BackendStatus;
use crate::Mode;

pub const STATUS_STARTING: &str = "Starting...";
pub const STATUS_RECORDING: &str = "Recording...";
pub const STATUS_STOPPING: &str = "Stopping...";
pub const STATUS_STOPPED: &str = "Stopped";

/// Recording flag for the given mode: only that mode's subsystem counts
pub fn recording_for(mode: Mode, status: &BackendStatus) -> bool {
    status.is_running(mode)
}

/// A status poll is only applied if no start/stop completed since it was issued
pub fn poll_is_current(issued_epoch: u64, current_epoch: u64) -> bool {
    issued_epoch == current_epoch
}

/// A word list response is only applied if nothing newer was applied already
pub fn generation_is_newer(generation: u64, applied: u64) -> bool {
    generation > applied
}

pub fn start_error(reason: &str) -> String {
    format!("Error starting: {}", reason)
}

pub fn stop_error(reason: &str) -> String {
    format!("Error stopping: {}", reason)
}
