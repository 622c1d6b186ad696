//! Recording orchestration methods
//!
//! Status polling, start/stop and mode selection.

use crate::logic::status::{STATUS_STARTING, STATUS_STOPPING};
use crate::services::api::{ApiRequest, StartCommand};
use crate::{Controller, Mode};

impl Controller {
    /// Ask the backend which subsystems are running
    ///
    /// Skipped while a poll issued at the current recording epoch is still
    /// outstanding. An older outstanding poll will be discarded on arrival, so
    /// it does not block a new one. The recording flag is derived from the
    /// mode selected when the answer arrives.
    pub fn poll_status(&mut self) {
        let epoch = self.model.backend.recording_epoch;
        if self.status_poll_epoch == Some(epoch) {
            tracing::debug!(epoch, "status poll skipped: previous poll still in flight");
            return;
        }
        if self.dispatch(ApiRequest::GetStatus { epoch }) {
            self.status_poll_epoch = Some(epoch);
        }
    }

    /// Start capture for the selected mode
    ///
    /// The UI only offers this while not recording; it is not re-checked here.
    /// Group mode sends the parameters as they are at call time.
    pub fn start(&mut self) {
        self.model.ui.status_message = STATUS_STARTING.to_string();

        let command = match self.model.ui.mode {
            Mode::Safe => StartCommand::Safe,
            Mode::Group => StartCommand::Group(self.model.ui.params),
        };
        tracing::info!(?command, "starting capture");
        self.dispatch(ApiRequest::Start(command));
    }

    /// Stop capture for the selected mode
    pub fn stop(&mut self) {
        self.model.ui.status_message = STATUS_STOPPING.to_string();

        let mode = self.model.ui.mode;
        tracing::info!(?mode, "stopping capture");
        self.dispatch(ApiRequest::Stop { mode });
    }

    /// Select the backend subsystem to control
    ///
    /// A real change polls right away so the recording flag catches up
    /// without waiting for the next tick.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.model.ui.mode == mode {
            return;
        }
        tracing::debug!(from = ?self.model.ui.mode, to = ?mode, "mode changed");
        self.model.ui.mode = mode;
        self.model.ui.focus = self.model.ui.focus.valid_for(mode);
        self.poll_status();
    }

    pub fn toggle_mode(&mut self) {
        let next = self.model.ui.mode.toggled();
        self.set_mode(next);
    }
}
