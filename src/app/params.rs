//! Processing parameter methods

use crate::logic;
use crate::{Controller, ParamField};

impl Controller {
    /// Set a Group-mode parameter, clamped to its range
    ///
    /// Parameters are frozen while recording; returns false if refused.
    pub fn set_processing_param(&mut self, field: ParamField, value: f64) -> bool {
        if !self.model.params_editable() {
            tracing::debug!(?field, "parameter change refused while recording");
            return false;
        }
        self.model.ui.params = logic::params::with_value(self.model.ui.params, field, value);
        true
    }

    /// Move a parameter by whole steps (slider arrows)
    pub fn adjust_processing_param(&mut self, field: ParamField, steps: i32) -> bool {
        if !self.model.params_editable() {
            return false;
        }
        self.model.ui.params = logic::params::step(self.model.ui.params, field, steps);
        true
    }

    pub(crate) fn cycle_selected_param(&mut self, forward: bool) {
        self.model.ui.selected_param =
            logic::params::cycle_field(self.model.ui.selected_param, forward);
    }
}
