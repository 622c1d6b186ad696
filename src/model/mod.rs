//! Application Model
//!
//! Plain, cloneable state for the control panel, split into:
//!
//! - **BackendModel**: mirror of remote state (recording flag, word list)
//! - **UiModel**: locally owned state (mode, params, input, status, dialogs)
//!
//! The model performs no I/O. The controller issues requests and the
//! handlers fold responses back into it.

pub mod backend;
pub mod types;
pub mod ui;

pub use backend::BackendModel;
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Remote backend state
    pub backend: BackendModel,

    /// Local UI state
    pub ui: UiModel,
}

impl Model {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            backend: BackendModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// START is enabled only while not recording
    pub fn can_start(&self) -> bool {
        !self.backend.recording
    }

    /// STOP is enabled only while recording
    pub fn can_stop(&self) -> bool {
        self.backend.recording
    }

    /// Sliders are locked for the whole recording session
    pub fn params_editable(&self) -> bool {
        !self.backend.recording
    }

    /// Currently selected censor word (if any)
    pub fn selected_word(&self) -> Option<&str> {
        self.ui
            .selected_word
            .and_then(|idx| self.backend.words.get(idx))
            .map(String::as_str)
    }

    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }
}
