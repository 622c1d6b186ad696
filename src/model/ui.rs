//! UI Model
//!
//! This sub-model contains all locally owned state: the selected mode,
//! processing parameters, input text, status line and the notification dialog.

use super::types::Focus;
use crate::api::ProcessingParams;
use crate::{Mode, ParamField};

/// UI state and user selections
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // USER SELECTIONS
    // ============================================
    /// Backend subsystem being controlled
    pub mode: Mode,

    /// Group-mode processing parameters (sent as a snapshot on start)
    pub params: ProcessingParams,

    /// Slider with keyboard focus
    pub selected_param: ParamField,

    /// Selected row in the word list
    pub selected_word: Option<usize>,

    /// Panel receiving navigation keys
    pub focus: Focus,

    /// Text typed into the new-word box
    pub pending_word_input: String,

    // ============================================
    // FEEDBACK
    // ============================================
    /// Inline status line ("Starting...", "Recording...", errors)
    pub status_message: String,

    /// Blocking notification; swallows input until dismissed
    pub notification: Option<String>,

    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            mode: Mode::Safe,
            params: ProcessingParams::default(),
            selected_param: ParamField::Pitch,
            selected_word: None,
            focus: Focus::Controls,
            pending_word_input: String::new(),
            status_message: String::new(),
            notification: None,
            vim_mode,
            should_quit: false,
        }
    }

    /// Check if a modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.notification.is_some()
    }

    pub fn notify(&mut self, message: String) {
        self.notification = Some(message);
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Whether keystrokes go to the input box
    pub fn is_typing(&self) -> bool {
        self.focus == Focus::Input
    }
}
