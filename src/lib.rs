//! EchoEase terminal control panel
//!
//! Library half of the crate: everything except terminal setup lives here so
//! the controller, reconciliation handlers and rendering can be tested.

pub mod api;
pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{Controller, ControllerOptions};

/// Recording mode - selects which backend subsystem start/stop/status target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Safe,  // Censor word list, no tuning
    Group, // Pitch/volume/speed processing
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Safe => "Safe Mode",
            Mode::Group => "Group Mode",
        }
    }

    /// Path segment used by the backend for this mode's endpoints
    pub fn path_segment(&self) -> &'static str {
        match self {
            Mode::Safe => "safe_mode",
            Mode::Group => "group_mode",
        }
    }

    pub fn toggled(&self) -> Mode {
        match self {
            Mode::Safe => Mode::Group,
            Mode::Group => Mode::Safe,
        }
    }
}

/// Tunable Group-mode processing parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamField {
    Pitch,
    Volume,
    Speed,
}

impl ParamField {
    pub const ALL: [ParamField; 3] = [ParamField::Pitch, ParamField::Volume, ParamField::Speed];

    pub fn as_str(&self) -> &str {
        match self {
            ParamField::Pitch => "Pitch",
            ParamField::Volume => "Volume",
            ParamField::Speed => "Speed",
        }
    }
}
