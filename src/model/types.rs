//! Shared types for the Model

use crate::Mode;

/// Which panel receives navigation keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Controls,
    Params, // Group mode only
    Words,
    Input, // Typing into the new-word box
}

impl Focus {
    /// Focus order for the given mode (sliders only exist in Group mode)
    pub fn order(mode: Mode) -> &'static [Focus] {
        match mode {
            Mode::Group => &[Focus::Controls, Focus::Params, Focus::Words, Focus::Input],
            Mode::Safe => &[Focus::Controls, Focus::Words, Focus::Input],
        }
    }

    /// Next focus in tab order, wrapping around
    pub fn cycle(self, mode: Mode, forward: bool) -> Focus {
        let order = Focus::order(mode);
        let idx = order.iter().position(|f| *f == self).unwrap_or(0);
        let len = order.len();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        order[next]
    }

    /// Focus that is still valid after switching to `mode`
    pub fn valid_for(self, mode: Mode) -> Focus {
        if Focus::order(mode).contains(&self) {
            self
        } else {
            Focus::Controls
        }
    }
}
