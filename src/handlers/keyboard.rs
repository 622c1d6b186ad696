//! Keyboard Input Handler
//!
//! Maps key presses onto controller operations. This is also where the
//! "disabled button" rules live: START is ignored while recording, STOP while
//! not recording, and the sliders while recording.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::Focus;
use crate::{Controller, Mode};

/// Arrow keys, with hjkl aliases in vim mode
fn navigation_key(code: KeyCode, vim_mode: bool) -> Option<KeyCode> {
    match code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(code),
        KeyCode::Char('k') if vim_mode => Some(KeyCode::Up),
        KeyCode::Char('j') if vim_mode => Some(KeyCode::Down),
        KeyCode::Char('h') if vim_mode => Some(KeyCode::Left),
        KeyCode::Char('l') if vim_mode => Some(KeyCode::Right),
        _ => None,
    }
}

/// Handle keyboard input
pub fn handle_key(ctrl: &mut Controller, key: KeyEvent) {
    // Some terminals report releases too
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        ctrl.model.ui.should_quit = true;
        return;
    }

    // Blocking notification swallows everything until dismissed
    if ctrl.model.ui.notification.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            ctrl.model.ui.dismiss_notification();
        }
        return;
    }

    if ctrl.model.ui.is_typing() {
        handle_input_key(ctrl, key);
        return;
    }

    let mode = ctrl.model.ui.mode;
    match key.code {
        KeyCode::Char('q') => {
            ctrl.model.ui.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            ctrl.model.ui.focus = ctrl.model.ui.focus.cycle(mode, true);
            return;
        }
        KeyCode::BackTab => {
            ctrl.model.ui.focus = ctrl.model.ui.focus.cycle(mode, false);
            return;
        }
        KeyCode::Char('m') => {
            ctrl.toggle_mode();
            return;
        }
        KeyCode::Char('1') => {
            ctrl.set_mode(Mode::Group);
            return;
        }
        KeyCode::Char('2') => {
            ctrl.set_mode(Mode::Safe);
            return;
        }
        KeyCode::Char('r') => {
            if ctrl.model.can_start() {
                ctrl.start();
            }
            return;
        }
        KeyCode::Char('x') => {
            if ctrl.model.can_stop() {
                ctrl.stop();
            }
            return;
        }
        KeyCode::Char('a') | KeyCode::Char('i') => {
            ctrl.model.ui.focus = Focus::Input;
            return;
        }
        _ => {}
    }

    let vim_mode = ctrl.model.ui.vim_mode;
    match ctrl.model.ui.focus {
        Focus::Controls => {
            if key.code == KeyCode::Enter {
                // Enter presses whichever button is enabled
                if ctrl.model.can_start() {
                    ctrl.start();
                } else {
                    ctrl.stop();
                }
            }
        }
        Focus::Params => match navigation_key(key.code, vim_mode) {
            Some(KeyCode::Up) => ctrl.cycle_selected_param(false),
            Some(KeyCode::Down) => ctrl.cycle_selected_param(true),
            Some(KeyCode::Left) => {
                let field = ctrl.model.ui.selected_param;
                ctrl.adjust_processing_param(field, -1);
            }
            Some(KeyCode::Right) => {
                let field = ctrl.model.ui.selected_param;
                ctrl.adjust_processing_param(field, 1);
            }
            _ => {}
        },
        Focus::Words => match (key.code, navigation_key(key.code, vim_mode)) {
            (_, Some(KeyCode::Up)) => ctrl.move_word_selection(false),
            (_, Some(KeyCode::Down)) => ctrl.move_word_selection(true),
            (KeyCode::Char('d') | KeyCode::Delete, _) => {
                ctrl.remove_selected_word();
            }
            _ => {}
        },
        Focus::Input => {}
    }
}

/// Keys while the new-word box has focus
fn handle_input_key(ctrl: &mut Controller, key: KeyEvent) {
    let mode = ctrl.model.ui.mode;
    match key.code {
        KeyCode::Esc => {
            ctrl.model.ui.focus = Focus::Words;
        }
        KeyCode::Enter => {
            ctrl.submit_pending_word();
        }
        KeyCode::Backspace => {
            ctrl.model.ui.pending_word_input.pop();
        }
        KeyCode::Tab => {
            ctrl.model.ui.focus = ctrl.model.ui.focus.cycle(mode, true);
        }
        KeyCode::BackTab => {
            ctrl.model.ui.focus = ctrl.model.ui.focus.cycle(mode, false);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            ctrl.model.ui.pending_word_input.push(c);
        }
        _ => {}
    }
}
