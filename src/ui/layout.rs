use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::model::Model;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top title bar (app name, mode tabs, last update)
    pub title_area: Rect,
    /// Left panel: sliders, START/STOP, status line
    pub controls_area: Rect,
    /// Right panel: censor word list
    pub words_area: Rect,
    /// New-word input box under the word list
    pub input_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, model: &Model) -> LayoutInfo {
    let legend_height = super::legend::calculate_legend_height(terminal_size.width, model);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title bar (top border, text, bottom border)
            Constraint::Min(8),                // Panels
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
        ])
        .split(terminal_size);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(panels[1]);

    LayoutInfo {
        title_area: main_chunks[0],
        controls_area: panels[0],
        words_area: right[0],
        input_area: right[1],
        legend_area: main_chunks[2],
    }
}
