//! Controls Panel UI
//!
//! Left panel: Group-mode sliders, START/STOP buttons and the status line.
//! Disabled elements are drawn greyed out; the keyboard handler applies the
//! same rules.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::params;
use crate::model::{Focus, Model};
use crate::{Mode, ParamField};

/// Width of the slider track in cells
const SLIDER_WIDTH: usize = 20;

fn disabled() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Build one slider row: "Pitch   ━━━━━━━━━●──────────  +0"
pub fn build_slider_line(
    field: ParamField,
    value: f64,
    selected: bool,
    editable: bool,
) -> Line<'static> {
    let filled = (params::ratio(field, value) * SLIDER_WIDTH as f64).round() as usize;
    let filled = filled.min(SLIDER_WIDTH);

    let (label_style, track_style) = if !editable {
        (disabled(), disabled())
    } else if selected {
        (
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Cyan),
        )
    } else {
        (Style::default().fg(Color::White), Style::default().fg(Color::Gray))
    };

    let marker = if selected { "▶ " } else { "  " };

    Line::from(vec![
        Span::styled(format!("{}{:<7}", marker, field.as_str()), label_style),
        Span::styled("━".repeat(filled), track_style),
        Span::styled("●", track_style),
        Span::styled("─".repeat(SLIDER_WIDTH - filled), disabled()),
        Span::styled(format!(" {:>4}", params::format_value(field, value)), label_style),
    ])
}

/// START/STOP row; exactly one button is enabled at a time
pub fn build_button_line(can_start: bool, can_stop: bool, focused: bool) -> Line<'static> {
    let button = |label: &'static str, enabled: bool, color: Color| {
        if !enabled {
            Span::styled(label, disabled())
        } else if focused {
            Span::styled(
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                label,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    Line::from(vec![
        button("[ START ]", can_start, Color::Green),
        Span::raw("  "),
        button("[ STOP ]", can_stop, Color::Red),
    ])
}

fn status_style(message: &str) -> Style {
    if message.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else if message == crate::logic::status::STATUS_RECORDING {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Build all panel lines (extracted for testability)
pub fn build_controls_lines(model: &Model) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if model.ui.mode == Mode::Group {
        let params_focused = model.ui.focus == Focus::Params;
        for field in ParamField::ALL {
            lines.push(build_slider_line(
                field,
                params::get(&model.ui.params, field),
                params_focused && model.ui.selected_param == field,
                model.params_editable(),
            ));
        }
        lines.push(Line::raw(""));
    }

    lines.push(build_button_line(
        model.can_start(),
        model.can_stop(),
        model.ui.focus == Focus::Controls,
    ));
    lines.push(Line::raw(""));

    if !model.ui.status_message.is_empty() {
        lines.push(Line::from(Span::styled(
            model.ui.status_message.clone(),
            status_style(&model.ui.status_message),
        )));
    }

    lines
}

pub fn render_controls(f: &mut Frame, area: Rect, model: &Model) {
    let focused = matches!(model.ui.focus, Focus::Controls | Focus::Params);
    let border_color = if focused { Color::Cyan } else { Color::Gray };

    let paragraph = Paragraph::new(build_controls_lines(model))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", model.ui.mode.as_str()))
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(paragraph, area);
}
