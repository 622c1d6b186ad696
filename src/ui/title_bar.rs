use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::Model;
use crate::Mode;

/// Mode tab, highlighted when selected ("Group Mode | Safe Mode")
fn mode_tab(mode: Mode, selected: Mode) -> Span<'static> {
    if mode == selected {
        Span::styled(
            format!("[{}]", mode.as_str()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!(" {} ", mode.as_str()),
            Style::default().fg(Color::DarkGray),
        )
    }
}

fn last_update_text(at: Option<&DateTime<Local>>) -> String {
    match at {
        Some(at) => format!("Updated {}", at.format("%H:%M:%S")),
        None => "Waiting for backend...".to_string(),
    }
}

/// Build the title line (extracted for testability)
pub fn build_title_line(model: &Model) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            "EchoEase",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        mode_tab(Mode::Group, model.ui.mode),
        Span::raw(" | "),
        mode_tab(Mode::Safe, model.ui.mode),
        Span::raw("  "),
    ];

    if model.backend.recording {
        spans.push(Span::styled("● REC", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" | "));
    }

    spans.push(Span::raw(last_update_text(
        model.backend.last_status_at.as_ref(),
    )));

    Line::from(spans)
}

/// Render the title bar at the top of the screen
pub fn render_title_bar(f: &mut Frame, area: Rect, model: &Model) {
    let widget = Paragraph::new(build_title_line(model))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(widget, area);
}
