use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{Focus, Model};
use crate::Mode;

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    vim_mode: bool,
    focus: Focus,
    mode: Mode,
    recording: bool,
) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Typing swallows letter keys, so only the box's own keys apply
    if focus == Focus::Input {
        hotkey_spans.extend(vec![
            key("Enter"),
            Span::raw(":Add Word  "),
            key("Esc"),
            Span::raw(":Done  "),
            key("Tab"),
            Span::raw(":Next Panel"),
        ]);
        return hotkey_spans;
    }

    hotkey_spans.extend(vec![key("Tab"), Span::raw(":Next Panel  ")]);

    let (up_down, left_right) = if vim_mode {
        ("j/k", "h/l")
    } else {
        ("↑/↓", "←/→")
    };

    match focus {
        Focus::Controls => {
            hotkey_spans.extend(vec![
                key("Enter"),
                Span::raw(if recording { ":Stop  " } else { ":Start  " }),
            ]);
        }
        Focus::Params => {
            hotkey_spans.extend(vec![key(up_down), Span::raw(":Select  ")]);
            // Sliders are locked while recording
            if !recording {
                hotkey_spans.extend(vec![key(left_right), Span::raw(":Adjust  ")]);
            }
        }
        Focus::Words => {
            hotkey_spans.extend(vec![
                key(up_down),
                Span::raw(":Select  "),
                key("d"),
                Span::raw(":Remove  "),
            ]);
        }
        Focus::Input => {}
    }

    hotkey_spans.extend(vec![key("a"), Span::raw(":Add Word  ")]);

    if recording {
        hotkey_spans.extend(vec![key("x"), Span::raw(":Stop  ")]);
    } else {
        hotkey_spans.extend(vec![key("r"), Span::raw(":Start  ")]);
    }

    let switch_label = match mode {
        Mode::Safe => ":Group Mode  ",
        Mode::Group => ":Safe Mode  ",
    };
    hotkey_spans.extend(vec![key("m"), Span::raw(switch_label)]);

    hotkey_spans.extend(vec![key("q"), Span::raw(":Quit")]);

    hotkey_spans
}

fn spans_for(model: &Model) -> Vec<Span<'static>> {
    build_hotkey_spans(
        model.ui.vim_mode,
        model.ui.focus,
        model.ui.mode,
        model.backend.recording,
    )
}

/// Build the legend paragraph
pub fn build_legend_paragraph(model: &Model) -> Paragraph<'static> {
    Paragraph::new(vec![Line::from(spans_for(model))])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend (changes with focus, mode and recording state)
pub fn render_legend(f: &mut Frame, area: Rect, model: &Model) {
    f.render_widget(build_legend_paragraph(model), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, model: &Model) -> u16 {
    // line_count() doesn't account for borders when a block is attached
    let paragraph_for_counting = Paragraph::new(vec![Line::from(spans_for(model))])
        .wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    (line_count as u16).saturating_add(2).max(3)
}
