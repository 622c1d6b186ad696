//! Word Input UI
//!
//! Renders the new-word input box with placeholder and blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const PLACEHOLDER: &str = "Input Box";

/// Longest suffix of `text` that fits in `max_width` columns
///
/// Long input scrolls so the end (where the cursor is) stays visible.
pub fn visible_tail(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }
    let mut width = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &text[start..]
}

/// Render the input box under the word list
///
/// # Arguments
/// - `text`: Current pending input
/// - `active`: Whether the box is receiving keystrokes
pub fn render_word_input(f: &mut Frame, area: Rect, text: &str, active: bool) {
    let title = if active {
        " Add word - Enter to submit, Esc to leave "
    } else {
        " Add word (a) "
    };
    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    // Borders plus one cell for the cursor
    let max_width = (area.width as usize).saturating_sub(3);

    let line = if text.is_empty() {
        let mut spans = Vec::new();
        if active {
            spans.push(Span::styled("█", cursor_style));
        }
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)));
        Line::from(spans)
    } else if active {
        Line::from(vec![
            Span::raw(visible_tail(text, max_width).to_string()),
            Span::styled("█", cursor_style),
        ])
    } else {
        Line::from(Span::styled(
            visible_tail(text, max_width).to_string(),
            Style::default().fg(Color::Gray),
        ))
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}
