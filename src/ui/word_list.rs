use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::logic::words::numbered;

/// Render the censor word list ("1. word" rows)
pub fn render_word_list(
    f: &mut Frame,
    area: Rect,
    words: &[String],
    selected: Option<usize>,
    focused: bool,
) {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" WORDS TO CENSOR ")
        .border_style(Style::default().fg(border_color));

    if words.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No words yet",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = numbered(words).into_iter().map(ListItem::new).collect();

    let highlight = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(Color::White))
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);
}
