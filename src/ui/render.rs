use ratatui::Frame;

use super::{controls, dialogs, input, layout, legend, title_bar, word_list};
use crate::model::{Focus, Model};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, model: &Model) {
    let layout_info = layout::calculate_layout(f.area(), model);

    title_bar::render_title_bar(f, layout_info.title_area, model);
    controls::render_controls(f, layout_info.controls_area, model);

    word_list::render_word_list(
        f,
        layout_info.words_area,
        &model.backend.words,
        model.ui.selected_word,
        model.ui.focus == Focus::Words,
    );
    input::render_word_input(
        f,
        layout_info.input_area,
        &model.ui.pending_word_input,
        model.ui.is_typing(),
    );

    legend::render_legend(f, layout_info.legend_area, model);

    // Modal last so it draws on top
    if let Some(message) = &model.ui.notification {
        dialogs::render_notification(f, message);
    }
}
