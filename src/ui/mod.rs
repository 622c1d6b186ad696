// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (title, panels, legend)
// - render: Main orchestration function that coordinates all rendering
// - title_bar: Renders app name, mode tabs and last status time
// - controls: Renders sliders, START/STOP buttons and status line
// - word_list: Renders the censor word list
// - input: Renders the new-word input box
// - legend: Renders hotkey legend
// - dialogs: Renders the blocking notification

pub mod controls;
pub mod dialogs;
pub mod input;
pub mod layout;
pub mod legend;
pub mod render;
pub mod title_bar;
pub mod word_list;

// Re-export main render function for convenience
pub use render::render;
