use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Frames cycled through on every tick while loading.
///
pub const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Return the frame for the spinner index.
///
pub fn frame(index: usize) -> &'static str {
    FRAMES[index % FRAMES.len()]
}

/// Return a centered spinner paragraph for an area of the given height.
///
pub fn widget(state: &State, height: u16) -> Paragraph<'static> {
    let frame = frame(*state.get_spinner_index());
    let mut lines: Vec<Line> = (0..height.saturating_sub(2) / 2)
        .map(|_| Line::from(""))
        .collect();
    lines.push(Line::from(Span::styled(
        format!("{} Loading jobs...", frame),
        styling::muted_text_style(state.get_theme()),
    )));
    Paragraph::new(lines).alignment(Alignment::Center)
}
