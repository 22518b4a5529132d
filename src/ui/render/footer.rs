use super::Frame;
use crate::state::{Mode, State};
use crate::ui::theme::ColorSpec;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the mode label and key hints for the footer.
///
fn controls(mode: Mode) -> (&'static str, &'static str) {
    match mode {
        Mode::Browse => (
            "NORMAL:",
            " j/k: navigate, Enter: details, J/K: move row, /: search, s: sort, c: categories, h/l: page, r: refresh, d: log, q: quit",
        ),
        Mode::Search => ("SEARCH:", " Type to search, Backspace: delete, Enter/Esc: done"),
        Mode::SortMenu => ("SORT:", " j/k: navigate, Enter: select, Esc: close"),
        Mode::CategoryMenu => (
            "FILTER:",
            " j/k: navigate, Enter/Space: toggle, x: clear, Esc: close",
        ),
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (label, hints) = controls(state.mode());
    let label_bg: &ColorSpec = match state.mode() {
        Mode::Browse => &theme.footer_normal,
        Mode::Search => &theme.footer_search,
        Mode::SortMenu | Mode::CategoryMenu => &theme.footer_menu,
    };

    let controls_content = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(theme.text.to_color())
                .bg(label_bg.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(hints, Style::default().fg(theme.warning.to_color())),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    // Show the search term once search mode is left, otherwise the version
    let right_content = if state.mode() != Mode::Search && !state.search_term().is_empty() {
        Line::from(vec![Span::styled(
            format!("/{}", state.search_term()),
            Style::default().fg(theme.text_muted.to_color()),
        )])
    } else {
        Line::from(vec![Span::styled(
            format!(" {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme.secondary.to_color()),
        )])
    };

    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}
