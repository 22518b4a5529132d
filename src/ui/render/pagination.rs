use super::Frame;
use crate::state::{Pagination, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

fn controls<'a>(theme: &Theme, pagination: &Pagination) -> Line<'a> {
    let enabled = |on: bool| {
        if on {
            styling::normal_text_style(theme)
        } else {
            styling::muted_text_style(theme)
        }
    };
    let mut spans = vec![Span::styled("◀ Previous (h)", enabled(pagination.has_previous()))];
    for page in pagination.visible_pages() {
        spans.push(Span::raw("  "));
        if page == pagination.current_page() {
            spans.push(Span::styled(
                format!("[{}]", page),
                styling::highlighted_row_style(theme),
            ));
        } else {
            spans.push(Span::styled(
                page.to_string(),
                styling::normal_text_style(theme),
            ));
        }
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled("Next (l) ▶", enabled(pagination.has_next())));
    Line::from(spans)
}

/// Render page navigation once the page count is known.
///
pub fn pagination(frame: &mut Frame, size: Rect, state: &State) {
    let pagination = state.pagination();
    if !matches!(pagination.total_pages(), Some(total) if total > 0) {
        return;
    }
    let widget =
        Paragraph::new(controls(state.get_theme(), pagination)).alignment(Alignment::Center);
    frame.render_widget(widget, size);
}
