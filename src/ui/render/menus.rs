use super::Frame;
use crate::state::{CategoryMenuItem, SortMenuItem, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

/// Render the sort field menu as a popup.
///
pub fn sort_menu(frame: &mut Frame, size: Rect, state: &State) {
    let sort = state.sort_spec();
    let labels: Vec<String> = state
        .sort_menu_items()
        .iter()
        .map(|item| match item {
            SortMenuItem::Field(field) if sort.field == Some(*field) => {
                format!("{} {}", field.label(), sort.direction.arrow())
            }
            SortMenuItem::Field(field) => field.label().to_string(),
            SortMenuItem::Reset => "Reset".to_string(),
        })
        .collect();
    popup(frame, size, state, "Sort by", labels, 30);
}

/// Render the category filter menu as a popup.
///
pub fn category_menu(frame: &mut Frame, size: Rect, state: &State) {
    let labels: Vec<String> = state
        .category_menu_items()
        .iter()
        .map(|item| match item {
            CategoryMenuItem::Category(category) if state.is_category_selected(category) => {
                format!("[x] {}", category)
            }
            CategoryMenuItem::Category(category) => format!("[ ] {}", category),
            CategoryMenuItem::Clear => "Clear".to_string(),
        })
        .collect();
    popup(frame, size, state, "Categories (x: clear)", labels, 50);
}

fn popup(
    frame: &mut Frame,
    size: Rect,
    state: &State,
    title: &str,
    labels: Vec<String>,
    percent_x: u16,
) {
    let theme = state.get_theme();
    let height = labels.len() as u16 + 2;
    let area = centered_rect(percent_x, height, size);
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = labels.into_iter().map(ListItem::new).collect();
    let list = List::new(items)
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::highlighted_row_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(theme))
                .title(Span::styled(
                    title.to_owned(),
                    styling::active_block_title_style(),
                )),
        );
    let mut list_state = ListState::default();
    list_state.select(Some(state.menu_index()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Return a rectangle of the given width percentage and line height centered
/// within the area.
///
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
