use super::Frame;
use crate::state::{Mode, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the search input and the sort and category indicators.
///
pub fn toolbar(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(28),
            Constraint::Length(26),
        ])
        .split(size);

    let searching = state.mode() == Mode::Search;
    let search_block = Block::default()
        .borders(Borders::ALL)
        .title("Search")
        .border_style(if searching {
            styling::active_block_border_style(theme)
        } else {
            styling::normal_block_border_style(theme)
        });
    let search_line = if state.search_term().is_empty() && !searching {
        Line::from(Span::styled(
            "Press / to search by title",
            styling::muted_text_style(theme),
        ))
    } else if searching {
        Line::from(Span::styled(
            format!("{}▏", state.search_term()),
            styling::normal_text_style(theme),
        ))
    } else {
        Line::from(Span::styled(
            state.search_term().to_owned(),
            styling::normal_text_style(theme),
        ))
    };
    frame.render_widget(Paragraph::new(search_line).block(search_block), columns[0]);

    let sort = state.sort_spec();
    let sort_text = match sort.field {
        Some(field) => format!("{} {}", field.label(), sort.direction.arrow()),
        None => "None".to_string(),
    };
    let sort_widget = Paragraph::new(Line::from(Span::styled(
        sort_text,
        styling::normal_text_style(theme),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Sort (s)")
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(sort_widget, columns[1]);

    let selected = state.selected_categories().len();
    let category_line = if selected == 0 {
        Line::from(Span::styled("All", styling::muted_text_style(theme)))
    } else {
        Line::from(vec![
            Span::styled("● ", styling::label_style(theme)),
            Span::styled(
                format!("{} selected", selected),
                styling::normal_text_style(theme),
            ),
        ])
    };
    let category_widget = Paragraph::new(category_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Categories (c)")
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(category_widget, columns[2]);
}
