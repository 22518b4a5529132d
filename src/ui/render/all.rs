use super::{category_menu, detail, footer, log, pagination, sort_menu, table, toolbar, Frame};
use crate::state::{Mode, State};
use ratatui::layout::{Constraint, Direction, Layout};

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    toolbar(frame, rows[0], state);

    let body = if state.show_log() {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(rows[1]);
        log(frame, split[1], state);
        split[0]
    } else {
        rows[1]
    };

    if state.expanded_job().is_some() {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(body);
        table(frame, split[0], state);
        detail(frame, split[1], state);
    } else {
        table(frame, body, state);
    }

    pagination(frame, rows[2], state);
    footer(frame, rows[3], state);

    let area = frame.size();
    match state.mode() {
        Mode::SortMenu => sort_menu(frame, area, state),
        Mode::CategoryMenu => category_menu(frame, area, state),
        _ => (),
    }
}
