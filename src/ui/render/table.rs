use super::widgets::spinner;
use super::Frame;
use crate::api::Job;
use crate::listing::parse_timestamp;
use crate::state::{FetchStatus, State};
use crate::ui::widgets::styling;
use chrono::DateTime;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

const HEADERS: [&str; 5] = ["Title", "Company", "Location", "Category", "Posted Date"];

/// Placeholder for absent values.
///
pub const MISSING: &str = "N/A";

/// Return the creation date of the job as `YYYY-MM-DD`.
///
pub fn posted_date(job: &Job) -> Option<String> {
    let millis = parse_timestamp(job.created_at.as_deref()?)?;
    DateTime::from_timestamp_millis(millis).map(|date| date.format("%Y-%m-%d").to_string())
}

fn row(job: &Job) -> Row<'static> {
    Row::new(vec![
        Cell::from(job.name.to_owned()),
        Cell::from(job.company().unwrap_or(MISSING).to_owned()),
        Cell::from(job.location_text().unwrap_or(MISSING).to_owned()),
        Cell::from(job.category().unwrap_or(MISSING).to_owned()),
        Cell::from(posted_date(job).unwrap_or_else(|| MISSING.to_string())),
    ])
}

/// Render the job table according to state.
///
pub fn table(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let pagination = state.pagination();
    let title = match pagination.total_pages() {
        Some(total) => format!("Jobs (page {} of {})", pagination.current_page(), total),
        None => "Jobs".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(&theme))
        .title(Span::styled(title, styling::active_block_title_style()));

    match state.status() {
        FetchStatus::Loading => {
            frame.render_widget(spinner::widget(state, size.height).block(block), size);
            return;
        }
        FetchStatus::Error => {
            let message = Paragraph::new(Line::from(Span::styled(
                "Something went wrong!",
                styling::error_text_style(&theme),
            )))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(message, size);
            return;
        }
        FetchStatus::Success => (),
    }

    if state.view().is_empty() {
        let message = Paragraph::new(Line::from(Span::styled(
            "No jobs found",
            styling::muted_text_style(&theme),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(message, size);
        return;
    }

    let rows: Vec<Row> = state.view().iter().map(row).collect();
    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(18),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
        Constraint::Length(12),
    ];
    let header = Row::new(HEADERS.to_vec())
        .style(styling::header_style(&theme))
        .bottom_margin(1);
    let table = Table::new(rows, widths)
        .header(header)
        .style(styling::normal_text_style(&theme))
        .highlight_style(styling::highlighted_row_style(&theme))
        .block(block);

    frame.render_stateful_widget(table, size, state.get_table_state());
}
