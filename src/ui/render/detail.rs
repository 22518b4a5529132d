use super::table::{posted_date, MISSING};
use super::Frame;
use crate::api::{Job, NamedItem};
use crate::state::State;
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

fn names(items: &[NamedItem]) -> String {
    if items.is_empty() {
        return MISSING.to_string();
    }
    items
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<&str>>()
        .join(", ")
}

fn field<'a>(theme: &Theme, label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), styling::label_style(theme)),
        Span::styled(value, styling::normal_text_style(theme)),
    ])
}

fn lines<'a>(theme: &Theme, job: &Job) -> Vec<Line<'a>> {
    let text = |value: Option<&str>| value.unwrap_or(MISSING).to_string();
    vec![
        field(theme, "Summary", text(job.summary.as_deref())),
        Line::from(""),
        field(theme, "Skills", names(&job.skills)),
        field(theme, "Location", text(job.location_text())),
        field(theme, "Category", text(job.category())),
        field(
            theme,
            "Posted",
            posted_date(job).unwrap_or_else(|| MISSING.to_string()),
        ),
        field(theme, "Certifications", names(&job.certifications)),
        field(theme, "Tasks", names(&job.tasks)),
    ]
}

/// Render details of the expanded job.
///
pub fn detail(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let job = match state.expanded_job() {
        Some(job) => job,
        None => return,
    };
    let title = match job.company() {
        Some(company) => format!("{} at {}", job.name, company),
        None => job.name.to_owned(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(Span::styled(title, styling::active_block_title_style()));
    let paragraph = Paragraph::new(lines(theme, job))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, size);
}
