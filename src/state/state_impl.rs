use crate::api::{Job, JobPage, JobQuery};
use crate::app::NetworkEventSender;
use crate::config::Config;
use crate::events::network::Event as NetworkEvent;
use crate::listing::{derive_view, move_row, SortField, SortSpec};
use crate::logger::LogBuffer;
use crate::preferences::{MemoryStorage, Preferences};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use ratatui::layout::Rect;
use ratatui::widgets::TableState;

use super::error::StateError;
use super::navigation::{CategoryMenuItem, FetchStatus, Mode, SortMenuItem};
use super::pagination::Pagination;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    board_keys: Vec<String>,
    page_size: u32,
    available_categories: Vec<String>,
    status: FetchStatus,
    jobs: Vec<Job>,
    view: Vec<Job>,
    search_term: String,
    preferences: Preferences,
    pagination: Pagination,
    latest_request: u64,
    expanded_job: Option<u64>,
    table_state: TableState,
    mode: Mode,
    menu_index: usize,
    show_log: bool,
    log_buffer: LogBuffer,
    spinner_index: usize,
    theme: Theme,
    terminal_size: Rect,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        let config = Config::default();
        State {
            net_sender: None,
            board_keys: config.board_keys,
            page_size: config.page_size,
            available_categories: config.categories,
            status: FetchStatus::Loading,
            jobs: vec![],
            view: vec![],
            search_term: String::new(),
            preferences: Preferences::load(Box::new(MemoryStorage::new())),
            pagination: Pagination::default(),
            latest_request: 0,
            expanded_job: None,
            table_state: TableState::default(),
            mode: Mode::Browse,
            menu_index: 0,
            show_log: false,
            log_buffer: LogBuffer::new(),
            spinner_index: 0,
            theme: Theme::default(),
            terminal_size: Rect::default(),
        }
    }
}

impl State {
    pub fn new(
        net_sender: NetworkEventSender,
        config: &Config,
        preferences: Preferences,
        log_buffer: LogBuffer,
    ) -> Self {
        State {
            net_sender: Some(net_sender),
            board_keys: config.board_keys.clone(),
            page_size: config.page_size,
            available_categories: config.categories.clone(),
            preferences,
            log_buffer,
            theme: Theme::from_name(&config.theme_name).unwrap_or_default(),
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Sets the terminal size.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    pub fn terminal_size(&self) -> Rect {
        self.terminal_size
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    /// Return the query for the current page.
    ///
    pub fn current_query(&self) -> JobQuery {
        JobQuery::new(
            self.board_keys.clone(),
            self.pagination.current_page(),
            self.page_size,
        )
    }

    /// Dispatch a fetch of the current page. The new request supersedes any
    /// request still in flight.
    ///
    pub fn request_jobs(&mut self) -> Result<(), StateError> {
        self.latest_request += 1;
        self.status = FetchStatus::Loading;
        let event = NetworkEvent::FetchJobs {
            request_id: self.latest_request,
            query: self.current_query(),
        };
        debug!(
            "Requesting page {} (request {})...",
            self.pagination.current_page(),
            self.latest_request
        );
        let sent = match &self.net_sender {
            Some(sender) => sender.send(event).is_ok(),
            None => false,
        };
        if !sent {
            self.status = FetchStatus::Error;
            return Err(StateError::NetworkUnavailable);
        }
        Ok(())
    }

    /// Return the id of the most recently requested fetch.
    ///
    pub fn latest_request_id(&self) -> u64 {
        self.latest_request
    }

    /// Apply a fetched page. Returns false when the page answers a request
    /// that has since been superseded.
    ///
    pub fn set_job_page(&mut self, request_id: u64, page: JobPage) -> bool {
        if request_id != self.latest_request {
            debug!(
                "Ignoring stale response for request {} (latest is {})",
                request_id, self.latest_request
            );
            return false;
        }
        // A zero or absent page count leaves navigation as it was
        match page.meta.as_ref().and_then(|meta| meta.max_page) {
            Some(max_page) if max_page > 0 => {
                if self.pagination.update_total_pages(max_page) {
                    debug!("Total pages is now {}", max_page);
                }
            }
            _ => (),
        }
        self.jobs = page.jobs;
        self.status = FetchStatus::Success;
        self.expanded_job = None;
        self.table_state.select(None);
        self.recompute_view();
        true
    }

    /// Record a failed fetch. Returns false when the failure answers a request
    /// that has since been superseded.
    ///
    pub fn set_fetch_error(&mut self, request_id: u64) -> bool {
        if request_id != self.latest_request {
            debug!("Ignoring stale failure for request {}", request_id);
            return false;
        }
        self.jobs.clear();
        self.status = FetchStatus::Error;
        self.expanded_job = None;
        self.recompute_view();
        true
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Return the fetched page in fetch order.
    ///
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Return the rows to display.
    ///
    pub fn view(&self) -> &[Job] {
        &self.view
    }

    /// Derive the displayed rows from the fetched page, the search term, the
    /// sort spec and the category filter. Any manual row order is discarded.
    ///
    pub fn recompute_view(&mut self) {
        self.view = derive_view(
            &self.jobs,
            &self.search_term,
            &self.preferences.sort_spec(),
            self.preferences.categories(),
        );
        if self.view.is_empty() {
            self.table_state.select(None);
        } else {
            let selected = self.table_state.selected().unwrap_or(0);
            self.table_state
                .select(Some(selected.min(self.view.len() - 1)));
        }
    }

    /// Return the current mode.
    ///
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Return the search term.
    ///
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn enter_search_mode(&mut self) -> &mut Self {
        self.mode = Mode::Search;
        self
    }

    pub fn exit_search_mode(&mut self) -> &mut Self {
        self.mode = Mode::Browse;
        self
    }

    /// Append a character to the search term.
    ///
    pub fn add_search_char(&mut self, c: char) -> &mut Self {
        self.search_term.push(c);
        self.recompute_view();
        self
    }

    /// Remove the last character of the search term.
    ///
    pub fn remove_search_char(&mut self) -> &mut Self {
        if self.search_term.pop().is_some() {
            self.recompute_view();
        }
        self
    }

    pub fn clear_search(&mut self) -> &mut Self {
        self.search_term.clear();
        self.recompute_view();
        self
    }

    /// Return the active sort specification.
    ///
    pub fn sort_spec(&self) -> SortSpec {
        self.preferences.sort_spec()
    }

    /// Choose a sort field, flipping the direction when it is already active.
    /// The view is recomputed even if persisting the choice fails.
    ///
    pub fn select_sort_field(&mut self, field: SortField) -> Result<(), StateError> {
        let result = self.preferences.select_sort_field(field);
        self.recompute_view();
        Ok(result?)
    }

    /// Return to fetch order.
    ///
    pub fn reset_sort(&mut self) -> Result<(), StateError> {
        let result = self.preferences.reset_sort();
        self.recompute_view();
        Ok(result?)
    }

    /// Return the selected category labels.
    ///
    pub fn selected_categories(&self) -> &[String] {
        self.preferences.categories()
    }

    pub fn is_category_selected(&self, category: &str) -> bool {
        self.preferences.is_category_selected(category)
    }

    /// Return the category labels offered in the category menu.
    ///
    pub fn available_categories(&self) -> &[String] {
        &self.available_categories
    }

    pub fn toggle_category(&mut self, category: &str) -> Result<(), StateError> {
        let result = self.preferences.toggle_category(category);
        self.recompute_view();
        Ok(result?)
    }

    pub fn clear_categories(&mut self) -> Result<(), StateError> {
        let result = self.preferences.clear_categories();
        self.recompute_view();
        Ok(result?)
    }

    /// Return the pagination state.
    ///
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Move to the target page and fetch it. Returns false, leaving the page
    /// and the fetch state untouched, when the target is out of range.
    ///
    pub fn change_page(&mut self, target: u32) -> Result<bool, StateError> {
        if !self.pagination.change_page(target) {
            debug!("Rejected change to page {}", target);
            return Ok(false);
        }
        self.request_jobs()?;
        Ok(true)
    }

    pub fn next_page(&mut self) -> Result<bool, StateError> {
        self.change_page(self.pagination.current_page() + 1)
    }

    pub fn previous_page(&mut self) -> Result<bool, StateError> {
        self.change_page(self.pagination.current_page().saturating_sub(1))
    }

    /// Return the table state used to render the job rows.
    ///
    pub fn get_table_state(&mut self) -> &mut TableState {
        &mut self.table_state
    }

    /// Return the selected row, if any.
    ///
    pub fn selected_job(&self) -> Option<&Job> {
        self.table_state
            .selected()
            .and_then(|index| self.view.get(index))
    }

    /// Select the next row.
    ///
    pub fn next_job(&mut self) -> &mut Self {
        if self.view.is_empty() {
            return self;
        }
        let next = match self.table_state.selected() {
            Some(index) if index + 1 < self.view.len() => index + 1,
            Some(index) => index,
            None => 0,
        };
        self.table_state.select(Some(next));
        self
    }

    /// Select the previous row.
    ///
    pub fn previous_job(&mut self) -> &mut Self {
        if self.view.is_empty() {
            return self;
        }
        let previous = self
            .table_state
            .selected()
            .map(|index| index.saturating_sub(1))
            .unwrap_or(0);
        self.table_state.select(Some(previous));
        self
    }

    /// Show or hide the details of the selected row.
    ///
    pub fn toggle_expanded(&mut self) -> &mut Self {
        let selected_id = self.selected_job().map(|job| job.id);
        self.expanded_job = match (self.expanded_job, selected_id) {
            (Some(expanded), Some(selected)) if expanded == selected => None,
            (_, selected) => selected,
        };
        self
    }

    /// Return the expanded job if it is still displayed.
    ///
    pub fn expanded_job(&self) -> Option<&Job> {
        self.expanded_job
            .and_then(|id| self.view.iter().find(|job| job.id == id))
    }

    /// Swap the selected row with the one above it.
    ///
    pub fn move_selected_up(&mut self) -> bool {
        match self.table_state.selected() {
            Some(index) if index > 0 => self.move_selected(index, index - 1),
            _ => false,
        }
    }

    /// Swap the selected row with the one below it.
    ///
    pub fn move_selected_down(&mut self) -> bool {
        match self.table_state.selected() {
            Some(index) => self.move_selected(index, index + 1),
            None => false,
        }
    }

    fn move_selected(&mut self, from: usize, to: usize) -> bool {
        if move_row(&mut self.view, from, to) {
            self.table_state.select(Some(to));
            return true;
        }
        false
    }

    /// Return the entries of the sort menu. Reset is only offered while a
    /// field is active.
    ///
    pub fn sort_menu_items(&self) -> Vec<SortMenuItem> {
        let mut items: Vec<SortMenuItem> = SortField::ALL
            .iter()
            .map(|field| SortMenuItem::Field(*field))
            .collect();
        if self.sort_spec().field.is_some() {
            items.push(SortMenuItem::Reset);
        }
        items
    }

    /// Return the entries of the category menu.
    ///
    pub fn category_menu_items(&self) -> Vec<CategoryMenuItem> {
        let mut items: Vec<CategoryMenuItem> = self
            .available_categories
            .iter()
            .map(|c| CategoryMenuItem::Category(c.to_owned()))
            .collect();
        items.push(CategoryMenuItem::Clear);
        items
    }

    pub fn open_sort_menu(&mut self) -> &mut Self {
        self.mode = Mode::SortMenu;
        self.menu_index = 0;
        self
    }

    pub fn open_category_menu(&mut self) -> &mut Self {
        self.mode = Mode::CategoryMenu;
        self.menu_index = 0;
        self
    }

    pub fn close_menu(&mut self) -> &mut Self {
        self.mode = Mode::Browse;
        self.menu_index = 0;
        self
    }

    /// Return the highlighted menu entry index.
    ///
    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    fn menu_len(&self) -> usize {
        match self.mode {
            Mode::SortMenu => self.sort_menu_items().len(),
            Mode::CategoryMenu => self.category_menu_items().len(),
            _ => 0,
        }
    }

    /// Highlight the next menu entry, wrapping around.
    ///
    pub fn next_menu_item(&mut self) -> &mut Self {
        let len = self.menu_len();
        if len > 0 {
            self.menu_index = (self.menu_index + 1) % len;
        }
        self
    }

    /// Highlight the previous menu entry, wrapping around.
    ///
    pub fn previous_menu_item(&mut self) -> &mut Self {
        let len = self.menu_len();
        if len > 0 {
            self.menu_index = (self.menu_index + len - 1) % len;
        }
        self
    }

    /// Apply the highlighted menu entry. The sort menu closes afterwards, the
    /// category menu stays open for further toggles.
    ///
    pub fn select_menu_item(&mut self) -> Result<(), StateError> {
        match self.mode {
            Mode::SortMenu => {
                let item = self.sort_menu_items().get(self.menu_index).copied();
                self.close_menu();
                match item {
                    Some(SortMenuItem::Field(field)) => self.select_sort_field(field),
                    Some(SortMenuItem::Reset) => self.reset_sort(),
                    None => Ok(()),
                }
            }
            Mode::CategoryMenu => match self.category_menu_items().get(self.menu_index) {
                Some(CategoryMenuItem::Category(category)) => {
                    let category = category.to_owned();
                    self.toggle_category(&category)
                }
                Some(CategoryMenuItem::Clear) => self.clear_categories(),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }

    /// Return whether the log panel is shown.
    ///
    pub fn show_log(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    /// Return the most recent log entries, oldest first.
    ///
    pub fn log_entries(&self, count: usize) -> Vec<String> {
        self.log_buffer.recent(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{PageMeta, Tag};
    use crate::preferences::{Storage, CATEGORIES_KEY, SORT_DIRECTION_KEY, SORT_FIELD_KEY};
    use crate::listing::SortDirection;
    use fake::{Fake, Faker};
    use std::sync::mpsc::{self, Receiver};

    fn job(id: u64, name: &str, category: &str) -> Job {
        Job {
            id,
            name: name.to_string(),
            tags: vec![Tag {
                name: "category".to_string(),
                value: Some(category.to_string()),
            }],
            ..Job::default()
        }
    }

    fn page(jobs: Vec<Job>, max_page: u32) -> JobPage {
        JobPage {
            jobs,
            meta: Some(PageMeta {
                max_page: Some(max_page),
                ..PageMeta::default()
            }),
        }
    }

    fn connected_state() -> (State, Receiver<NetworkEvent>) {
        let (tx, rx) = mpsc::channel();
        let state = State {
            net_sender: Some(tx),
            ..State::default()
        };
        (state, rx)
    }

    fn names(state: &State) -> Vec<&str> {
        state.view().iter().map(|j| j.name.as_str()).collect()
    }

    #[test]
    fn advance_spinner_index() {
        let mut state = State::default();
        state.advance_spinner_index();
        assert_eq!(state.spinner_index, 1);
        for _ in 0..SPINNER_FRAME_COUNT {
            state.advance_spinner_index();
        }
        assert_eq!(state.spinner_index, 1);
    }

    #[test]
    fn request_jobs_dispatches_current_query() {
        let (mut state, rx) = connected_state();
        state.request_jobs().unwrap();
        assert_eq!(state.status(), FetchStatus::Loading);
        match rx.try_recv().unwrap() {
            NetworkEvent::FetchJobs { request_id, query } => {
                assert_eq!(request_id, 1);
                assert_eq!(query.page, 1);
                assert_eq!(query.limit, 10);
            }
        }
    }

    #[test]
    fn request_jobs_without_network_is_an_error() {
        let mut state = State::default();
        assert!(matches!(
            state.request_jobs(),
            Err(StateError::NetworkUnavailable)
        ));
        assert_eq!(state.status(), FetchStatus::Error);
    }

    #[test]
    fn stale_responses_are_ignored() {
        let (mut state, _rx) = connected_state();
        state.request_jobs().unwrap();
        state.request_jobs().unwrap();
        let late = vec![job(1, "Late", "Engineering")];
        assert!(!state.set_job_page(1, page(late, 3)));
        assert_eq!(state.status(), FetchStatus::Loading);
        assert!(state.jobs().is_empty());
        assert_eq!(state.pagination().total_pages(), None);

        let fresh = vec![job(2, "Fresh", "Engineering")];
        assert!(state.set_job_page(2, page(fresh, 3)));
        assert_eq!(state.status(), FetchStatus::Success);
        assert_eq!(names(&state), vec!["Fresh"]);
        assert_eq!(state.pagination().total_pages(), Some(3));
        assert!(!state.set_fetch_error(1));
        assert_eq!(state.status(), FetchStatus::Success);
    }

    #[test]
    fn fetch_error_clears_rows() {
        let (mut state, _rx) = connected_state();
        state.request_jobs().unwrap();
        state.set_job_page(1, page(vec![Faker.fake::<Job>()], 1));
        state.request_jobs().unwrap();
        assert!(state.set_fetch_error(2));
        assert_eq!(state.status(), FetchStatus::Error);
        assert!(state.view().is_empty());
        assert!(state.selected_job().is_none());
    }

    #[test]
    fn missing_meta_keeps_total_pages() {
        let (mut state, _rx) = connected_state();
        state.request_jobs().unwrap();
        state.set_job_page(1, page(vec![], 4));
        state.request_jobs().unwrap();
        state.set_job_page(
            2,
            JobPage {
                jobs: vec![],
                meta: None,
            },
        );
        assert_eq!(state.pagination().total_pages(), Some(4));
        assert_eq!(state.status(), FetchStatus::Success);
    }

    #[test]
    fn partial_meta_keeps_total_pages() {
        let (mut state, _rx) = connected_state();
        state.request_jobs().unwrap();
        state.set_job_page(1, page(vec![], 4));

        let meta: PageMeta = serde_json::from_str(r#"{"count":0,"page":1,"total":0}"#).unwrap();
        assert_eq!(meta.max_page, None);
        state.request_jobs().unwrap();
        state.set_job_page(
            2,
            JobPage {
                jobs: vec![],
                meta: Some(meta),
            },
        );
        assert_eq!(state.pagination().total_pages(), Some(4));

        state.request_jobs().unwrap();
        state.set_job_page(3, page(vec![], 0));
        assert_eq!(state.pagination().total_pages(), Some(4));
        assert!(state.change_page(2).unwrap());
    }

    #[test]
    fn selecting_name_three_times_toggles_direction() {
        let (mut state, _rx) = connected_state();
        state.request_jobs().unwrap();
        state.set_job_page(
            1,
            page(
                vec![
                    job(1, "Designer", "Design"),
                    job(2, "analyst", "Analytics"),
                    job(3, "Engineer", "Engineering"),
                    job(4, "Consultant", "Consulting"),
                ],
                1,
            ),
        );

        state.select_sort_field(SortField::Name).unwrap();
        let ascending: Vec<String> = names(&state).iter().map(|n| n.to_string()).collect();
        assert_eq!(ascending, vec!["analyst", "Consultant", "Designer", "Engineer"]);

        state.select_sort_field(SortField::Name).unwrap();
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(names(&state), reversed);

        state.select_sort_field(SortField::Name).unwrap();
        assert_eq!(names(&state), ascending);
    }

    #[test]
    fn view_recomputes_on_every_input() {
        let (mut state, _rx) = connected_state();
        state.request_jobs().unwrap();
        state.set_job_page(
            1,
            page(
                vec![
                    job(1, "Data Analyst", "Analytics"),
                    job(2, "Backend Engineer", "Engineering"),
                    job(3, "Data Engineer", "Engineering"),
                ],
                1,
            ),
        );
        assert_eq!(
            names(&state),
            vec!["Data Analyst", "Backend Engineer", "Data Engineer"]
        );

        state.select_sort_field(SortField::Name).unwrap();
        assert_eq!(
            names(&state),
            vec!["Backend Engineer", "Data Analyst", "Data Engineer"]
        );

        state.add_search_char('d').add_search_char('a');
        assert_eq!(names(&state), vec!["Data Analyst", "Data Engineer"]);

        state.toggle_category("engineering").unwrap();
        assert_eq!(names(&state), vec!["Data Engineer"]);

        state.clear_search();
        assert_eq!(names(&state), vec!["Backend Engineer", "Data Engineer"]);

        state.clear_categories().unwrap();
        state.reset_sort().unwrap();
        assert_eq!(
            names(&state),
            vec!["Data Analyst", "Backend Engineer", "Data Engineer"]
        );
    }

    #[test]
    fn reselecting_sort_field_toggles_direction() {
        let mut state = State::default();
        state.select_sort_field(SortField::CreatedAt).unwrap();
        assert_eq!(
            state.sort_spec(),
            SortSpec::new(SortField::CreatedAt, SortDirection::Asc)
        );
        state.select_sort_field(SortField::CreatedAt).unwrap();
        assert_eq!(
            state.sort_spec(),
            SortSpec::new(SortField::CreatedAt, SortDirection::Desc)
        );
        state.select_sort_field(SortField::Name).unwrap();
        assert_eq!(
            state.sort_spec(),
            SortSpec::new(SortField::Name, SortDirection::Asc)
        );
    }

    #[test]
    fn out_of_range_page_change_is_rejected() {
        let (mut state, rx) = connected_state();
        state.request_jobs().unwrap();
        state.set_job_page(1, page(vec![job(1, "Only", "Engineering")], 3));
        let _ = rx.try_recv();

        assert!(!state.change_page(0).unwrap());
        assert!(!state.change_page(4).unwrap());
        assert!(!state.previous_page().unwrap());
        assert_eq!(state.pagination().current_page(), 1);
        assert_eq!(state.status(), FetchStatus::Success);
        assert_eq!(state.latest_request_id(), 1);
        assert!(rx.try_recv().is_err());

        assert!(state.change_page(3).unwrap());
        assert_eq!(state.pagination().current_page(), 3);
        assert_eq!(state.status(), FetchStatus::Loading);
        match rx.try_recv().unwrap() {
            NetworkEvent::FetchJobs { request_id, query } => {
                assert_eq!(request_id, 2);
                assert_eq!(query.page, 3);
            }
        }
        assert!(!state.next_page().unwrap());
    }

    #[test]
    fn row_navigation_and_moves() {
        let (mut state, _rx) = connected_state();
        state.request_jobs().unwrap();
        state.set_job_page(
            1,
            page(
                vec![
                    job(1, "First", "A"),
                    job(2, "Second", "A"),
                    job(3, "Third", "A"),
                ],
                1,
            ),
        );
        assert_eq!(state.selected_job().map(|j| j.id), Some(1));
        state.previous_job();
        assert_eq!(state.selected_job().map(|j| j.id), Some(1));
        state.next_job().next_job().next_job();
        assert_eq!(state.selected_job().map(|j| j.id), Some(3));

        assert!(!state.move_selected_down());
        assert!(state.move_selected_up());
        assert_eq!(names(&state), vec!["First", "Third", "Second"]);
        assert_eq!(state.selected_job().map(|j| j.id), Some(3));
        assert_eq!(state.jobs()[2].name, "Third");

        state.recompute_view();
        assert_eq!(names(&state), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn toggle_expanded_follows_selection() {
        let (mut state, _rx) = connected_state();
        state.request_jobs().unwrap();
        state.set_job_page(1, page(vec![job(1, "First", "A"), job(2, "Second", "A")], 1));
        state.toggle_expanded();
        assert_eq!(state.expanded_job().map(|j| j.id), Some(1));
        state.next_job().toggle_expanded();
        assert_eq!(state.expanded_job().map(|j| j.id), Some(2));
        state.toggle_expanded();
        assert!(state.expanded_job().is_none());
    }

    #[test]
    fn sort_menu_offers_reset_only_when_active() {
        let mut state = State::default();
        assert!(!state.sort_menu_items().contains(&SortMenuItem::Reset));

        state.open_sort_menu();
        state.select_menu_item().unwrap();
        assert_eq!(state.mode(), Mode::Browse);
        assert_eq!(state.sort_spec().field, Some(SortField::Name));
        assert_eq!(state.sort_menu_items().last(), Some(&SortMenuItem::Reset));

        state.open_sort_menu();
        state.previous_menu_item();
        state.select_menu_item().unwrap();
        assert_eq!(state.sort_spec().field, None);
    }

    #[test]
    fn category_menu_toggles_and_clears() {
        let mut state = State::default();
        state.open_category_menu();
        state.next_menu_item();
        state.select_menu_item().unwrap();
        assert_eq!(state.mode(), Mode::CategoryMenu);
        assert!(state.is_category_selected("Artificial Intelligence"));

        state.previous_menu_item().previous_menu_item();
        assert_eq!(
            state.category_menu_items()[state.menu_index()],
            CategoryMenuItem::Clear
        );
        state.select_menu_item().unwrap();
        assert!(state.selected_categories().is_empty());
        state.close_menu();
        assert_eq!(state.mode(), Mode::Browse);
    }

    #[test]
    fn preferences_are_written_through() {
        struct Recording(std::sync::Arc<std::sync::Mutex<Vec<String>>>);
        impl Storage for Recording {
            fn get(&self, _key: &str) -> Option<String> {
                None
            }
            fn set(&mut self, key: &str, _value: String) -> Result<(), crate::preferences::PreferenceError> {
                if let Ok(mut keys) = self.0.lock() {
                    keys.push(key.to_string());
                }
                Ok(())
            }
        }
        let keys = std::sync::Arc::new(std::sync::Mutex::new(vec![]));
        let mut state = State {
            preferences: Preferences::load(Box::new(Recording(keys.clone()))),
            ..State::default()
        };
        state.select_sort_field(SortField::Category).unwrap();
        state.toggle_category("Human Resources").unwrap();
        let keys = keys.lock().unwrap();
        assert!(keys.contains(&SORT_FIELD_KEY.to_string()));
        assert!(keys.contains(&SORT_DIRECTION_KEY.to_string()));
        assert!(keys.contains(&CATEGORIES_KEY.to_string()));
    }

    #[test]
    fn search_mode_and_log_toggle() {
        let mut state = State::default();
        state.enter_search_mode();
        assert_eq!(state.mode(), Mode::Search);
        state.add_search_char('x').remove_search_char();
        assert_eq!(state.search_term(), "");
        state.exit_search_mode();
        assert_eq!(state.mode(), Mode::Browse);

        assert!(!state.show_log());
        state.toggle_log();
        assert!(state.show_log());
    }
}
