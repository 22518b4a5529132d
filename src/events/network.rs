use crate::api::{JobBoard, JobQuery};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    FetchJobs { request_id: u64, query: JobQuery },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    board: &'a mut JobBoard,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, board: &'a mut JobBoard) -> Self {
        Handler { state, board }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::FetchJobs { request_id, query } => self.fetch_jobs(request_id, query).await?,
        }
        Ok(())
    }

    /// Update state with the requested page of jobs, unless a newer request
    /// was made in the meantime.
    ///
    async fn fetch_jobs(&mut self, request_id: u64, query: JobQuery) -> Result<()> {
        {
            let state = self.state.lock().await;
            if state.latest_request_id() != request_id {
                debug!("Skipping superseded request {}.", request_id);
                return Ok(());
            }
        }
        info!("Fetching page {} of jobs...", query.page);
        let result = self.board.fetch_jobs(&query).await;
        let mut state = self.state.lock().await;
        match result {
            Ok(page) => {
                let count = page.jobs.len();
                if state.set_job_page(request_id, page) {
                    info!("Loaded {} jobs for page {}.", count, query.page);
                }
            }
            Err(e) => {
                error!("Failed to fetch page {}: {}", query.page, e);
                state.set_fetch_error(request_id);
            }
        }
        Ok(())
    }
}
