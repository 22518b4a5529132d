use super::query::JobQuery;
use super::resource::JobPage;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Holds successful pages for a short freshness window so that repeated
/// identical requests do not reach the network.
///
pub struct FetchCache {
    freshness: Duration,
    entries: HashMap<JobQuery, (Instant, JobPage)>,
}

impl FetchCache {
    /// Return an empty cache with the given freshness window.
    ///
    pub fn new(freshness: Duration) -> Self {
        FetchCache {
            freshness,
            entries: HashMap::new(),
        }
    }

    /// Return a copy of the cached page for the query if it is still fresh.
    ///
    pub fn get(&self, query: &JobQuery) -> Option<JobPage> {
        self.get_at(query, Instant::now())
    }

    /// Store a page fetched just now.
    ///
    pub fn insert(&mut self, query: JobQuery, page: JobPage) {
        self.insert_at(query, page, Instant::now());
    }

    fn get_at(&self, query: &JobQuery, now: Instant) -> Option<JobPage> {
        self.entries
            .get(query)
            .filter(|(stored_at, _)| now.saturating_duration_since(*stored_at) < self.freshness)
            .map(|(_, page)| page.clone())
    }

    fn insert_at(&mut self, query: JobQuery, page: JobPage, now: Instant) {
        let freshness = self.freshness;
        self.entries
            .retain(|_, (stored_at, _)| now.saturating_duration_since(*stored_at) < freshness);
        self.entries.insert(query, (now, page));
    }

    /// Return the number of stored entries, fresh or not.
    ///
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return true if nothing is stored.
    ///
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
