/// Parameters of one job search request. Also serves as the cache key, so two
/// queries are the same request exactly when they compare equal.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct JobQuery {
    pub board_keys: Vec<String>,
    pub page: u32,
    pub limit: u32,
    pub order_by: Option<String>,
}

impl JobQuery {
    /// Return a query for the given boards and 1-based page.
    ///
    pub fn new(board_keys: Vec<String>, page: u32, limit: u32) -> Self {
        JobQuery {
            board_keys,
            page,
            limit,
            order_by: None,
        }
    }

    /// Set the server-side ordering.
    ///
    pub fn order_by(mut self, order_by: &str) -> Self {
        self.order_by = Some(order_by.to_owned());
        self
    }

    /// Return the query string pairs. Board keys use the bracketed array form,
    /// one pair per key.
    ///
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params: Vec<(&'static str, String)> = self
            .board_keys
            .iter()
            .map(|key| ("board_keys[]", key.to_owned()))
            .collect();
        params.push(("page", self.page.to_string()));
        params.push(("limit", self.limit.to_string()));
        if let Some(order_by) = &self.order_by {
            params.push(("order_by", order_by.to_owned()));
        }
        params
    }
}
