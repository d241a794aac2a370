#[cfg(test)]
#[path = "pagination_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Pagination block as the service reports it. Replaced wholesale from
/// every search response, never derived client-side from stale data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// The navigation flags must agree with the page counters.
    pub fn is_consistent(&self) -> bool {
        return self.has_next == (self.page < self.total_pages)
            && self.has_prev == (self.page > 1);
    }
}
