#[cfg(test)]
#[path = "library_test.rs"]
mod tests;

use super::Debouncer;
use crate::domain::models::ApiError;
use crate::domain::models::FoodApi;
use crate::domain::models::FoodSummary;
use crate::domain::models::Language;
use crate::domain::models::LibraryQuery;
use crate::domain::models::Pagination;
use crate::domain::models::Region;
use crate::domain::models::SearchResponse;

/// Quiet period before raw search input becomes the effective search value.
pub const SEARCH_DEBOUNCE_MILLIS: u64 = 500;

/// Paginated, filtered, debounced library browsing. Filter changes reset
/// the page; every settled change triggers exactly one fetch. Fetches are
/// tagged with a sequence number so a slow response can never overwrite the
/// state of a newer one, and the final `loading = false` always belongs to
/// the most recently initiated fetch.
pub struct LibraryFlow {
    pub language: Language,
    pub search: String,
    pub debounced_search: String,
    pub region: Region,
    pub page: u32,
    pub per_page: u32,
    pub foods: Vec<FoodSummary>,
    pub pagination: Pagination,
    pub loading: bool,
    debouncer: Debouncer,
    latest_seq: u64,
}

impl LibraryFlow {
    pub fn new(language: Language, per_page: u32) -> LibraryFlow {
        return LibraryFlow::with_debounce(language, per_page, SEARCH_DEBOUNCE_MILLIS);
    }

    pub fn with_debounce(language: Language, per_page: u32, debounce_millis: u64) -> LibraryFlow {
        return LibraryFlow {
            language,
            search: "".to_string(),
            debounced_search: "".to_string(),
            region: Region::All,
            page: 1,
            per_page,
            foods: vec![],
            pagination: Pagination::default(),
            loading: false,
            debouncer: Debouncer::new(debounce_millis),
            latest_seq: 0,
        };
    }

    /// Raw keystroke input. The effective search value only changes once
    /// the input settles for the quiet period.
    pub fn type_search(&mut self, text: &str) {
        self.search = text.to_string();
        self.debouncer.push(text);
    }

    /// Waits out the quiet period and applies the coalesced value. Returns
    /// true when the effective search changed and a fetch is due.
    pub async fn settle_search(&mut self) -> bool {
        if let Some(value) = self.debouncer.settle().await {
            return self.apply_debounced(&value);
        }

        return false;
    }

    fn apply_debounced(&mut self, value: &str) -> bool {
        if value == self.debounced_search {
            return false;
        }

        self.debounced_search = value.to_string();
        self.page = 1;
        return true;
    }

    /// Region changes reset the page immediately, no debounce.
    pub fn set_region(&mut self, region: Region) -> bool {
        if region == self.region {
            return false;
        }

        self.region = region;
        self.page = 1;
        return true;
    }

    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if page == self.page {
            return false;
        }

        self.page = page;
        return true;
    }

    pub fn set_language(&mut self, language: Language) -> bool {
        if language == self.language {
            return false;
        }

        self.language = language;
        return true;
    }

    pub fn query(&self) -> LibraryQuery {
        return LibraryQuery {
            language: self.language,
            page: self.page,
            per_page: self.per_page,
            region: self.region,
            search: self.debounced_search.to_string(),
        };
    }

    /// Marks the start of a fetch and returns its sequence tag.
    pub fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.latest_seq += 1;

        return self.latest_seq;
    }

    /// Applies a fetch outcome. Responses tagged older than the latest
    /// issued fetch are dropped whole. Failures keep the previous item
    /// list. Returns true when the response was applied.
    pub fn apply_response(&mut self, seq: u64, res: Result<SearchResponse, ApiError>) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "Dropped stale search response");
            return false;
        }

        match res {
            Ok(body) if body.success => {
                if !body.pagination.is_consistent() {
                    tracing::warn!(pagination = ?body.pagination, "Service sent inconsistent pagination");
                }
                self.foods = body.foods;
                self.pagination = body.pagination;
            }
            Ok(_) => {
                tracing::warn!("Search rejected by the service");
            }
            Err(err) => {
                tracing::warn!(err = ?err, "Failed to load foods");
            }
        }

        self.loading = false;
        return true;
    }

    /// One full fetch cycle against the current query state.
    pub async fn refresh(&mut self, api: &dyn FoodApi) {
        let seq = self.begin_fetch();
        let res = api.search_foods(&self.query()).await;
        self.apply_response(seq, res);
    }

    /// Cancels the pending debounce on teardown.
    pub fn teardown(&mut self) {
        self.debouncer.cancel();
    }
}
