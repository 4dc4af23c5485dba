use crate::battle::BattleSummary;
use crate::error::FetchError;

/// Rows per page served by the list endpoint.
pub const PAGE_SIZE: u32 = 50;

/// User-controlled filters of the battle list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    pub search: String,
    pub large_only: bool,
    /// 1-based.
    pub active_page: u32,
}

impl SearchFilters {
    pub fn new(large_only: bool) -> Self {
        Self {
            search: String::new(),
            large_only,
            active_page: 1,
        }
    }

    pub fn offset(&self) -> u32 {
        self.active_page.max(1).saturating_sub(1).saturating_mul(PAGE_SIZE)
    }

    /// Query parameters for the list endpoint, in request order.
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("largeOnly", self.large_only.to_string()),
            ("offset", self.offset().to_string()),
            ("search", self.search.clone()),
        ]
    }
}

/// What caused a list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTrigger {
    /// Mount, page change, or the large-battle toggle.
    FilterChange,
    /// Periodic refresh.
    Poll,
    /// Search button or Enter.
    Submit,
}

impl FetchTrigger {
    pub fn scrolls_to_top(self) -> bool {
        matches!(self, Self::FilterChange)
    }

    pub fn shows_loader(self) -> bool {
        matches!(self, Self::FilterChange)
    }
}

/// One list request, stamped with the generation it must match to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub filters: SearchFilters,
    pub trigger: FetchTrigger,
}

/// Local state of the battle search page.
#[derive(Debug, Clone)]
pub struct SearchState {
    filters: SearchFilters,
    battles: Vec<BattleSummary>,
    loading: bool,
    generation: u64,
}

impl SearchState {
    pub fn new(large_only: bool) -> Self {
        Self {
            filters: SearchFilters::new(large_only),
            battles: Vec::new(),
            loading: true,
            generation: 0,
        }
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn battles(&self) -> &[BattleSummary] {
        &self.battles
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn active_page(&self) -> u32 {
        self.filters.active_page
    }

    /// A full page came back, so there may be more after it.
    pub fn has_next_page(&self) -> bool {
        self.battles.len() >= PAGE_SIZE as usize
    }

    fn request(&mut self, trigger: FetchTrigger) -> FetchRequest {
        self.generation = self.generation.wrapping_add(1);
        if trigger.shows_loader() {
            self.loading = true;
        }
        FetchRequest {
            generation: self.generation,
            filters: self.filters.clone(),
            trigger,
        }
    }

    /// Initial load when the page mounts.
    pub fn mount(&mut self) -> FetchRequest {
        self.request(FetchTrigger::FilterChange)
    }

    /// Toggle the large-battle filter. Returns to page 1. `None` when unchanged.
    pub fn set_large_only(&mut self, large_only: bool) -> Option<FetchRequest> {
        if self.filters.large_only == large_only {
            return None;
        }
        self.filters.large_only = large_only;
        self.filters.active_page = 1;
        Some(self.request(FetchTrigger::FilterChange))
    }

    /// Jump to a page (clamped to at least 1). `None` when already there.
    pub fn set_page(&mut self, page: u32) -> Option<FetchRequest> {
        let page = page.max(1);
        if self.filters.active_page == page {
            return None;
        }
        self.filters.active_page = page;
        Some(self.request(FetchTrigger::FilterChange))
    }

    pub fn next_page(&mut self) -> Option<FetchRequest> {
        self.set_page(self.filters.active_page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> Option<FetchRequest> {
        self.set_page(self.filters.active_page.saturating_sub(1))
    }

    /// Store debounced search text. New text returns to page 1; that page
    /// change fetches, otherwise the text waits for the next poll or submit.
    pub fn commit_search(&mut self, text: String) -> Option<FetchRequest> {
        if self.filters.search == text {
            return None;
        }
        self.filters.search = text;
        self.set_page(1)
    }

    /// Refetch with the current filters, keeping page and scroll position.
    pub fn poll(&mut self) -> FetchRequest {
        self.request(FetchTrigger::Poll)
    }

    /// Explicit search. `pending` is text typed but not yet committed by the debounce.
    pub fn submit(&mut self, pending: Option<String>) -> FetchRequest {
        if let Some(text) = pending
            && let Some(request) = self.commit_search(text)
        {
            return request;
        }
        self.request(FetchTrigger::Submit)
    }

    /// Apply a response. Only the newest request is applied; failures keep the
    /// last good rows. Returns whether the response was current.
    pub fn resolve(
        &mut self,
        generation: u64,
        result: Result<Vec<BattleSummary>, FetchError>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        if let Ok(battles) = result {
            self.battles = battles;
        }
        self.loading = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: u64) -> BattleSummary {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "startTime": "2024-03-02T18:04:11Z"
        }))
        .expect("summary json")
    }

    fn offset_param(request: &FetchRequest) -> String {
        request.filters.query_pairs()[1].1.clone()
    }

    #[test]
    fn offsets_step_by_page_size() {
        let mut filters = SearchFilters::new(false);
        let offsets: Vec<u32> = (1..=3)
            .map(|page| {
                filters.active_page = page;
                filters.offset()
            })
            .collect();
        assert_eq!(offsets, vec![0, 50, 100]);
    }

    #[test]
    fn query_pairs_follow_endpoint_order() {
        let filters = SearchFilters {
            search: "tuga".to_string(),
            large_only: true,
            active_page: 2,
        };
        assert_eq!(
            filters.query_pairs(),
            [
                ("largeOnly", "true".to_string()),
                ("offset", "50".to_string()),
                ("search", "tuga".to_string()),
            ]
        );
    }

    #[test]
    fn mount_starts_loading_and_scrolls() {
        let mut state = SearchState::new(true);
        let request = state.mount();
        assert!(state.is_loading());
        assert!(request.filters.large_only);
        assert_eq!(request.trigger, FetchTrigger::FilterChange);
        assert!(request.trigger.scrolls_to_top());
    }

    #[test]
    fn toggling_large_only_resets_page_and_fetches_once() {
        let mut state = SearchState::new(false);
        let first = state.mount();
        state.resolve(first.generation, Ok(vec![summary(1)]));
        state.set_page(3).expect("page change");

        let request = state.set_large_only(true).expect("toggle fetch");
        assert_eq!(state.active_page(), 1);
        assert!(request.filters.large_only);
        assert_eq!(offset_param(&request), "0");
        assert_eq!(state.set_large_only(true), None);
    }

    #[test]
    fn page_is_clamped_to_one() {
        let mut state = SearchState::new(false);
        assert_eq!(state.set_page(0), None);
        assert_eq!(state.prev_page(), None);
        assert_eq!(state.active_page(), 1);

        let request = state.next_page().expect("next page");
        assert_eq!(offset_param(&request), "50");
    }

    #[test]
    fn commit_search_on_first_page_waits_for_next_fetch() {
        let mut state = SearchState::new(false);
        assert_eq!(state.commit_search("owl".to_string()), None);
        assert_eq!(state.filters().search, "owl");

        let request = state.poll();
        assert_eq!(request.filters.search, "owl");
    }

    #[test]
    fn commit_search_on_later_page_returns_to_first_page() {
        let mut state = SearchState::new(false);
        state.set_page(4);
        let request = state.commit_search("owl".to_string()).expect("page reset");
        assert_eq!(request.filters.active_page, 1);
        assert_eq!(request.filters.search, "owl");
    }

    #[test]
    fn poll_keeps_page_and_does_not_show_loader() {
        let mut state = SearchState::new(false);
        let page = state.set_page(2).expect("page change");
        state.resolve(page.generation, Ok(vec![summary(1)]));

        let request = state.poll();
        assert_eq!(request.filters.active_page, 2);
        assert_eq!(request.trigger, FetchTrigger::Poll);
        assert!(!request.trigger.scrolls_to_top());
        assert!(!state.is_loading());
    }

    #[test]
    fn submit_uses_pending_text() {
        let mut state = SearchState::new(false);
        let request = state.submit(Some("arch".to_string()));
        assert_eq!(request.filters.search, "arch");
        assert_eq!(request.trigger, FetchTrigger::Submit);

        let request = state.submit(None);
        assert_eq!(request.filters.search, "arch");
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut state = SearchState::new(false);
        let older = state.mount();
        let newer = state.poll();

        assert!(state.resolve(newer.generation, Ok(vec![summary(2)])));
        assert!(!state.resolve(older.generation, Ok(vec![summary(1)])));
        assert_eq!(state.battles()[0].id, 2);
    }

    #[test]
    fn failure_keeps_last_good_rows_and_clears_loading() {
        let mut state = SearchState::new(false);
        let first = state.mount();
        state.resolve(first.generation, Ok(vec![summary(9)]));

        let next = state.set_page(2).expect("page change");
        assert!(state.is_loading());
        assert!(state.resolve(next.generation, Err(FetchError::Status(500))));
        assert!(!state.is_loading());
        assert_eq!(state.battles()[0].id, 9);
    }

    #[test]
    fn full_page_enables_next() {
        let mut state = SearchState::new(false);
        let request = state.mount();
        let rows = (0..u64::from(PAGE_SIZE)).map(summary).collect();
        state.resolve(request.generation, Ok(rows));
        assert!(state.has_next_page());
    }
}
