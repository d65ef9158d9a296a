#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

/// What happens to `page` when `status`, `priority`, or `search` changes.
///
/// The backend treats pagination independently of the filter fields, so
/// both behaviors are valid: `PreservePage` keeps the user's place in the
/// list, `ResetOnFilterChange` snaps back to the first page of the
/// narrowed result set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageResetPolicy {
    #[default]
    PreservePage,
    ResetOnFilterChange,
}

/// Current ticket-list query parameters.
///
/// `None` status/priority and an empty search mean "no filter applied".
/// Values are stored exactly as given: no trimming, no validation against
/// a known status/priority set, no page bounds check. Callers own
/// validation (in particular keeping `page >= 1`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketFilters {
    status: Option<String>,
    priority: Option<String>,
    search: String,
    page: u32,
    page_reset: PageResetPolicy,
}

impl Default for TicketFilters {
    fn default() -> Self {
        Self {
            status: None,
            priority: None,
            search: String::new(),
            page: 1,
            page_reset: PageResetPolicy::default(),
        }
    }
}

impl TicketFilters {
    /// Default filters with an explicit page-reset policy.
    pub fn with_policy(page_reset: PageResetPolicy) -> Self {
        Self { page_reset, ..Self::default() }
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_reset(&self) -> PageResetPolicy {
        self.page_reset
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
        self.apply_page_reset();
    }

    pub fn set_priority(&mut self, priority: Option<String>) {
        self.priority = priority;
        self.apply_page_reset();
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.apply_page_reset();
    }

    /// Never affected by the page-reset policy.
    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Clear all four query fields in one step: no filter, empty search,
    /// page 1. The page-reset policy is configuration, not filter state,
    /// and survives.
    pub fn reset(&mut self) {
        self.status = None;
        self.priority = None;
        self.search = String::new();
        self.page = 1;
    }

    fn apply_page_reset(&mut self) {
        if self.page_reset == PageResetPolicy::ResetOnFilterChange {
            self.page = 1;
        }
    }
}
