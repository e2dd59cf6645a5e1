use super::projection::{SortMode, ViewQuery};

/// The user-controlled inputs of the list view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    query: ViewQuery,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn search(&self) -> &str {
        &self.query.search
    }

    pub fn sort(&self) -> SortMode {
        self.query.sort
    }

    pub fn page(&self) -> usize {
        self.query.page
    }

    /// New search text always starts over at page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.query.page = 1;
    }

    /// Sorting keeps the active page.
    pub fn set_sort(&mut self, sort: SortMode) {
        self.query.sort = sort;
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.page = page.max(1);
    }

    /// Called when products were loaded, added or removed.
    pub fn composition_changed(&mut self) {
        self.query.page = 1;
    }

    /// Pulls the active page back inside `[1, max(total_pages, 1)]`.
    /// Returns true when the page moved.
    pub fn clamp(&mut self, total_pages: usize) -> bool {
        let clamped = self.query.page.clamp(1, total_pages.max(1));
        let moved = clamped != self.query.page;
        self.query.page = clamped;
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reset_page_when_search_changes() {
        let mut view = ViewState::new();
        view.set_page(3);
        view.set_search("phone");
        assert_eq!(view.page(), 1);
        assert_eq!(view.search(), "phone");
    }

    #[test]
    fn should_keep_page_when_sort_changes() {
        let mut view = ViewState::new();
        view.set_page(2);
        view.set_sort(SortMode::Rating);
        assert_eq!(view.page(), 2);
        assert_eq!(view.sort(), SortMode::Rating);
    }

    #[test]
    fn should_reset_page_when_composition_changes() {
        let mut view = ViewState::new();
        view.set_page(4);
        view.composition_changed();
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn should_treat_page_zero_as_first_page() {
        let mut view = ViewState::new();
        view.set_page(0);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn should_clamp_page_when_total_pages_shrinks() {
        let mut view = ViewState::new();
        view.set_page(5);
        assert!(view.clamp(3));
        assert_eq!(view.page(), 3);
        assert!(!view.clamp(3));
    }

    #[test]
    fn should_clamp_to_first_page_when_nothing_matches() {
        let mut view = ViewState::new();
        view.set_page(2);
        view.clamp(0);
        assert_eq!(view.page(), 1);
    }
}
