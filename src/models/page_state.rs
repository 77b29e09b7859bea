use crate::models::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Snapshot of a controller-owned collection.
///
/// Snapshots are only built through the transition constructors below, which
/// keep `error_message` present exactly when `status` is [`Status::Error`].
/// Controllers replace the whole snapshot on every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState<T> {
    items: Vec<T>,
    status: Status,
    error_message: Option<String>,
    page: u32,
    pages: Option<u64>,
    total: Option<u64>,
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> PageState<T> {
    pub fn idle() -> Self {
        Self {
            items: Vec::new(),
            status: Status::Idle,
            error_message: None,
            page: 1,
            pages: None,
            total: None,
        }
    }

    /// Pending fetch: previous items stay visible, the error is cleared.
    pub fn loading(self) -> Self {
        Self {
            status: Status::Loading,
            error_message: None,
            ..self
        }
    }

    pub fn ready(page: Page<T>) -> Self {
        Self {
            items: page.items,
            status: Status::Ready,
            error_message: None,
            page: page.current_page,
            pages: page.pages,
            total: page.total,
        }
    }

    /// Failed fetch that keeps whatever was on screen.
    pub fn failed(self, message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error_message: Some(message.into()),
            ..self
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn pages(&self) -> Option<u64> {
        self.pages
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }

    pub fn is_busy(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.pages.is_some_and(|pages| u64::from(self.page) < pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_empty() {
        let state: PageState<u8> = PageState::default();
        assert_eq!(state.status(), Status::Idle);
        assert!(state.items().is_empty());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn failure_keeps_items_and_loading_clears_error() {
        let state = PageState::ready(Page::new(vec![1, 2, 3], 1)).failed("boom");
        assert_eq!(state.status(), Status::Error);
        assert_eq!(state.items(), &[1, 2, 3]);
        assert_eq!(state.error_message(), Some("boom"));

        let state = state.loading();
        assert_eq!(state.status(), Status::Loading);
        assert_eq!(state.error_message(), None);
        assert_eq!(state.items(), &[1, 2, 3]);
    }

    #[test]
    fn page_navigation_follows_server_counts() {
        let mut page = Page::new(vec![1], 2);
        page.pages = Some(3);
        let state = PageState::ready(page);
        assert!(state.has_previous_page());
        assert!(state.has_next_page());

        let state: PageState<u8> = PageState::ready(Page::new(vec![], 1));
        assert!(!state.has_previous_page());
        assert!(!state.has_next_page());
    }
}
