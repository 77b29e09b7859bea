use crate::controllers::invalidation::InvalidationReceiver;
use crate::controllers::sequence::{Completion, RequestSequence};
use crate::models::{Image, Page, PageState};
use crate::services::api_client::GalleryApi;
use log::{debug, info, warn};
use std::future::Future;

pub type FeedLoaded = Completion<Page<Image>>;

/// Owns the paginated gallery feed.
///
/// `load` flips the state to loading and hands back the fetch; the caller
/// drives it and feeds the outcome to [`FeedController::apply`]. Only the
/// last issued load may commit.
pub struct FeedController<A> {
    api: A,
    per_page: u32,
    requested_page: u32,
    state: PageState<Image>,
    sequence: RequestSequence,
}

impl<A: GalleryApi> FeedController<A> {
    pub fn new(api: A, per_page: u32) -> Self {
        Self {
            api,
            per_page: per_page.max(1),
            requested_page: 1,
            state: PageState::idle(),
            sequence: RequestSequence::default(),
        }
    }

    pub fn state(&self) -> &PageState<Image> {
        &self.state
    }

    pub fn load(&mut self, page: u32) -> impl Future<Output = FeedLoaded> + Send + use<A> {
        let page = page.max(1);
        let ticket = self.sequence.issue();
        self.requested_page = page;
        self.state = std::mem::take(&mut self.state).loading();
        debug!("Loading feed page {} ({:?})", page, ticket);

        let api = self.api.clone();
        let per_page = self.per_page;
        async move {
            let result = api.fetch_page(page, per_page).await;
            Completion { ticket, result }
        }
    }

    pub fn refresh(&mut self) -> impl Future<Output = FeedLoaded> + Send + use<A> {
        self.load(1)
    }

    /// Reissues the most recently requested page.
    pub fn retry(&mut self) -> impl Future<Output = FeedLoaded> + Send + use<A> {
        self.load(self.requested_page)
    }

    /// Commits a finished load. Returns `false` when it was superseded.
    pub fn apply(&mut self, loaded: FeedLoaded) -> bool {
        if !self.sequence.is_current(loaded.ticket) {
            debug!("Discarding stale feed page ({:?})", loaded.ticket);
            return false;
        }

        let previous = std::mem::take(&mut self.state);
        self.state = match loaded.result {
            Ok(page) => {
                info!(
                    "Feed page {} loaded with {} images",
                    page.current_page,
                    page.items.len()
                );
                PageState::ready(page)
            }
            Err(err) => {
                warn!("Feed load failed ({:?}): {}", err.kind(), err);
                previous.failed(err.message)
            }
        };
        true
    }

    /// Refreshes once if any invalidation arrived since the last poll.
    pub fn poll_invalidation(
        &mut self,
        signals: &mut InvalidationReceiver,
    ) -> Option<impl Future<Output = FeedLoaded> + Send + use<A>> {
        let pending = signals.drain();
        if pending == 0 {
            return None;
        }
        info!("Feed invalidated ({} signal(s)), refreshing", pending);
        Some(self.refresh())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::invalidation;
    use crate::error::HttpError;
    use crate::models::Status;
    use crate::testing::{MockApi, images};

    fn ids(state: &PageState<Image>) -> Vec<&str> {
        state.items().iter().map(|image| image.id.as_str()).collect()
    }

    #[tokio::test]
    async fn load_commits_server_order() {
        let api = MockApi::default().with_page(1, Ok(images("p1-", 12)));
        let mut feed = FeedController::new(api.clone(), 12);
        assert_eq!(feed.state().status(), Status::Idle);

        let pending = feed.load(1);
        assert_eq!(feed.state().status(), Status::Loading);

        assert!(feed.apply(pending.await));
        assert_eq!(feed.state().status(), Status::Ready);
        assert_eq!(feed.state().items().len(), 12);
        assert_eq!(ids(feed.state())[0], "p1-0");
        assert_eq!(feed.state().error_message(), None);
        assert_eq!(api.page_calls(), vec![1]);
    }

    #[tokio::test]
    async fn only_the_last_issued_load_commits() {
        let orders: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];

        for order in orders {
            let api = MockApi::default()
                .with_page(1, Ok(images("p1-", 2)))
                .with_page(2, Err(HttpError::server(500, "page 2 broke")))
                .with_page(3, Ok(images("p3-", 3)));
            let mut feed = FeedController::new(api, 12);

            let first = feed.load(1);
            let second = feed.load(2);
            let third = feed.load(3);
            let mut completions = vec![Some(first.await), Some(second.await), Some(third.await)];

            for index in order {
                if let Some(completion) = completions[index].take() {
                    feed.apply(completion);
                }
            }

            assert_eq!(feed.state().status(), Status::Ready, "order {order:?}");
            assert_eq!(ids(feed.state()), vec!["p3-0", "p3-1", "p3-2"]);
            assert_eq!(feed.state().page(), 3);
        }
    }

    #[tokio::test]
    async fn stale_completion_is_reported_as_discarded() {
        let api = MockApi::default();
        let mut feed = FeedController::new(api, 12);

        let old = feed.load(1);
        let new = feed.load(1);

        assert!(!feed.apply(old.await));
        assert_eq!(feed.state().status(), Status::Loading);
        assert!(feed.apply(new.await));
    }

    #[tokio::test]
    async fn failed_refresh_keeps_items_visible() {
        let api = MockApi::default().with_page(1, Ok(images("a", 4)));
        let mut feed = FeedController::new(api, 12);
        let loaded = feed.load(1).await;
        feed.apply(loaded);

        let api = MockApi::default().with_page(1, Err(HttpError::transport()));
        feed.api = api;
        let loaded = feed.refresh().await;
        feed.apply(loaded);

        assert_eq!(feed.state().status(), Status::Error);
        assert_eq!(feed.state().error_message(), Some("network error"));
        assert_eq!(feed.state().items().len(), 4);
    }

    #[tokio::test]
    async fn retry_reissues_requested_page() {
        let api = MockApi::default().with_page(2, Err(HttpError::server(502, "Failed to fetch images")));
        let mut feed = FeedController::new(api.clone(), 12);

        let loaded = feed.load(2).await;
        feed.apply(loaded);
        assert_eq!(feed.state().status(), Status::Error);

        let _ = feed.retry().await;
        assert_eq!(api.page_calls(), vec![2, 2]);
    }

    #[tokio::test]
    async fn page_zero_means_first_page() {
        let api = MockApi::default();
        let mut feed = FeedController::new(api.clone(), 12);

        let _ = feed.load(0).await;
        assert_eq!(api.page_calls(), vec![1]);
    }

    #[tokio::test]
    async fn invalidation_triggers_a_single_refresh() {
        let api = MockApi::default().with_page(1, Ok(images("fresh", 1)));
        let mut feed = FeedController::new(api.clone(), 12);
        let (signals, mut receiver) = invalidation::channel();

        assert!(feed.poll_invalidation(&mut receiver).is_none());

        signals.notify();
        let refresh = feed
            .poll_invalidation(&mut receiver)
            .expect("refresh after invalidation");
        feed.apply(refresh.await);

        assert!(feed.poll_invalidation(&mut receiver).is_none());
        assert_eq!(api.page_calls(), vec![1]);
        assert_eq!(ids(feed.state()), vec!["fresh0"]);
    }
}
