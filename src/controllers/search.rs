use crate::controllers::sequence::{Completion, RequestSequence};
use crate::error::ValidationError;
use crate::models::{Image, Page, PageState, Status};
use crate::services::api_client::GalleryApi;
use log::{debug, info, warn};
use std::future::Future;

pub type SearchCompleted = Completion<Vec<Image>>;

/// Where the search screen is in its lifecycle.
///
/// `Results` with no items is a real answer ("nothing matched") and must
/// not be confused with `Blank` (nothing asked yet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Blank,
    Searching,
    Results,
    Error,
}

pub struct SearchController<A> {
    api: A,
    per_page: u32,
    query: Option<String>,
    state: PageState<Image>,
    sequence: RequestSequence,
}

impl<A: GalleryApi> SearchController<A> {
    pub fn new(api: A, per_page: u32) -> Self {
        Self {
            api,
            per_page: per_page.max(1),
            query: None,
            state: PageState::idle(),
            sequence: RequestSequence::default(),
        }
    }

    pub fn state(&self) -> &PageState<Image> {
        &self.state
    }

    /// The trimmed query of the latest search, if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn phase(&self) -> SearchPhase {
        match self.state.status() {
            Status::Idle => SearchPhase::Blank,
            Status::Loading => SearchPhase::Searching,
            Status::Ready => SearchPhase::Results,
            Status::Error => SearchPhase::Error,
        }
    }

    /// Starts a search. A blank query is rejected without touching state.
    pub fn search(
        &mut self,
        query: &str,
    ) -> Result<impl Future<Output = SearchCompleted> + Send + use<A>, ValidationError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }

        let ticket = self.sequence.issue();
        let query = query.to_string();
        self.query = Some(query.clone());
        self.state = std::mem::take(&mut self.state).loading();
        debug!("Searching for {:?} ({:?})", query, ticket);

        let api = self.api.clone();
        let per_page = self.per_page;
        Ok(async move {
            let result = api.search(&query, per_page).await;
            Completion { ticket, result }
        })
    }

    /// Runs the latest query again, if there is one.
    pub fn retry(&mut self) -> Option<impl Future<Output = SearchCompleted> + Send + use<A>> {
        let query = self.query.clone()?;
        self.search(&query).ok()
    }

    pub fn apply(&mut self, completed: SearchCompleted) -> bool {
        if !self.sequence.is_current(completed.ticket) {
            debug!("Discarding stale search result ({:?})", completed.ticket);
            return false;
        }

        self.state = match completed.result {
            Ok(items) => {
                info!(
                    "Search for {:?} returned {} images",
                    self.query.as_deref().unwrap_or_default(),
                    items.len()
                );
                PageState::ready(Page::new(items, 1))
            }
            Err(err) => {
                warn!("Search failed ({:?}): {}", err.kind(), err);
                PageState::idle().failed(err.message)
            }
        };
        true
    }

    /// Back to the blank prompt; in-flight results are dropped on arrival.
    pub fn clear(&mut self) {
        self.sequence.invalidate();
        self.query = None;
        self.state = PageState::idle();
    }
}
