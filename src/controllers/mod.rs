pub mod feed;
pub mod invalidation;
pub mod search;
pub mod sequence;
pub mod upload;

pub use feed::{FeedController, FeedLoaded};
pub use search::{SearchCompleted, SearchController, SearchPhase};
pub use upload::{PreviewReady, ResetDue, UploadCompleted, UploadController};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;
    use crate::testing::{MockApi, images};

    #[tokio::test]
    async fn feed_and_search_are_independent() {
        let api = MockApi::default()
            .with_page(1, Ok(images("feed", 12)))
            .with_search("sunset", Ok(Vec::new()));
        let mut feed = FeedController::new(api.clone(), 12);
        let mut search = SearchController::new(api.clone(), 12);

        let loaded = feed.load(1).await;
        feed.apply(loaded);
        assert_eq!(feed.state().items().len(), 12);
        assert_eq!(feed.state().status(), Status::Ready);

        let found = search.search("sunset").unwrap().await;
        search.apply(found);
        assert_eq!(search.phase(), SearchPhase::Results);
        assert!(search.state().items().is_empty());

        assert_eq!(feed.state().items().len(), 12);
        assert_eq!(feed.state().status(), Status::Ready);
    }

    #[tokio::test]
    async fn successful_upload_refreshes_feed_once() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("new.png");
        image::RgbaImage::new(2, 2).save(&path).unwrap();

        let api = MockApi::default()
            .with_page(1, Ok(images("after", 1)))
            .with_upload(Ok(crate::testing::image("after0")));
        let (signals, mut receiver) = invalidation::channel();
        let mut feed = FeedController::new(api.clone(), 12);
        let mut upload = UploadController::new(api.clone(), signals);

        let _ = upload.select_file(crate::models::FileRef::new(path));
        let pending = upload.submit().unwrap();
        let _ = upload.apply_upload(pending.await);

        let refresh = feed.poll_invalidation(&mut receiver).expect("feed refresh");
        feed.apply(refresh.await);

        assert!(feed.poll_invalidation(&mut receiver).is_none());
        assert_eq!(api.page_calls(), vec![1]);
        assert_eq!(feed.state().items()[0].id, "after0");
    }
}
