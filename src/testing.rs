//! Test helpers: image fixtures and a scripted [`GalleryApi`].

use crate::error::HttpError;
use crate::models::{Image, Page};
use crate::services::api_client::{GalleryApi, UploadPayload};
use chrono::NaiveDate;
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

pub fn image(id: &str) -> Image {
    Image {
        id: id.to_string(),
        filename: format!("{id}.jpg"),
        original_filename: format!("{id}.jpg"),
        caption: Some(format!("caption {id}")),
        tags: vec!["test".to_string()],
        file_size_bytes: Some(1024),
        mime_type: Some("image/jpeg".to_string()),
        created_at: NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .unwrap(),
    }
}

pub fn images(prefix: &str, count: usize) -> Vec<Image> {
    (0..count).map(|i| image(&format!("{prefix}{i}"))).collect()
}

pub fn image_json(id: &str) -> String {
    serde_json::to_string(&image(id)).unwrap()
}

#[derive(Default)]
struct Script {
    pages: HashMap<u32, Result<Page<Image>, HttpError>>,
    searches: HashMap<String, Result<Vec<Image>, HttpError>>,
    uploads: VecDeque<Result<Image, HttpError>>,
    page_calls: Vec<u32>,
    search_calls: Vec<String>,
    upload_calls: Vec<UploadPayload>,
}

/// Answers by request arguments, so futures can be polled in any order.
/// Unscripted pages and searches answer with an empty result.
#[derive(Clone, Default)]
pub struct MockApi {
    script: Arc<Mutex<Script>>,
}

impl MockApi {
    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap()
    }

    pub fn with_page(self, page: u32, result: Result<Vec<Image>, HttpError>) -> Self {
        let result = result.map(|items| Page::new(items, page));
        self.script().pages.insert(page, result);
        self
    }

    pub fn with_search(self, query: &str, result: Result<Vec<Image>, HttpError>) -> Self {
        self.script().searches.insert(query.to_string(), result);
        self
    }

    pub fn with_upload(self, result: Result<Image, HttpError>) -> Self {
        self.script().uploads.push_back(result);
        self
    }

    pub fn page_calls(&self) -> Vec<u32> {
        self.script().page_calls.clone()
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.script().search_calls.clone()
    }

    pub fn upload_calls(&self) -> Vec<UploadPayload> {
        self.script().upload_calls.clone()
    }
}

impl GalleryApi for MockApi {
    fn fetch_page(
        &self,
        page: u32,
        _per_page: u32,
    ) -> impl Future<Output = Result<Page<Image>, HttpError>> + Send {
        let result = {
            let mut script = self.script();
            script.page_calls.push(page);
            script
                .pages
                .get(&page)
                .cloned()
                .unwrap_or_else(|| Ok(Page::new(Vec::new(), page)))
        };
        async move { result }
    }

    fn search(
        &self,
        query: &str,
        _per_page: u32,
    ) -> impl Future<Output = Result<Vec<Image>, HttpError>> + Send {
        let result = {
            let mut script = self.script();
            script.search_calls.push(query.to_string());
            script.searches.get(query).cloned().unwrap_or_else(|| Ok(Vec::new()))
        };
        async move { result }
    }

    fn upload(&self, payload: UploadPayload) -> impl Future<Output = Result<Image, HttpError>> + Send {
        let result = {
            let mut script = self.script();
            script.upload_calls.push(payload);
            script
                .uploads
                .pop_front()
                .unwrap_or_else(|| Err(HttpError::server(500, "Upload failed")))
        };
        async move { result }
    }

    fn fetch_asset(&self, _url: &str) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send {
        async move { Ok(Vec::new()) }
    }
}
