//! HTTP adapter for the gallery backend.
//!
//! Every call is exactly one request; nothing here retries. Failures come
//! back as [`HttpError`]: `status == None` when no response arrived, the
//! response status otherwise, with the message taken from the backend's
//! `{ "error": ... }` body when it has one.

use crate::error::HttpError;
use crate::models::{Image, Page};
use log::{debug, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::future::Future;

/// Which call failed; picks the fallback message for unstructured errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Search,
    Upload,
    Asset,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch images",
            Operation::Search => "Search failed",
            Operation::Upload => "Upload failed",
            Operation::Asset => "Failed to fetch asset",
        }
    }
}

/// Multipart body of `POST /api/upload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPayload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub caption: String,
    pub tags: String,
}

/// Backend operations the controllers depend on.
pub trait GalleryApi: Clone + Send + Sync + 'static {
    fn fetch_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = Result<Page<Image>, HttpError>> + Send;

    fn search(
        &self,
        query: &str,
        per_page: u32,
    ) -> impl Future<Output = Result<Vec<Image>, HttpError>> + Send;

    /// Not idempotent: callers must never retry on their own.
    fn upload(&self, payload: UploadPayload)
    -> impl Future<Output = Result<Image, HttpError>> + Send;

    /// Raw bytes of a static asset, for rendering only.
    fn fetch_asset(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;
}

#[derive(Debug, Deserialize)]
struct ImagesEnvelope {
    images: Vec<Image>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    pages: Option<u64>,
    #[serde(default)]
    current_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UploadEnvelope {
    Wrapped { image: Image },
    Bare(Image),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl GalleryApi for HttpClient {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Page<Image>, HttpError> {
        let request = self
            .client
            .get(self.endpoint("/api/images"))
            .query(&[("page", page), ("per_page", per_page)]);

        let response = send(request, Operation::List).await?;
        let envelope: ImagesEnvelope = decode(response, Operation::List).await?;

        Ok(Page {
            items: envelope.images,
            total: envelope.total,
            pages: envelope.pages,
            current_page: envelope.current_page.unwrap_or(page),
        })
    }

    async fn search(&self, query: &str, per_page: u32) -> Result<Vec<Image>, HttpError> {
        let request = self
            .client
            .get(self.endpoint("/api/search"))
            .query(&[("query", query)])
            .query(&[("per_page", per_page)]);

        let response = send(request, Operation::Search).await?;
        let envelope: ImagesEnvelope = decode(response, Operation::Search).await?;
        Ok(envelope.images)
    }

    async fn upload(&self, payload: UploadPayload) -> Result<Image, HttpError> {
        let file = Part::bytes(payload.bytes)
            .file_name(payload.file_name)
            .mime_str(&payload.mime_type)
            .map_err(|err| {
                warn!("Invalid mime type {}: {}", payload.mime_type, err);
                HttpError {
                    status: None,
                    message: Operation::Upload.failure_message().to_string(),
                }
            })?;

        let form = Form::new()
            .part("file", file)
            .text("caption", payload.caption)
            .text("tags", payload.tags);

        let request = self.client.post(self.endpoint("/api/upload")).multipart(form);

        let response = send(request, Operation::Upload).await?;
        match decode(response, Operation::Upload).await? {
            UploadEnvelope::Wrapped { image } | UploadEnvelope::Bare(image) => Ok(image),
        }
    }

    async fn fetch_asset(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        let response = send(self.client.get(url), Operation::Asset).await?;
        let status = response.status().as_u16();
        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|err| {
                debug!("Asset body from {} (status {}) failed: {}", url, status, err);
                HttpError::transport()
            })
    }
}

/// Sends the request and turns non-2xx statuses into [`HttpError`].
async fn send(request: reqwest::RequestBuilder, operation: Operation) -> Result<Response, HttpError> {
    let response = request.send().await.map_err(|err| {
        warn!("{:?} request did not reach the server: {}", operation, err);
        HttpError::transport()
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body, operation);
    warn!("{:?} request failed with {}: {}", operation, status, message);
    Err(HttpError::server(status.as_u16(), message))
}

async fn decode<T: DeserializeOwned>(response: Response, operation: Operation) -> Result<T, HttpError> {
    let status = response.status().as_u16();
    let body = response.bytes().await.map_err(|err| {
        warn!("{:?} response body was cut off: {}", operation, err);
        HttpError::transport()
    })?;

    serde_json::from_slice(&body).map_err(|err| {
        warn!("{:?} response could not be decoded: {}", operation, err);
        HttpError::decode(status, operation.failure_message())
    })
}

/// Message from a structured `{ "error": ... }` body, else the generic one.
pub fn error_message(body: &str, operation: Operation) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|body| body.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| operation.failure_message().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::image_json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Accepts one connection, answers with the canned response and hands
    /// back the raw request it received.
    async fn serve_once(status_line: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (format!("http://{addr}"), handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            let read = socket.read(&mut chunk).await.unwrap();
            if read == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..read]);

            let text = String::from_utf8_lossy(&buffer).to_string();
            let Some(head_end) = text.find("\r\n\r\n") else {
                continue;
            };
            let head = text[..head_end].to_ascii_lowercase();

            if head.contains("transfer-encoding: chunked") {
                if text.ends_with("\r\n0\r\n\r\n") {
                    return text;
                }
                continue;
            }

            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);

            if buffer.len() >= head_end + 4 + content_length {
                return text;
            }
        }

        String::from_utf8_lossy(&buffer).to_string()
    }

    #[tokio::test]
    async fn fetch_page_reads_envelope_and_pagination() {
        let body = format!(
            r#"{{"images": [{}, {}], "total": 14, "pages": 2, "current_page": 1, "per_page": 12}}"#,
            image_json("a"),
            image_json("b")
        );
        let (base_url, server) = serve_once("200 OK", body).await;

        let page = HttpClient::new(base_url).fetch_page(1, 12).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /api/images?page=1&per_page=12 "));
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "a");
        assert_eq!(page.total, Some(14));
        assert_eq!(page.pages, Some(2));
        assert_eq!(page.current_page, 1);
    }

    #[tokio::test]
    async fn search_encodes_query() {
        let (base_url, server) = serve_once("200 OK", r#"{"images": []}"#.to_string()).await;

        let images = HttpClient::new(base_url)
            .search("sunset & sea", 12)
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert!(images.is_empty());
        assert!(request.starts_with("GET /api/search?query=sunset+%26+sea&per_page=12 "));
    }

    #[tokio::test]
    async fn unstructured_failure_uses_operation_message() {
        let (base_url, _server) =
            serve_once("500 Internal Server Error", "<html>oops</html>".to_string()).await;

        let err = HttpClient::new(base_url).fetch_page(1, 12).await.unwrap_err();

        assert_eq!(err.status, Some(500));
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.message, "Failed to fetch images");
    }

    #[tokio::test]
    async fn undecodable_success_body_uses_operation_message() {
        let (base_url, _server) = serve_once("200 OK", r#"{"images": 3}"#.to_string()).await;

        let err = HttpClient::new(base_url).search("x", 12).await.unwrap_err();

        assert_eq!(err.status, Some(200));
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.message, "Search failed");
    }

    #[tokio::test]
    async fn structured_failure_uses_server_message() {
        let (base_url, _server) = serve_once(
            "400 Bad Request",
            r#"{"error": "Search query is required"}"#.to_string(),
        )
        .await;

        let err = HttpClient::new(base_url).search("x", 12).await.unwrap_err();

        assert_eq!(err.status, Some(400));
        assert_eq!(err.message, "Search query is required");
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = HttpClient::new(format!("http://{addr}"))
            .fetch_page(1, 12)
            .await
            .unwrap_err();

        assert_eq!(err.status, None);
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.message, "network error");
    }

    #[tokio::test]
    async fn upload_sends_multipart_and_unwraps_image() {
        let body = format!(
            r#"{{"message": "Image uploaded successfully", "image": {}}}"#,
            image_json("new")
        );
        let (base_url, server) = serve_once("201 Created", body).await;

        let payload = UploadPayload {
            file_name: "beach.png".to_string(),
            mime_type: "image/png".to_string(),
            bytes: b"not really a png".to_vec(),
            caption: "Low tide".to_string(),
            tags: "sea, sand".to_string(),
        };
        let image = HttpClient::new(base_url).upload(payload).await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(image.id, "new");
        assert!(request.starts_with("POST /api/upload "));
        assert!(request.contains(r#"name="file"; filename="beach.png""#));
        assert!(request.contains(r#"name="caption""#));
        assert!(request.contains("Low tide"));
        assert!(request.contains(r#"name="tags""#));
        assert!(request.contains("sea, sand"));
    }

    #[tokio::test]
    async fn upload_failure_keeps_server_message() {
        let (base_url, _server) = serve_once(
            "413 Payload Too Large",
            r#"{"error": "file too large"}"#.to_string(),
        )
        .await;

        let payload = UploadPayload {
            file_name: "huge.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            bytes: vec![0; 16],
            caption: String::new(),
            tags: String::new(),
        };
        let err = HttpClient::new(base_url).upload(payload).await.unwrap_err();

        assert_eq!(err.status, Some(413));
        assert_eq!(err.message, "file too large");
    }

    #[test]
    fn blank_error_field_falls_back() {
        assert_eq!(
            error_message(r#"{"error": "  "}"#, Operation::Upload),
            "Upload failed"
        );
        assert_eq!(error_message("", Operation::Search), "Search failed");
    }
}
