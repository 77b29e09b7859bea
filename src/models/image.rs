use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Image record as issued by the backend. Never mutated client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub filename: String,
    pub original_filename: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, rename = "file_size")]
    pub file_size_bytes: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Image {
    /// `{base}/uploads/{filename}`
    pub fn original_url(&self, base_url: &str) -> String {
        format!("{}/uploads/{}", base_url.trim_end_matches('/'), self.filename)
    }

    /// `{base}/uploads/thumb_{filename}`
    pub fn thumbnail_url(&self, base_url: &str) -> String {
        format!(
            "{}/uploads/thumb_{}",
            base_url.trim_end_matches('/'),
            self.filename
        )
    }

    pub fn title(&self) -> Cow<'_, str> {
        match self.caption.as_deref().map(str::trim) {
            Some(caption) if !caption.is_empty() => Cow::Borrowed(caption),
            _ => t!("image.untitled"),
        }
    }

    pub fn created_date(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }

    pub fn created_timestamp(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Size in megabytes with two decimals, if the backend reported one.
    pub fn size_label(&self) -> Option<String> {
        self.file_size_bytes
            .map(|bytes| {
                let size = format!("{:.2}", bytes as f64 / 1024.0 / 1024.0);
                t!("image.size_mb", size = size).to_string()
            })
    }

    /// Tags for compact cards: at most `limit`, plus how many were left out.
    pub fn visible_tags(&self, limit: usize) -> (&[String], usize) {
        let shown = self.tags.len().min(limit);
        (&self.tags[..shown], self.tags.len() - shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::image;

    #[test]
    fn deserializes_backend_record() {
        let json = r#"{
            "id": "3f2c",
            "filename": "3f2c_sunset.jpg",
            "original_filename": "sunset.jpg",
            "caption": "Golden hour",
            "tags": ["sunset", "beach"],
            "file_path": "uploads/3f2c_sunset.jpg",
            "file_size": 2097152,
            "mime_type": "image/jpeg",
            "created_at": "2024-06-01T18:30:12.481516",
            "updated_at": "2024-06-01T18:30:12.481516"
        }"#;

        let image: Image = serde_json::from_str(json).unwrap();
        assert_eq!(image.id, "3f2c");
        assert_eq!(image.tags, vec!["sunset", "beach"]);
        assert_eq!(image.file_size_bytes, Some(2_097_152));
        assert_eq!(image.created_date(), "2024-06-01");
        assert_eq!(image.size_label().as_deref(), Some("2.00 MB"));
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{
            "id": "a",
            "filename": "a.png",
            "original_filename": "a.png",
            "caption": null,
            "created_at": "2024-06-01T18:30:12"
        }"#;

        let image: Image = serde_json::from_str(json).unwrap();
        assert!(image.tags.is_empty());
        assert_eq!(image.file_size_bytes, None);
        assert_eq!(image.title(), "Untitled");
    }

    #[test]
    fn whitespace_caption_reads_as_untitled() {
        let mut image = image("w");
        image.caption = Some("   ".to_string());
        assert_eq!(image.title(), "Untitled");

        image.caption = Some("  Harbour ".to_string());
        assert_eq!(image.title(), "Harbour");
    }

    #[test]
    fn asset_urls_derive_from_filename() {
        let image = image("1");
        assert_eq!(
            image.original_url("http://localhost:15000/"),
            "http://localhost:15000/uploads/1.jpg"
        );
        assert_eq!(
            image.thumbnail_url("http://localhost:15000"),
            "http://localhost:15000/uploads/thumb_1.jpg"
        );
    }

    #[test]
    fn visible_tags_reports_overflow() {
        let mut image = image("1");
        image.tags = ["a", "b", "c", "d", "e", "f"].map(String::from).to_vec();

        let (shown, hidden) = image.visible_tags(4);
        assert_eq!(shown.len(), 4);
        assert_eq!(hidden, 2);
    }
}
