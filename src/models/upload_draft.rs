use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use std::path::{Path, PathBuf};

const FALLBACK_MIME: &str = "application/octet-stream";

/// A file the user picked. Only the path is held; bytes are read on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    pub path: PathBuf,
    pub name: String,
}

impl FileRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Self { path, name }
    }

    /// MIME type guessed from the extension; the picker's filter already
    /// restricted the selection to images.
    pub fn mime_type(&self) -> &'static str {
        mime_for_path(&self.path)
    }
}

pub fn mime_for_path(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}

/// Locally rendered `data:` URI. Never sent to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDataUri(String);

impl PreviewDataUri {
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw image bytes, for widgets that cannot consume a URI.
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        let (_, payload) = self.as_str().split_once(";base64,")?;
        STANDARD.decode(payload).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

/// Pending upload as the user is composing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadDraft {
    pub file: Option<FileRef>,
    pub caption: String,
    /// Comma separated; split by the server.
    pub tags_raw: String,
    pub status: UploadStatus,
    /// Present only while `status` is `Failed`.
    pub error_message: Option<String>,
    pub preview: Option<PreviewDataUri>,
}

impl UploadDraft {
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && self.status != UploadStatus::Submitting
    }

    pub fn is_submitting(&self) -> bool {
        self.status == UploadStatus::Submitting
    }
}
