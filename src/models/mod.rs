pub mod image;
pub mod page;
pub mod page_state;
pub mod upload_draft;

pub use image::Image;
pub use page::Page;
pub use page_state::{PageState, Status};
pub use upload_draft::{FileRef, PreviewDataUri, UploadDraft, UploadStatus};
