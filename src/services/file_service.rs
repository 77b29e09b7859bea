use crate::models::FileRef;
use log::info;
use rfd::AsyncFileDialog;

/// Extensions offered by the picker; the client does not check them again.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Opens the native picker filtered to images. `None` when cancelled.
pub async fn pick_image() -> Option<FileRef> {
    let handle = AsyncFileDialog::new()
        .add_filter("Images", ACCEPTED_EXTENSIONS)
        .pick_file()
        .await?;

    let file = FileRef::new(handle.path());
    info!("Picked {}", file.path.display());
    Some(file)
}
