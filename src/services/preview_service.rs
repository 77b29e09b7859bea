use crate::models::PreviewDataUri;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use std::io::Cursor;
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;

pub const PREVIEW_MAX_SIZE: u32 = 480;
const PREVIEW_QUALITY: u8 = 80;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("preview worker failed: {0}")]
    Worker(String),
}

/// Reads the picked file and renders a small JPEG preview as a data URI.
pub async fn derive_preview(path: PathBuf) -> Result<PreviewDataUri, PreviewError> {
    let bytes = tokio::fs::read(&path).await?;

    tokio::task::spawn_blocking(move || render_preview(&bytes))
        .await
        .map_err(|err| PreviewError::Worker(err.to_string()))?
}

pub fn render_preview(bytes: &[u8]) -> Result<PreviewDataUri, PreviewError> {
    let start_time = Instant::now();

    let img = image::load_from_memory(bytes)?;
    let resized = resize_preserving_aspect_ratio(&img, PREVIEW_MAX_SIZE, PREVIEW_MAX_SIZE);

    // JPEG has no alpha channel
    let rgb = resized.to_rgb8();
    let mut encoded = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(Cursor::new(&mut encoded), PREVIEW_QUALITY);
    encoder.encode_image(&rgb)?;

    log::debug!(
        "Preview rendered in {:.3}s ({} bytes)",
        start_time.elapsed().as_secs_f64(),
        encoded.len()
    );

    Ok(PreviewDataUri::encode("image/jpeg", &encoded))
}

fn resize_preserving_aspect_ratio(img: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    let (width, height) = img.dimensions();

    if width <= max_width && height <= max_height {
        return img.clone();
    }

    let (new_width, new_height) = calculate_dimensions(width, height, max_width, max_height);

    let filter = if new_width <= 200 || new_height <= 200 {
        FilterType::Triangle
    } else {
        FilterType::Lanczos3
    };

    img.resize_exact(new_width, new_height, filter)
}

#[inline]
fn calculate_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let width_ratio = max_width as f32 / width as f32;
    let height_ratio = max_height as f32 / height as f32;
    let scale_ratio = width_ratio.min(height_ratio);

    (
        ((width as f32 * scale_ratio).round() as u32).max(1),
        ((height as f32 * scale_ratio).round() as u32).max(1),
    )
}
