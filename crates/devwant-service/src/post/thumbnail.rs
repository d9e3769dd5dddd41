//! Post thumbnails derived from the first embedded image.

use std::io::Cursor;
use std::path::{Component, Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader, Limits};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};

use devwant_core::config::ThumbnailConfig;
use devwant_core::error::{AppError, ErrorKind};
use devwant_core::result::AppResult;

/// Longest edge of a source image the decoder accepts.
const MAX_SOURCE_EDGE: u32 = 8192;
/// Decoder allocation ceiling in bytes.
const MAX_DECODE_ALLOC: u64 = 256 * 1024 * 1024;

/// `src` attribute of the first `<img>` tag.
static IMG_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<img\b[^>]*?\bsrc\s*=\s*"([^"]+)""#).expect("Invalid img regex")
});

/// Stores square JPEG thumbnails on local disk.
#[derive(Debug, Clone)]
pub struct ThumbnailService {
    /// Root directory of stored thumbnails.
    directory: PathBuf,
    /// Public URL prefix the directory is served under.
    url_prefix: String,
    /// Edge length in pixels.
    size: u32,
    /// Largest decoded source image accepted.
    max_source_bytes: usize,
}

impl ThumbnailService {
    /// Creates a new thumbnail service.
    pub fn new(config: &ThumbnailConfig) -> Self {
        Self {
            directory: PathBuf::from(&config.directory),
            url_prefix: config.url_prefix.trim_end_matches('/').to_string(),
            size: config.size.max(1),
            max_source_bytes: config.max_source_bytes,
        }
    }

    /// Derive and store a thumbnail from post HTML.
    ///
    /// Only inline `data:image/...;base64,` sources produce a thumbnail.
    /// Returns the public URL path of the stored file.
    pub async fn extract_and_store(&self, html: &str) -> AppResult<Option<String>> {
        let Some(src) = first_image_src(html) else {
            return Ok(None);
        };
        let Some(bytes) = decode_data_uri(src) else {
            debug!("First image is not inline data, no thumbnail");
            return Ok(None);
        };
        if bytes.len() > self.max_source_bytes {
            warn!(
                bytes = bytes.len(),
                limit = self.max_source_bytes,
                "Inline image too large for a thumbnail"
            );
            return Ok(None);
        }

        let size = self.size;
        let rendered = tokio::task::spawn_blocking(move || render_thumbnail(&bytes, size))
            .await
            .map_err(|e| AppError::internal(format!("Thumbnail task failed: {e}")))?;
        let jpeg = match rendered {
            Ok(jpeg) => jpeg,
            Err(e) => {
                warn!(error = %e, "Skipping thumbnail for undecodable image");
                return Ok(None);
            }
        };

        let now = Utc::now();
        let month_dir = now.format("%y%m").to_string();
        let file_name = format!(
            "thumb_{}_{:08x}.jpg",
            now.timestamp_millis(),
            rand::random::<u32>()
        );

        let dir = self.directory.join(&month_dir);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| storage_error("Failed to create thumbnail directory", e))?;
        tokio::fs::write(dir.join(&file_name), &jpeg)
            .await
            .map_err(|e| storage_error("Failed to write thumbnail", e))?;

        let url = format!("{}/{month_dir}/{file_name}", self.url_prefix);
        info!(url = %url, bytes = jpeg.len(), "Thumbnail stored");
        Ok(Some(url))
    }

    /// Remove a stored thumbnail by its URL path. Missing files and URLs
    /// outside the thumbnail prefix are ignored.
    pub async fn delete(&self, url_path: &str) -> AppResult<()> {
        let Some(relative) = self.relative_path(url_path) else {
            return Ok(());
        };
        match tokio::fs::remove_file(self.directory.join(&relative)).await {
            Ok(()) => {
                debug!(url = %url_path, "Thumbnail deleted");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error("Failed to delete thumbnail", e)),
        }
    }

    /// Path below the thumbnail directory for a URL, if it is one of ours.
    fn relative_path(&self, url_path: &str) -> Option<PathBuf> {
        let rest = url_path.strip_prefix(&self.url_prefix)?.strip_prefix('/')?;
        let path = Path::new(rest);
        path.components()
            .all(|c| matches!(c, Component::Normal(_)))
            .then(|| path.to_path_buf())
    }
}

/// The `src` of the first `<img>` tag in `html`.
pub fn first_image_src(html: &str) -> Option<&str> {
    IMG_SRC
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Decode a `data:image/...;base64,` URI.
pub fn decode_data_uri(src: &str) -> Option<Vec<u8>> {
    let (header, payload) = src.split_once(',')?;
    let header = header.to_ascii_lowercase();
    if !header.starts_with("data:image/") || !header.ends_with(";base64") {
        return None;
    }
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD.decode(compact).ok()
}

/// Decode with bounded dimensions and allocation.
fn decode_source(bytes: &[u8]) -> AppResult<DynamicImage> {
    let mut limits = Limits::default();
    limits.max_image_width = Some(MAX_SOURCE_EDGE);
    limits.max_image_height = Some(MAX_SOURCE_EDGE);
    limits.max_alloc = Some(MAX_DECODE_ALLOC);

    let mut reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| AppError::validation(format!("Failed to read image: {e}")))?;
    reader.limits(limits);
    reader
        .decode()
        .map_err(|e| AppError::validation(format!("Failed to decode image: {e}")))
}

/// Cover-crop from the top-left corner to `size` x `size` and encode as JPEG.
///
/// The top-left square of the source is cut out before scaling, so the
/// work is bounded by the source's short edge.
fn render_thumbnail(bytes: &[u8], size: u32) -> AppResult<Vec<u8>> {
    let img = decode_source(bytes)?;

    let side = img.width().min(img.height()).max(1);
    let thumb = img
        .crop_imm(0, 0, side, side)
        .resize_exact(size, size, FilterType::Lanczos3);
    let thumb = DynamicImage::ImageRgb8(thumb.to_rgb8());

    let mut buf = Vec::new();
    thumb
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Jpeg)
        .map_err(|e| AppError::internal(format!("Failed to encode thumbnail: {e}")))?;
    Ok(buf)
}

fn storage_error(message: &str, err: std::io::Error) -> AppError {
    AppError::with_source(ErrorKind::Storage, message, err)
}
