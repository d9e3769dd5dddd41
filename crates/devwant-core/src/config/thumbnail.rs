//! Thumbnail storage configuration.

use serde::{Deserialize, Serialize};

/// Where derived post thumbnails are written and served from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThumbnailConfig {
    /// Directory that receives `{YYMM}/thumb_*.jpg` files.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// URL prefix under which the directory is served.
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
    /// Edge length of the square thumbnail in pixels.
    #[serde(default = "default_size")]
    pub size: u32,
    /// Upper bound for a decoded inline image, in bytes.
    #[serde(default = "default_max_source_bytes")]
    pub max_source_bytes: usize,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            url_prefix: default_url_prefix(),
            size: default_size(),
            max_source_bytes: default_max_source_bytes(),
        }
    }
}

fn default_directory() -> String {
    "data/thumbs".to_string()
}

fn default_url_prefix() -> String {
    "/thumbs".to_string()
}

fn default_size() -> u32 {
    200
}

fn default_max_source_bytes() -> usize {
    10 * 1024 * 1024
}
