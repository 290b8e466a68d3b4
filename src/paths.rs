//! Filesystem layout for the photo frame data directory
//!
//! All on-disk locations are derived from a single root directory and passed
//! around as an explicit value, so tests can point the whole tool at a
//! temporary directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the directory holding cached images under the data root
const IMAGES_DIR: &str = "images";
/// Name of the append-only download log under the data root
const LOG_FILE: &str = "download.log";
/// Name of the offline marker file under the data root
const OFFLINE_FLAG: &str = "offline.flag";

/// Resolved locations of everything the fetcher touches on disk
#[derive(Debug, Clone)]
pub struct FetchPaths {
    /// Directory holding one `<id>.jpg` file per cached image
    pub images_dir: PathBuf,
    /// Append-only log of downloads and failures
    pub log_file: PathBuf,
    /// Marker file present when the last network attempt failed
    pub offline_flag: PathBuf,
}

impl FetchPaths {
    /// Derives the standard layout (`images/`, `download.log`, `offline.flag`)
    /// from a root data directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            images_dir: root.join(IMAGES_DIR),
            log_file: root.join(LOG_FILE),
            offline_flag: root.join(OFFLINE_FLAG),
        }
    }

    /// Returns the cache path for an image with the given remote id
    pub fn image_path(&self, id: &str) -> PathBuf {
        self.images_dir.join(format!("{}.jpg", id))
    }

    /// Ensures the images directory exists
    pub fn ensure_images_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.images_dir)
    }
}
