//! Download-and-cache loop
//!
//! The [`Fetcher`] runs up to a configured number of fetch cycles, strictly
//! one after another. Each cycle asks the image source for a random photo
//! descriptor, skips the download when the image is already cached by id, and
//! otherwise writes the bytes into the images directory and records the
//! download in the log. The first failed cycle marks the offline flag and
//! abandons the remaining cycles; nothing is retried.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::api::{ApiError, ImageSource};
use crate::log::RunLog;
use crate::offline::{OfflineFlag, OfflinePolicy};
use crate::paths::FetchPaths;

/// Errors that terminate the fetch loop
#[derive(Debug, Error)]
pub enum FetchError {
    /// The remote service failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Writing the image to disk failed
    #[error("{0}")]
    Io(#[from] io::Error),
}

impl FetchError {
    /// Whether the failure happened at the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Api(err) if err.is_transport())
    }
}

/// Summary of one fetch run
#[derive(Debug, Default)]
pub struct FetchReport {
    /// Cycles started (cache hits included)
    pub cycles: u32,
    /// Images downloaded and written to the cache
    pub downloaded: u32,
    /// Cycles skipped because the image was already cached
    pub cache_hits: u32,
    /// The error that terminated the loop early, if any
    pub failure: Option<FetchError>,
}

/// Outcome of one successful cycle
enum CycleOutcome {
    /// An image was downloaded and cached under this file name
    Downloaded(String),
    /// The descriptor's id was already cached; nothing was fetched
    CacheHit,
}

/// Runs the sequential download-and-cache loop against an image source
pub struct Fetcher<'a> {
    source: &'a dyn ImageSource,
    paths: FetchPaths,
    log: RunLog,
    flag: OfflineFlag,
    policy: OfflinePolicy,
}

impl<'a> Fetcher<'a> {
    /// Creates a fetcher writing into the given filesystem layout
    pub fn new(source: &'a dyn ImageSource, paths: FetchPaths, policy: OfflinePolicy) -> Self {
        let log = RunLog::new(&paths.log_file);
        let flag = OfflineFlag::new(&paths.offline_flag);
        Self {
            source,
            paths,
            log,
            flag,
            policy,
        }
    }

    /// Attempts up to `count` fetch cycles.
    ///
    /// A failing cycle is logged, marks the offline flag, and ends the run
    /// early; the error lands in the report rather than in the return value,
    /// since an offline frame is a normal outcome for this tool. The
    /// `Err` case covers only the fetcher's own bookkeeping (creating the
    /// images directory, appending to the log, touching the flag).
    pub async fn run(&self, count: u32) -> io::Result<FetchReport> {
        self.paths.ensure_images_dir()?;

        let mut report = FetchReport::default();
        for _ in 0..count {
            report.cycles += 1;
            match self.cycle().await {
                Ok(CycleOutcome::Downloaded(name)) => {
                    report.downloaded += 1;
                    self.log.append(&format!("downloaded {}", name))?;
                    if self.policy == OfflinePolicy::ClearOnSuccess && self.flag.is_set() {
                        self.flag.clear()?;
                    }
                }
                Ok(CycleOutcome::CacheHit) => {
                    report.cache_hits += 1;
                }
                Err(err) => {
                    let line = if err.is_transport() {
                        format!("network error: {}", err)
                    } else {
                        format!("error: {}", err)
                    };
                    self.log.append(&line)?;
                    self.flag.mark()?;
                    report.failure = Some(err);
                    break;
                }
            }
        }

        Ok(report)
    }

    /// One fetch cycle: descriptor, cache check, download, write
    async fn cycle(&self) -> Result<CycleOutcome, FetchError> {
        let descriptor = self.source.fetch_random().await?;
        let target = self.paths.image_path(&descriptor.id);

        if target.exists() {
            return Ok(CycleOutcome::CacheHit);
        }

        let bytes = self.source.download(&descriptor.urls.full).await?;
        write_image(&target, &bytes)?;

        Ok(CycleOutcome::Downloaded(format!("{}.jpg", descriptor.id)))
    }
}

/// Writes image bytes to a sibling temp file and renames it into place, so a
/// partially written download is never visible under the final name.
fn write_image(target: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = target.with_extension("jpg.part");
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, target)
}
