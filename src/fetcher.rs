use std::fs;
use std::path::Path;

use tracing::info;

use crate::client::{HttpClient, ReqwestClient};
use crate::config::FetchConfig;
use crate::downloader::{Downloader, Transferred};
use crate::error::{FetchError, Result};
use crate::extract::{extract_zip, ExtractSummary};
use crate::progress::{default_progress_fn, ProgressFn};

/// Result of the download step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The archive was already on disk; no request was made.
    Skipped,
    Downloaded {
        bytes: u64,
        /// Content-length announced by the server, if any.
        expected: Option<u64>,
    },
}

/// Everything a completed [`Fetcher::run`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchReport {
    pub created_destination: bool,
    pub download: DownloadOutcome,
    pub extract: ExtractSummary,
}

/// Downloads the dataset archive (unless already present) and extracts it.
///
/// # Example
/// ```rust,no_run
/// use cubicasa_fetch::{FetchConfig, Fetcher};
///
/// let report = Fetcher::new(FetchConfig::default())
///     .unwrap()
///     .no_progress()
///     .run()
///     .unwrap();
/// assert!(report.extract.files > 0);
/// ```
pub struct Fetcher {
    config: FetchConfig,
    downloader: Downloader,
}

impl Fetcher {
    /// Create a fetcher backed by a blocking reqwest client, with the default
    /// progress bar.
    pub fn new(config: FetchConfig) -> Result<Self> {
        Ok(Self::with_client(config, ReqwestClient::new()?))
    }

    /// Create a fetcher that issues its requests through `client`.
    pub fn with_client(config: FetchConfig, client: impl HttpClient + 'static) -> Self {
        Self {
            config,
            downloader: Downloader::new(Box::new(client), Some(default_progress_fn())),
        }
    }

    /// Override the progress callback (builder).
    pub fn set_progress(mut self, progress: ProgressFn) -> Self {
        self.downloader.progress = Some(progress);
        self
    }

    /// Disable progress output (builder).
    pub fn no_progress(mut self) -> Self {
        self.downloader.progress = None;
        self
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Ensure the destination folder, download the archive if missing, then
    /// extract it. Each step must succeed before the next one runs.
    pub fn run(&self) -> Result<FetchReport> {
        let archive_path = self.config.archive_path();

        let created_destination = self.ensure_destination()?;
        let download = self.maybe_download(&self.config.source_url, &archive_path)?;
        let extract = self.extract(&archive_path, &self.config.dest_folder)?;

        Ok(FetchReport {
            created_destination,
            download,
            extract,
        })
    }

    /// Create the destination folder and its parents if needed.
    /// Returns `true` when the folder did not exist before.
    pub fn ensure_destination(&self) -> Result<bool> {
        let dest = self.config.dest_folder();
        if dest.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(dest).map_err(|e| FetchError::io(dest, e))?;
        info!("Created folder: {}", dest.display());
        Ok(true)
    }

    /// Stream `url` into `dest`, creating or truncating the file.
    pub fn download(&self, url: &str, dest: &Path) -> Result<Transferred> {
        self.downloader.download(url, dest)
    }

    /// Download only when nothing exists at `dest` yet.
    ///
    /// The check is presence only: a truncated file from an interrupted run
    /// counts as downloaded.
    pub fn maybe_download(&self, url: &str, dest: &Path) -> Result<DownloadOutcome> {
        if dest.exists() {
            info!("File {} already exists. Skipping download.", dest.display());
            return Ok(DownloadOutcome::Skipped);
        }

        info!("Downloading dataset to {}...", dest.display());
        let done = self.download(url, dest)?;
        info!(bytes = done.bytes, "Download complete.");

        Ok(DownloadOutcome::Downloaded {
            bytes: done.bytes,
            expected: done.content_length,
        })
    }

    /// Unpack `archive` into `dest`. Always runs, overwriting earlier output.
    pub fn extract(&self, archive: &Path, dest: &Path) -> Result<ExtractSummary> {
        info!("Extracting {}...", archive.display());
        let summary = extract_zip(archive, dest)?;
        info!(
            files = summary.files,
            directories = summary.directories,
            bytes = summary.bytes,
            "Extraction complete."
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::HttpResponse;

    struct Unreachable;

    impl HttpClient for Unreachable {
        fn get(&self, url: &str) -> Result<HttpResponse> {
            panic!("unexpected request to {url}");
        }
    }

    fn fetcher_in(dest: &Path) -> Fetcher {
        let config = FetchConfig::new("http://unused.invalid/a.zip", dest, "a.zip");
        Fetcher::with_client(config, Unreachable).no_progress()
    }

    #[test]
    fn ensure_destination_creates_nested_folder_once() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("datasets").join("cubicasa");
        let fetcher = fetcher_in(&dest);

        assert!(fetcher.ensure_destination().unwrap());
        assert!(dest.is_dir());
        assert!(!fetcher.ensure_destination().unwrap());
    }

    #[test]
    fn ensure_destination_fails_on_file_in_the_way() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("data");
        fs::write(&dest, b"not a folder").unwrap();

        let err = fetcher_in(&dest).ensure_destination().unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }), "{err}");
    }

    #[test]
    fn maybe_download_skips_existing_archive() {
        let tmp = tempfile::tempdir().unwrap();
        let fetcher = fetcher_in(tmp.path());
        let archive = fetcher.config().archive_path();
        fs::write(&archive, b"partial").unwrap();

        let outcome = fetcher
            .maybe_download(&fetcher.config().source_url, &archive)
            .unwrap();
        assert_eq!(outcome, DownloadOutcome::Skipped);
        assert_eq!(fs::read(&archive).unwrap(), b"partial");
    }
}
