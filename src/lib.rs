//! # cubicasa-fetch
//!
//! Downloads the CubiCasa5k dataset archive and extracts it into a local
//! folder. The download is skipped when the archive is already on disk;
//! extraction always runs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cubicasa_fetch::{FetchConfig, Fetcher};
//!
//! fn main() -> cubicasa_fetch::Result<()> {
//!     let report = Fetcher::new(FetchConfig::default())?.run()?;
//!     println!("extracted {} files", report.extract.files);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod downloader;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod logging;
pub mod progress;

pub use client::{HttpClient, HttpResponse, ReqwestClient};
pub use config::FetchConfig;
pub use downloader::{Downloader, Transferred};
pub use error::{FetchError, Result};
pub use extract::ExtractSummary;
pub use fetcher::{DownloadOutcome, FetchReport, Fetcher};
pub use progress::{default_progress_fn, ProgressFn};
