use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{FetchError, Result};

/// What an extraction wrote to disk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    pub files: usize,
    pub directories: usize,
    /// Uncompressed bytes written.
    pub bytes: u64,
    /// Entries whose names would land outside the destination.
    pub skipped: usize,
}

/// Extract every entry of the zip at `archive_path` into `dest`, keeping the
/// archive's directory layout. Existing files are overwritten; permission
/// bits stored in the archive are not applied, so a later run can always
/// write over its own output.
///
/// There is no rollback: entries written before a failure stay on disk.
pub fn extract_zip(archive_path: &Path, dest: &Path) -> Result<ExtractSummary> {
    let file = File::open(archive_path).map_err(|e| FetchError::io(archive_path, e))?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))?;
    fs::create_dir_all(dest).map_err(|e| FetchError::io(dest, e))?;

    let mut summary = ExtractSummary::default();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let Some(relative) = entry.enclosed_name() else {
            warn!(name = entry.name(), "skipping entry outside the destination folder");
            summary.skipped += 1;
            continue;
        };
        let outpath = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&outpath).map_err(|e| FetchError::io(&outpath, e))?;
            summary.directories += 1;
            continue;
        }

        if let Some(parent) = outpath.parent() {
            fs::create_dir_all(parent).map_err(|e| FetchError::io(parent, e))?;
        }
        let mut out = File::create(&outpath).map_err(|e| FetchError::io(&outpath, e))?;
        let n = io::copy(&mut entry, &mut out).map_err(|e| FetchError::io(&outpath, e))?;
        debug!(path = %outpath.display(), bytes = n, "extracted");
        summary.files += 1;
        summary.bytes += n;
    }

    Ok(summary)
}
