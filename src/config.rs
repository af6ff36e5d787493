use std::path::{Path, PathBuf};

/// Zenodo record for the CubiCasa5k floorplan dataset.
pub const DATASET_URL: &str = "https://zenodo.org/records/2613548/files/cubicasa5k.zip?download=1";
/// Folder the archive is downloaded to and extracted into.
pub const DEST_FOLDER: &str = "data";
/// File name of the downloaded archive inside [`DEST_FOLDER`].
pub const ARCHIVE_NAME: &str = "cubicasa5k.zip";

/// Where the dataset comes from and where it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub source_url: String,
    pub dest_folder: PathBuf,
    pub archive_name: String,
}

impl FetchConfig {
    pub fn new(source_url: &str, dest_folder: impl Into<PathBuf>, archive_name: &str) -> Self {
        Self {
            source_url: source_url.to_owned(),
            dest_folder: dest_folder.into(),
            archive_name: archive_name.to_owned(),
        }
    }

    /// Full path of the archive file, `<dest_folder>/<archive_name>`.
    pub fn archive_path(&self) -> PathBuf {
        self.dest_folder.join(&self.archive_name)
    }

    pub fn dest_folder(&self) -> &Path {
        &self.dest_folder
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new(DATASET_URL, DEST_FOLDER, ARCHIVE_NAME)
    }
}
