use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, Hash, PartialEq)]
pub enum PhotoFormat {
    Jpeg,
    Png,
    CanonRaw,
}

impl fmt::Display for PhotoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jpeg => write!(f, "JPEG"),
            Self::Png => write!(f, "PNG"),
            Self::CanonRaw => write!(f, "CR2"),
        }
    }
}

/// A photo found under the source root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhotoFile {
    pub path: PathBuf,
    pub name: String,
    pub format: PhotoFormat,
}

impl PhotoFile {
    #[must_use]
    pub fn new(path: PathBuf, format: PhotoFormat) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name, format }
    }

    /// Full destination path for this photo when taken at `taken`.
    ///
    /// The original file name is kept byte-for-byte, including its case.
    #[must_use]
    pub fn destination_path(&self, root: &Path, taken: &NaiveDateTime) -> PathBuf {
        let file_name = self.path.file_name().unwrap_or_else(|| OsStr::new(&self.name));
        dated_folder(root, taken).join(file_name)
    }
}

/// `<root>/<YYYY>/<YYYY-MM-DD>`
#[must_use]
pub fn dated_folder(root: &Path, taken: &NaiveDateTime) -> PathBuf {
    root.join(taken.format("%Y").to_string())
        .join(taken.format("%Y-%m-%d").to_string())
}
