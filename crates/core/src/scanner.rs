use std::path::PathBuf;

use walkdir::{DirEntry, WalkDir};

use photo_importer_models::PhotoFile;
use photo_importer_utils::media_types::photo_format;

use crate::ImportError;

/// Walks a source tree for supported photos.
///
/// Entries are sorted by file name at every level, so two walks over an
/// unchanged tree yield the same sequence.
#[derive(Debug, Clone)]
pub struct PhotoScanner {
    root: PathBuf,
}

impl PhotoScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Photos under the root in traversal order. Walk errors are yielded in
    /// place and the caller decides whether to stop.
    pub fn photos(&self) -> impl Iterator<Item = Result<PhotoFile, ImportError>> + use<> {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => to_photo(&entry).map(Ok),
                Err(e) => Some(Err(ImportError::from(e))),
            })
    }

    /// # Errors
    ///
    /// Returns the first error hit while walking the tree.
    pub fn count(&self) -> Result<usize, ImportError> {
        self.photos().try_fold(0, |count, photo| photo.map(|_| count + 1))
    }
}

fn to_photo(entry: &DirEntry) -> Option<PhotoFile> {
    let is_file = entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file());
    if !is_file {
        return None;
    }
    let format = photo_format(entry.path())?;
    Some(PhotoFile::new(entry.path().to_path_buf(), format))
}
