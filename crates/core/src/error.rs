use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Please select both folders first")]
    MissingInput,

    #[error("An import is already running")]
    AlreadyRunning,

    #[error("failed to read source tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("import worker stopped unexpectedly: {0}")]
    Worker(String),
}

impl ImportError {
    pub(crate) fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}
