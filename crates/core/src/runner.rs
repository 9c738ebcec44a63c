use std::fs::{self, File, FileTimes, Metadata, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use photo_importer_models::{PhotoFile, ProgressEvent, RunSummary};

use crate::{ImportError, PhotoScanner, classify_date};

pub const SUCCESS_MESSAGE: &str = "Import completed successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyOutcome {
    Copied(u64),
    Skipped,
}

/// Copies every supported photo under `source` into
/// `destination/<YYYY>/<YYYY-MM-DD>/`, never overwriting existing files.
#[derive(Debug, Clone)]
pub struct ImportRunner {
    source: PathBuf,
    destination: PathBuf,
}

impl ImportRunner {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Runs the import and finishes with exactly one terminal event.
    ///
    /// # Errors
    ///
    /// Returns the error that aborted the run, after emitting it as
    /// [`ProgressEvent::Failed`].
    pub fn execute(&self, mut emit: impl FnMut(ProgressEvent)) -> Result<RunSummary, ImportError> {
        let result = self.run(&mut emit);
        Self::report(result, &mut emit)
    }

    /// Emits the terminal event for a finished run and hands the result back.
    ///
    /// # Errors
    ///
    /// Passes through the error held by `result`.
    pub fn report(
        result: Result<RunSummary, ImportError>,
        emit: &mut impl FnMut(ProgressEvent),
    ) -> Result<RunSummary, ImportError> {
        match &result {
            Ok(summary) => {
                info!(
                    "Import complete: {} copied, {} skipped, {} bytes",
                    summary.copied, summary.skipped, summary.bytes_copied
                );
                emit(ProgressEvent::Completed(SUCCESS_MESSAGE.to_string()));
            }
            Err(e) => {
                error!("Import failed: {e}");
                emit(ProgressEvent::Failed(format!("Error: {e}")));
            }
        }
        result
    }

    /// Counts the photos, then copies them one by one, emitting progress.
    /// Stops at the first walk or filesystem error.
    ///
    /// # Errors
    ///
    /// Returns an error if the source tree cannot be walked or a directory or
    /// file cannot be created or written under the destination.
    pub fn run(&self, emit: &mut impl FnMut(ProgressEvent)) -> Result<RunSummary, ImportError> {
        info!(
            "Starting import from {} to {}",
            self.source.display(),
            self.destination.display()
        );

        let scanner = PhotoScanner::new(&self.source);
        let total = scanner.count()?;
        info!("Found {total} photos to import");
        emit(ProgressEvent::Total { total });
        emit(ProgressEvent::Progress { current: 0, total });

        let mut summary = RunSummary::default();
        for (idx, photo) in scanner.photos().enumerate() {
            let photo = photo?;
            match self.import_photo(&photo)? {
                CopyOutcome::Copied(bytes) => {
                    summary.copied += 1;
                    summary.bytes_copied += bytes;
                }
                CopyOutcome::Skipped => summary.skipped += 1,
            }

            let current = idx + 1;
            emit(ProgressEvent::Progress { current, total });
            emit(ProgressEvent::Status(format!(
                "Processing {current}/{total}: {}",
                photo.name
            )));
        }

        Ok(summary)
    }

    fn import_photo(&self, photo: &PhotoFile) -> Result<CopyOutcome, ImportError> {
        let taken = classify_date(&photo.path);
        let target = photo.destination_path(&self.destination, &taken);

        if let Some(dir) = target.parent() {
            fs::create_dir_all(dir).map_err(|e| ImportError::io("create directory", dir, e))?;
        }

        copy_if_absent(&photo.path, &target)
    }
}

/// Copies `src` to `dst` with permissions and timestamps, unless `dst`
/// already exists. The existence check and creation are one atomic open, and
/// `src` is not touched when the copy is skipped.
fn copy_if_absent(src: &Path, dst: &Path) -> Result<CopyOutcome, ImportError> {
    let mut writer = match OpenOptions::new().write(true).create_new(true).open(dst) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            debug!("{} already exists, skipping", dst.display());
            return Ok(CopyOutcome::Skipped);
        }
        Err(e) => return Err(ImportError::io("create", dst, e)),
    };

    let source = File::open(src)
        .map_err(|e| ImportError::io("open", src, e))
        .and_then(|file| {
            let metadata = file
                .metadata()
                .map_err(|e| ImportError::io("read metadata of", src, e))?;
            Ok((file, metadata))
        });
    let (mut reader, metadata) = match source {
        Ok(opened) => opened,
        Err(e) => {
            drop(writer);
            discard(dst);
            return Err(e);
        }
    };

    match write_copy(&mut reader, &mut writer, &metadata) {
        Ok(bytes) => {
            debug!("Copied {} -> {} ({bytes} bytes)", src.display(), dst.display());
            Ok(CopyOutcome::Copied(bytes))
        }
        Err(e) => {
            drop(writer);
            discard(dst);
            Err(ImportError::io("copy to", dst, e))
        }
    }
}

/// Removes a copy target that was created but never filled.
fn discard(dst: &Path) {
    if let Err(e) = fs::remove_file(dst) {
        error!("Could not remove partial copy {}: {e}", dst.display());
    }
}

fn write_copy(reader: &mut File, writer: &mut File, metadata: &Metadata) -> io::Result<u64> {
    let bytes = io::copy(reader, writer)?;

    let mut times = FileTimes::new();
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    writer.set_times(times)?;
    writer.set_permissions(metadata.permissions())?;

    Ok(bytes)
}
