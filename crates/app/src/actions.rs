use std::path::PathBuf;

use color_eyre::eyre::Result;
use tracing::{debug, error, info, warn};

use photo_importer_core::ImportError;
use photo_importer_models::{AppState, Dialog, ImportJob, ProgressEvent};

use crate::App;
use crate::state::READY_STATUS;

const WORKER_LOST: &str = "Error: import worker stopped unexpectedly";

impl App {
    /// Starts an import with the paths currently in the input fields.
    ///
    /// Missing paths raise a warning dialog instead of starting anything, and
    /// the request is ignored while a run is already in flight.
    pub fn start_import(&mut self) {
        if self.is_importing() {
            debug!("Start ignored, import already running");
            return;
        }

        let source = PathBuf::from(self.source_input.trim());
        let destination = PathBuf::from(self.destination_input.trim());

        match self.importer.start(&source, &destination) {
            Ok(handle) => {
                let mut job = ImportJob::new(handle.job_id(), source, destination);
                job.mark_running();
                info!(job_id = %job.id, "Import started");

                self.job = Some(job);
                self.handle = Some(handle);
                self.state = AppState::Importing;
                self.progress_value = 0;
                self.status = "Starting import...".to_string();
            }
            Err(ImportError::MissingInput) => {
                warn!("Import requested without both folders");
                self.dialog = Some(Dialog::warning("Warning", ImportError::MissingInput.to_string()));
            }
            Err(e) => {
                error!("Could not start import: {e}");
                self.dialog = Some(Dialog::error("Error", e.to_string()));
            }
        }
    }

    /// Applies every event the worker has queued since the last tick.
    ///
    /// # Errors
    ///
    /// Currently infallible; returns `Result` to match the key handler.
    pub fn on_tick(&mut self) -> Result<()> {
        let Some(handle) = self.handle.as_mut() else {
            return Ok(());
        };

        let events = handle.drain();
        let disconnected = handle.is_disconnected();
        for event in events {
            self.apply_event(event);
        }

        let finished = self.job.as_ref().is_none_or(ImportJob::is_finished);
        if disconnected && !finished {
            error!("Import worker ended without reporting an outcome");
            self.apply_event(ProgressEvent::Failed(WORKER_LOST.to_string()));
        }
        Ok(())
    }

    /// Folds one worker event into the presentation state.
    pub fn apply_event(&mut self, event: ProgressEvent) {
        if let Some(job) = self.job.as_mut() {
            job.apply(&event);
        }

        match event {
            ProgressEvent::Total { total } => self.progress_max = total,
            ProgressEvent::Progress { current, total } => {
                self.progress_value = current;
                self.status = format!("Processed {current} of {total} files");
            }
            ProgressEvent::Status(text) => self.status = text,
            ProgressEvent::Completed(message) => {
                self.dialog = Some(Dialog::info("Complete", message));
                self.status = READY_STATUS.to_string();
                self.finish_run();
            }
            ProgressEvent::Failed(message) => {
                self.dialog = Some(Dialog::error("Error", message));
                self.status = "Error occurred".to_string();
                self.finish_run();
            }
        }
    }

    fn finish_run(&mut self) {
        self.progress_value = 0;
        self.handle = None;
        self.state = AppState::Idle;
    }
}
