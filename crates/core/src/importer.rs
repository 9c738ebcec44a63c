use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc::{self, UnboundedReceiver, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::info;
use uuid::Uuid;

use photo_importer_models::{ProgressEvent, RunSummary};

use crate::{ImportError, ImportRunner};

/// Starts import runs on a blocking worker thread, one at a time.
///
/// Cloning shares the running flag, so clones refuse to start while any of
/// them has a run in flight.
#[derive(Debug, Clone, Default)]
pub struct Importer {
    running: Arc<AtomicBool>,
}

impl Importer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Spawns a run and returns the handle its events arrive on.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::MissingInput`] if either path is empty and
    /// [`ImportError::AlreadyRunning`] while another run is in flight.
    pub fn start(&self, source: &Path, destination: &Path) -> Result<ImportHandle, ImportError> {
        if source.as_os_str().is_empty() || destination.as_os_str().is_empty() {
            return Err(ImportError::MissingInput);
        }
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ImportError::AlreadyRunning);
        }

        let job_id = Uuid::new_v4();
        info!(%job_id, "Queued import of {} into {}", source.display(), destination.display());

        let (tx, events) = mpsc::unbounded_channel();
        let runner = ImportRunner::new(source, destination);
        let guard = RunningGuard(Arc::clone(&self.running));

        let task = tokio::task::spawn_blocking(move || {
            // The receiver may already be gone; the run still finishes.
            let mut emit = move |event: ProgressEvent| {
                let _ = tx.send(event);
            };
            let result = runner.run(&mut emit);
            // Idle again before the terminal event reaches the foreground.
            drop(guard);
            ImportRunner::report(result, &mut emit)
        });

        Ok(ImportHandle {
            job_id,
            events,
            task,
            disconnected: false,
        })
    }
}

/// Clears the running flag when the worker ends, including by panic.
struct RunningGuard(Arc<AtomicBool>);

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Receiving end of one run.
pub struct ImportHandle {
    job_id: Uuid,
    events: UnboundedReceiver<ProgressEvent>,
    task: JoinHandle<Result<RunSummary, ImportError>>,
    disconnected: bool,
}

impl ImportHandle {
    #[must_use]
    pub const fn job_id(&self) -> Uuid {
        self.job_id
    }

    /// Every event queued so far, in emission order. Never blocks.
    pub fn drain(&mut self) -> Vec<ProgressEvent> {
        let mut drained = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(event) => drained.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.disconnected = true;
                    break;
                }
            }
        }
        drained
    }

    /// `true` once the worker has dropped its sender and the queue is empty.
    #[must_use]
    pub const fn is_disconnected(&self) -> bool {
        self.disconnected
    }

    /// Waits for the next event; `None` after the worker is gone.
    pub async fn next_event(&mut self) -> Option<ProgressEvent> {
        let event = self.events.recv().await;
        if event.is_none() {
            self.disconnected = true;
        }
        event
    }

    /// Waits for the worker and returns its outcome.
    ///
    /// # Errors
    ///
    /// Returns the error that aborted the run, or [`ImportError::Worker`] if
    /// the worker panicked.
    pub async fn wait(self) -> Result<RunSummary, ImportError> {
        self.task
            .await
            .map_err(|e| ImportError::Worker(e.to_string()))?
    }
}
