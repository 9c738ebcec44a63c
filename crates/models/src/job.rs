use std::path::PathBuf;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::ProgressEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

/// Counters returned by a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub copied: usize,
    pub skipped: usize,
    pub bytes_copied: u64,
}

/// Foreground record of one import run, built up from its events.
#[derive(Debug, Clone)]
pub struct ImportJob {
    pub id: Uuid,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub total: usize,
    pub current: usize,
    pub status: JobStatus,
    pub message: Option<String>,
    pub started_at: Instant,
}

impl ImportJob {
    #[must_use]
    pub fn new(id: Uuid, source: PathBuf, destination: PathBuf) -> Self {
        Self {
            id,
            source,
            destination,
            total: 0,
            current: 0,
            status: JobStatus::Pending,
            message: None,
            started_at: Instant::now(),
        }
    }

    pub fn mark_running(&mut self) {
        self.status = JobStatus::Running;
        self.started_at = Instant::now();
    }

    /// Folds one event into the record. Events after a terminal one are ignored.
    pub fn apply(&mut self, event: &ProgressEvent) {
        if self.is_finished() {
            return;
        }

        match event {
            ProgressEvent::Total { total } => {
                self.total = *total;
                self.status = JobStatus::Running;
            }
            ProgressEvent::Progress { current, total } => {
                self.current = *current;
                self.total = *total;
                self.status = JobStatus::Running;
            }
            ProgressEvent::Status(text) => self.message = Some(text.clone()),
            ProgressEvent::Completed(text) => {
                self.status = JobStatus::Completed;
                self.message = Some(text.clone());
            }
            ProgressEvent::Failed(text) => {
                self.status = JobStatus::Failed;
                self.message = Some(text.clone());
            }
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.status, JobStatus::Completed | JobStatus::Failed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn eta(&self) -> Option<Duration> {
        if self.current == 0 || self.total == 0 {
            return None;
        }
        if self.current >= self.total {
            return Some(Duration::ZERO);
        }

        let rate = self.current as f64 / self.elapsed().as_secs_f64();
        if rate == 0.0 || !rate.is_finite() {
            return None;
        }

        Some(Duration::from_secs_f64((self.total - self.current) as f64 / rate))
    }
}
