use serde::{Deserialize, Serialize};

/// Message sent from the import worker to the foreground.
///
/// Events of one run are delivered in emission order; exactly one of
/// [`ProgressEvent::Completed`] or [`ProgressEvent::Failed`] ends a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ProgressEvent {
    Total { total: usize },
    Progress { current: usize, total: usize },
    Status(String),
    Completed(String),
    Failed(String),
}

impl ProgressEvent {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed(_) | Self::Failed(_))
    }
}
