mod event;
mod job;
mod photo_file;
mod state;

pub use event::ProgressEvent;
pub use job::{ImportJob, JobStatus, RunSummary};
pub use photo_file::{PhotoFile, PhotoFormat, dated_folder};
pub use state::{AppState, Dialog, DialogKind, EditingField};
