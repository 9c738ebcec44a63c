use photo_importer_config::Settings;
use photo_importer_core::{ImportHandle, Importer};
use photo_importer_models::{AppState, Dialog, EditingField, ImportJob};

pub const READY_STATUS: &str = "Ready";

pub struct App {
    // Core state
    pub state: AppState,
    pub should_quit: bool,

    // Input state
    pub source_input: String,
    pub destination_input: String,
    pub editing_field: EditingField,

    // Presentation state, only ever touched on the foreground
    pub status: String,
    pub dialog: Option<Dialog>,
    pub progress_value: usize,
    pub progress_max: usize,
    pub job: Option<ImportJob>,

    pub(crate) importer: Importer,
    pub(crate) handle: Option<ImportHandle>,
}

impl App {
    /// Creates an idle app with its fields pre-filled from `settings`.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let path_text = |path: &Option<std::path::PathBuf>| {
            path.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        };

        Self {
            state: AppState::Idle,
            should_quit: false,
            source_input: path_text(&settings.source_folder),
            destination_input: path_text(&settings.destination_folder),
            editing_field: EditingField::SourceFolder,
            status: READY_STATUS.to_string(),
            dialog: None,
            progress_value: 0,
            progress_max: 0,
            job: None,
            importer: Importer::new(),
            handle: None,
        }
    }

    #[must_use]
    pub fn is_importing(&self) -> bool {
        self.state == AppState::Importing
    }

    /// Fill ratio for the progress gauge, clamped to `0.0..=1.0`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        if self.progress_max == 0 {
            0.0
        } else {
            (self.progress_value as f64 / self.progress_max as f64).clamp(0.0, 1.0)
        }
    }

    pub(crate) fn focused_input(&mut self) -> &mut String {
        match self.editing_field {
            EditingField::SourceFolder => &mut self.source_input,
            EditingField::DestinationFolder => &mut self.destination_input,
        }
    }
}
