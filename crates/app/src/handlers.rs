use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;

impl App {
    /// Handles one key press.
    ///
    /// # Errors
    ///
    /// Currently infallible; returns `Result` so the event loop can use `?`.
    pub fn on_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.dialog.is_some() {
            self.handle_dialog_keys(key);
            return Ok(());
        }

        if self.is_importing() {
            // Paths and start stay locked until the run reports back.
            return Ok(());
        }

        self.handle_form_keys(key);
        Ok(())
    }

    fn handle_dialog_keys(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            self.dialog = None;
        }
    }

    fn handle_form_keys(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.should_quit = true,
            (KeyCode::Enter, _) => self.start_import(),
            (KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down, _) => {
                self.editing_field = self.editing_field.next();
            }
            (KeyCode::Backspace, _) => {
                self.focused_input().pop();
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.focused_input().clear(),
            (KeyCode::Char(c), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.focused_input().push(c);
            }
            _ => {}
        }
    }
}
