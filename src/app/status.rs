use std::path::Path;

use crate::submit::SubmitError;

pub const READY_STATUS: &str = "Ready. Press Ctrl+S to submit the sheet.";

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn modal_open(&mut self) {
        self.message =
            "PRC-025 criteria: Ctrl+N adds a row, Ctrl+D removes, Ctrl+S saves, Esc cancels."
                .to_string();
    }

    pub fn rows_saved(&mut self, count: usize) {
        self.message = format!("Saved {count} generation row(s).");
    }

    pub fn incomplete_rows(&mut self) {
        self.message =
            "Complete name, MVA, quantity and power factor on the highlighted rows.".to_string();
    }

    pub fn missing_file(&mut self) {
        self.message = "Please choose a CSV file to upload.".to_string();
    }

    pub fn submitting(&mut self) {
        self.message = "Generating spreadsheet…".to_string();
    }

    pub fn submit_failed(&mut self, err: &SubmitError) {
        self.message = format!("Error: {err}");
    }

    pub fn download_ready(&mut self) {
        self.message =
            "Spreadsheet generated. Press Ctrl+S to save it to disk.".to_string();
    }

    pub fn downloaded(&mut self, path: &Path) {
        self.message = format!("Saved {}", path.display());
    }

    pub fn pending_exit(&mut self) {
        self.message =
            "Unsaved changes. Press Ctrl+Q again to quit without submitting.".to_string();
    }
}
