use anyhow::{Context, Result};
use tracing::info;

use crate::{
    domain::{self, CSV_UPLOAD},
    form::FormState,
    submit::UploadClient,
};

use super::{options::UiOptions, runtime::App};

/// Builder for the sheet UI. Checks the field catalog against its own
/// contract before any terminal state changes, so a broken catalog fails
/// with a plain error instead of a garbled screen.
pub struct SheetUi {
    options: UiOptions,
    csv_path: Option<String>,
}

impl Default for SheetUi {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetUi {
    pub fn new() -> Self {
        Self {
            options: UiOptions::default(),
            csv_path: None,
        }
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Pre-fills the CSV upload field, the keyboard equivalent of arriving
    /// with a file already chosen.
    pub fn with_csv_path(mut self, path: impl Into<String>) -> Self {
        self.csv_path = Some(path.into());
        self
    }

    pub fn run(self) -> Result<()> {
        let catalog = domain::standard_catalog();
        domain::check_catalog(&catalog).context("field catalog failed its contract check")?;

        let mut form = FormState::from_catalog(&catalog);
        if let Some(path) = &self.csv_path {
            form.set_text_value(CSV_UPLOAD, path.clone());
        }

        let client = UploadClient::new(&self.options.endpoint);
        info!(endpoint = %self.options.endpoint, "starting sheet ui");
        App::new(form, client, self.options).run()
    }
}
