use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::{
    domain::{CSV_UPLOAD, PRC_025_SYNCHRONOUS, RELAY_LOADABILITY},
    form::FormState,
    grid::SavedRow,
    presentation::{self, ModalRender, UiContext},
    submit::{SubmissionPayload, SubmitError, UploadClient, save_document},
};

use super::{
    input::{KeyCommand, classify},
    modal::ModalState,
    options::UiOptions,
    status::StatusLine,
    terminal::TerminalGuard,
};

const ROOT_HELP: &str =
    "Tab/↑↓ move • ←/→ cycle selects • Ctrl+Tab section • Ctrl+S submit • Ctrl+Q quit";
const MODAL_HELP: &str =
    "Tab cell • ↑↓ row • Ctrl+N add row • Ctrl+D remove row • Ctrl+S save • Esc cancel";
const DOWNLOAD_HELP: &str =
    "Ctrl+S saves the workbook • editing any field returns to submit mode";

/// Which action the primary slot performs. Mirrors the submit/download
/// button swap of the entry sheet: exactly one of the two is live.
pub(crate) enum Phase {
    SubmitReady,
    DownloadReady { document: Vec<u8> },
}

pub(crate) struct App {
    form: FormState,
    client: UploadClient,
    options: UiOptions,
    status: StatusLine,
    modal: Option<ModalState>,
    saved_rows: Vec<SavedRow>,
    phase: Phase,
    pending_submit: bool,
    exit_armed: bool,
    should_quit: bool,
}

impl App {
    pub fn new(form: FormState, client: UploadClient, options: UiOptions) -> Self {
        Self {
            form,
            client,
            options,
            status: StatusLine::new(),
            modal: None,
            saved_rows: Vec::new(),
            phase: Phase::SubmitReady,
            pending_submit: false,
            exit_armed: false,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if self.pending_submit {
                // The status line already shows the in-flight message; the
                // exchange blocks the loop until it completes.
                self.pending_submit = false;
                self.perform_submit();
                continue;
            }
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(width, height) => {
                    terminal.resize(Rect::new(0, 0, width, height))?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let help = match (&self.modal, &self.phase) {
            (Some(_), _) => MODAL_HELP,
            (None, Phase::DownloadReady { .. }) => DOWNLOAD_HELP,
            (None, Phase::SubmitReady) => ROOT_HELP,
        };
        presentation::draw(
            frame,
            UiContext {
                title: &self.options.title,
                form: &self.form,
                status_message: self.status.message(),
                dirty: self.form.is_dirty(),
                download_ready: matches!(self.phase, Phase::DownloadReady { .. }),
                help,
                modal: self.modal.as_ref().map(|modal| ModalRender { grid: &modal.grid }),
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.modal.is_some() {
            self.handle_modal_key(key);
            return;
        }
        match classify(&key) {
            KeyCommand::Primary => {
                self.exit_armed = false;
                self.on_primary();
            }
            KeyCommand::Quit => self.on_exit(),
            KeyCommand::Dismiss => {
                self.exit_armed = false;
                self.status.ready();
            }
            KeyCommand::SwitchSection(delta) => {
                self.exit_armed = false;
                self.form.focus_next_section(delta);
            }
            KeyCommand::NextField | KeyCommand::NextRow => self.form.focus_next_field(),
            KeyCommand::PrevField | KeyCommand::PrevRow => self.form.focus_prev_field(),
            KeyCommand::Edit(event) => self.handle_field_input(&event),
            KeyCommand::AddRow | KeyCommand::RemoveRow | KeyCommand::None => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let Some(modal) = &mut self.modal else {
            return;
        };
        match classify(&key) {
            KeyCommand::Dismiss | KeyCommand::Quit => self.dismiss_modal(),
            KeyCommand::Primary => self.save_modal(),
            KeyCommand::AddRow => {
                let _ = modal.grid.add_row();
            }
            KeyCommand::RemoveRow => modal.grid.remove_row(),
            KeyCommand::NextField => modal.grid.focus_next_cell(),
            KeyCommand::PrevField => modal.grid.focus_prev_cell(),
            KeyCommand::NextRow => modal.grid.focus_row_delta(1),
            KeyCommand::PrevRow => modal.grid.focus_row_delta(-1),
            KeyCommand::Edit(event) => {
                if modal.handle_edit(&event) {
                    self.exit_armed = false;
                }
            }
            KeyCommand::SwitchSection(_) | KeyCommand::None => {}
        }
    }

    fn handle_field_input(&mut self, event: &KeyEvent) {
        let Some(field) = self.form.focused_field_mut() else {
            return;
        };
        if !field.handle_key(event) {
            return;
        }
        let id = field.spec.id.clone();
        let label = field.spec.label.clone();
        self.exit_armed = false;
        self.revert_download_ready();
        self.status.editing(&label);
        if id == RELAY_LOADABILITY && self.form.value(RELAY_LOADABILITY) == PRC_025_SYNCHRONOUS {
            self.open_modal();
        }
    }

    fn open_modal(&mut self) {
        // Opening always starts from a single empty row, even right after
        // a save; the select keeps its value while the modal is up.
        debug!("opening PRC-025 criteria modal");
        self.modal = Some(ModalState::new());
        self.status.modal_open();
    }

    fn dismiss_modal(&mut self) {
        debug!("criteria modal dismissed");
        self.modal = None;
        self.form.set_select_value(RELAY_LOADABILITY, "");
        // A cancel leaves nothing behind: rows saved earlier in the session
        // must not ride along with a later submission.
        self.saved_rows.clear();
        self.status.ready();
    }

    fn save_modal(&mut self) {
        let Some(modal) = &mut self.modal else {
            return;
        };
        match modal.try_save() {
            Some(rows) => {
                let count = rows.len();
                self.saved_rows = rows;
                self.modal = None;
                self.status.rows_saved(count);
            }
            None => self.status.incomplete_rows(),
        }
    }

    fn on_primary(&mut self) {
        match self.phase {
            Phase::SubmitReady => {
                if self.form.value(CSV_UPLOAD).trim().is_empty() {
                    self.status.missing_file();
                    return;
                }
                self.status.submitting();
                self.pending_submit = true;
            }
            Phase::DownloadReady { .. } => self.on_download(),
        }
    }

    fn perform_submit(&mut self) {
        let csv_path = PathBuf::from(self.form.value(CSV_UPLOAD).trim());
        let payload = SubmissionPayload::collect(&self.form, &self.saved_rows);
        match self.client.upload(&payload, &csv_path) {
            Ok(document) => {
                self.form.reset_fields();
                self.phase = Phase::DownloadReady { document };
                self.status.download_ready();
            }
            Err(SubmitError::MissingFile) => self.status.missing_file(),
            Err(err) => {
                warn!(error = %err, "submission failed");
                self.status.submit_failed(&err);
            }
        }
    }

    fn on_download(&mut self) {
        let Phase::DownloadReady { document } =
            std::mem::replace(&mut self.phase, Phase::SubmitReady)
        else {
            return;
        };
        match save_document(&self.options.output_dir, &document) {
            Ok(path) => self.status.downloaded(&path),
            Err(err) => {
                warn!(error = %err, "saving workbook failed");
                // Keep the document so the download can be retried.
                self.phase = Phase::DownloadReady { document };
                self.status.set_raw(format!("Error: {err}"));
            }
        }
    }

    fn revert_download_ready(&mut self) {
        if matches!(self.phase, Phase::DownloadReady { .. }) {
            debug!("field edited; discarding undownloaded workbook");
            self.phase = Phase::SubmitReady;
        }
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.form.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }
}

#[cfg(test)]
impl App {
    pub(crate) fn handle_key_for_test(&mut self, key: KeyEvent) {
        self.handle_key(key);
    }

    pub(crate) fn form_mut_for_test(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub(crate) fn modal_for_test(&self) -> Option<&ModalState> {
        self.modal.as_ref()
    }

    pub(crate) fn saved_rows_for_test(&self) -> &[SavedRow] {
        &self.saved_rows
    }

    pub(crate) fn status_for_test(&self) -> &str {
        self.status.message()
    }

    pub(crate) fn pending_submit_for_test(&self) -> bool {
        self.pending_submit
    }

    pub(crate) fn set_phase_for_test(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn download_ready_for_test(&self) -> bool {
        matches!(self.phase, Phase::DownloadReady { .. })
    }
}
