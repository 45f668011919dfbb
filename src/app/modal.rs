use crossterm::event::KeyEvent;
use tracing::debug;

use crate::grid::{GridState, SavedRow, collect_rows};

/// The PRC-025 synchronous criteria modal. Existence of a `ModalState`
/// on the app is the Open state; opening always starts from a fresh grid.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    pub grid: GridState,
}

impl ModalState {
    pub fn new() -> Self {
        Self {
            grid: GridState::new(),
        }
    }

    /// Validates the grid and serializes the accepted rows. On failure the
    /// offending blank cells are flagged in place and nothing else changes.
    pub fn try_save(&mut self) -> Option<Vec<SavedRow>> {
        match collect_rows(&self.grid) {
            Ok(rows) => {
                debug!(rows = rows.len(), "criteria grid saved");
                Some(rows)
            }
            Err(incomplete) => {
                for (row, column) in incomplete.missing {
                    self.grid.flag_cell(row, column);
                }
                None
            }
        }
    }

    pub fn handle_edit(&mut self, key: &KeyEvent) -> bool {
        self.grid.handle_edit(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridColumn;
    use crossterm::event::KeyCode;

    fn type_into(modal: &mut ModalState, text: &str) {
        for c in text.chars() {
            modal.handle_edit(&KeyEvent::from(KeyCode::Char(c)));
        }
    }

    #[test]
    fn save_of_complete_row_returns_snapshot() {
        let mut modal = ModalState::new();
        type_into(&mut modal, "GenA");
        modal.grid.focus_next_cell();
        type_into(&mut modal, "2");
        modal.grid.focus_next_cell();
        type_into(&mut modal, "3");
        modal.grid.focus_next_cell();
        type_into(&mut modal, "0.9");
        let rows = modal.try_save().expect("complete row saves");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total, "6.0");
    }

    #[test]
    fn failed_save_flags_blank_cells_and_keeps_grid() {
        let mut modal = ModalState::new();
        type_into(&mut modal, "GenA");
        modal.grid.focus_next_cell();
        type_into(&mut modal, "2");
        assert!(modal.try_save().is_none());
        let row = &modal.grid.rows()[0];
        assert!(row.flagged[GridColumn::Quantity.index()]);
        assert!(row.flagged[GridColumn::PowerFactor.index()]);
        assert!(!row.flagged[GridColumn::Name.index()]);
        assert_eq!(row.name, "GenA", "no state change on abort");
    }

    #[test]
    fn editing_a_flagged_cell_clears_its_flags() {
        let mut modal = ModalState::new();
        type_into(&mut modal, "GenA");
        modal.grid.focus_next_cell();
        type_into(&mut modal, "2");
        assert!(modal.try_save().is_none());
        modal.grid.focus_next_cell();
        type_into(&mut modal, "3");
        assert!(!modal.grid.rows()[0].flagged.iter().any(|f| *f));
    }
}
