use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::row::{GridColumn, RowState, format_fixed1, parse_or_zero};

/// Hard cap on generation-unit rows, matching the entry sheet.
pub const MAX_ROWS: usize = 16;

/// Footer totals, one per numeric column. Blank means the column sums to
/// exactly zero (an all-empty grid shows blanks, never "0.0").
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridTotals {
    pub total_mva: String,
    pub reactive_mvar: String,
    pub real_mw: String,
    pub reactive_calc: String,
}

/// The dynamic row grid: an ordered set of rows (display order is entry
/// order), a cell cursor over the editable columns, and the guarantee that
/// at least one row always exists.
#[derive(Debug, Clone)]
pub struct GridState {
    rows: Vec<RowState>,
    focus_row: usize,
    focus_col: GridColumn,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

impl GridState {
    pub fn new() -> Self {
        Self {
            rows: vec![RowState::default()],
            focus_row: 0,
            focus_col: GridColumn::Name,
        }
    }

    pub fn rows(&self) -> &[RowState] {
        &self.rows
    }

    pub fn focus(&self) -> (usize, GridColumn) {
        (self.focus_row, self.focus_col)
    }

    /// Live "current/max" indicator.
    pub fn row_count_label(&self) -> String {
        format!("{}/{}", self.rows.len(), MAX_ROWS)
    }

    /// Appends an empty row and focuses it. A no-op once the cap is reached.
    pub fn add_row(&mut self) -> bool {
        if self.rows.len() >= MAX_ROWS {
            return false;
        }
        self.rows.push(RowState::default());
        self.focus_row = self.rows.len() - 1;
        self.focus_col = GridColumn::Name;
        true
    }

    /// Removes the focused row. The last remaining row is cleared in place
    /// instead, so the grid never reaches zero rows.
    pub fn remove_row(&mut self) {
        if self.rows.len() == 1 {
            self.rows[0].clear();
            return;
        }
        self.rows.remove(self.focus_row);
        if self.focus_row >= self.rows.len() {
            self.focus_row = self.rows.len() - 1;
        }
    }

    /// Resets the grid to a single empty row.
    pub fn reset(&mut self) {
        *self = GridState::new();
    }

    pub fn focus_next_cell(&mut self) {
        let next = self.focus_col.index() + 1;
        if next < GridColumn::EDITABLE.len() {
            self.focus_col = GridColumn::EDITABLE[next];
        } else if self.focus_row + 1 < self.rows.len() {
            self.focus_row += 1;
            self.focus_col = GridColumn::Name;
        } else {
            self.focus_row = 0;
            self.focus_col = GridColumn::Name;
        }
    }

    pub fn focus_prev_cell(&mut self) {
        let index = self.focus_col.index();
        if index > 0 {
            self.focus_col = GridColumn::EDITABLE[index - 1];
        } else if self.focus_row > 0 {
            self.focus_row -= 1;
            self.focus_col = GridColumn::ReactiveMvar;
        } else {
            self.focus_row = self.rows.len() - 1;
            self.focus_col = GridColumn::ReactiveMvar;
        }
    }

    pub fn focus_row_delta(&mut self, delta: i32) {
        let len = self.rows.len() as i32;
        let mut next = self.focus_row as i32 + delta;
        next = ((next % len) + len) % len;
        self.focus_row = next as usize;
    }

    /// Applies a key press to the focused cell and recomputes the row when
    /// it changed. Returns true when an edit happened.
    pub fn handle_edit(&mut self, key: &KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        let Some(row) = self.rows.get_mut(self.focus_row) else {
            return false;
        };
        let cell = row.cell_mut(self.focus_col);
        let edited = match key.code {
            KeyCode::Char(c) => {
                cell.push(c);
                true
            }
            KeyCode::Backspace => {
                cell.pop();
                true
            }
            KeyCode::Delete => {
                cell.clear();
                true
            }
            _ => false,
        };
        if edited {
            row.clear_flags();
            row.recalc();
        }
        edited
    }

    pub fn flag_cell(&mut self, row: usize, column: GridColumn) {
        if let Some(row) = self.rows.get_mut(row)
            && column.index() < 4
        {
            row.flagged[column.index()] = true;
        }
    }

    /// Column sums over the displayed values, blank/non-numeric counted as
    /// zero; a sum of exactly zero displays blank.
    pub fn totals(&self) -> GridTotals {
        let mut total_mva = 0.0;
        let mut reactive_mvar = 0.0;
        let mut real_mw = 0.0;
        let mut reactive_calc = 0.0;
        for row in &self.rows {
            total_mva += parse_or_zero(&row.total_mva);
            reactive_mvar += parse_or_zero(&row.reactive_mvar);
            real_mw += parse_or_zero(&row.real_mw);
            reactive_calc += parse_or_zero(&row.reactive_calc);
        }
        GridTotals {
            total_mva: total_cell(total_mva),
            reactive_mvar: total_cell(reactive_mvar),
            real_mw: total_cell(real_mw),
            reactive_calc: total_cell(reactive_calc),
        }
    }

    #[cfg(test)]
    pub(crate) fn rows_mut(&mut self) -> &mut Vec<RowState> {
        &mut self.rows
    }
}

fn total_cell(sum: f64) -> String {
    if sum == 0.0 {
        String::new()
    } else {
        format_fixed1(sum)
    }
}
