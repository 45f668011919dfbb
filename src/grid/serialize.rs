use serde::Serialize;

use super::{
    row::{GridColumn, RowState},
    state::GridState,
};

/// Snapshot of one accepted row, taken when the modal is saved. All values
/// are kept as the strings the grid displayed, including the derived cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedRow {
    pub name: String,
    pub mva: String,
    pub qty: String,
    pub total: String,
    pub pf: String,
    pub q: String,
    pub mw: String,
    pub qcalc: String,
}

impl SavedRow {
    fn from_row(row: &RowState) -> Self {
        SavedRow {
            name: row.name.clone(),
            mva: row.rated_mva.clone(),
            qty: row.quantity.clone(),
            total: row.total_mva.clone(),
            pf: row.power_factor.clone(),
            q: row.reactive_mvar.clone(),
            mw: row.real_mw.clone(),
            qcalc: row.reactive_calc.clone(),
        }
    }
}

/// Save rejected: the listed cells must be filled before the grid can be
/// serialized. Row indices are zero-based grid positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteRows {
    pub missing: Vec<(usize, GridColumn)>,
}

const REQUIRED: [GridColumn; 4] = [
    GridColumn::Name,
    GridColumn::RatedMva,
    GridColumn::Quantity,
    GridColumn::PowerFactor,
];

const NUMERIC: [GridColumn; 3] = [
    GridColumn::RatedMva,
    GridColumn::Quantity,
    GridColumn::PowerFactor,
];

/// Validates the grid and serializes the accepted rows.
///
/// A row that provides any of the numeric inputs (MVA, quantity, power
/// factor) must provide all four required cells, name included. A row
/// carrying only a name is legal but skipped. Rows whose every cell beyond
/// the name is blank are excluded from the output.
pub fn collect_rows(grid: &GridState) -> Result<Vec<SavedRow>, IncompleteRows> {
    let mut missing = Vec::new();
    for (index, row) in grid.rows().iter().enumerate() {
        let any_numeric = NUMERIC
            .iter()
            .any(|col| !row.cell(*col).trim().is_empty());
        if !any_numeric {
            continue;
        }
        for col in REQUIRED {
            if row.cell(col).trim().is_empty() {
                missing.push((index, col));
            }
        }
    }
    if !missing.is_empty() {
        return Err(IncompleteRows { missing });
    }

    let rows = grid
        .rows()
        .iter()
        .filter(|row| has_content_beyond_name(row))
        .map(SavedRow::from_row)
        .collect();
    Ok(rows)
}

fn has_content_beyond_name(row: &RowState) -> bool {
    [
        &row.rated_mva,
        &row.quantity,
        &row.power_factor,
        &row.reactive_mvar,
        &row.total_mva,
        &row.real_mw,
        &row.reactive_calc,
    ]
    .iter()
    .any(|cell| !cell.trim().is_empty())
}
