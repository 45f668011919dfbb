mod row;
mod serialize;
mod state;

pub use row::{GridColumn, RowState};
pub use serialize::{IncompleteRows, SavedRow, collect_rows};
pub use state::{GridState, GridTotals, MAX_ROWS};
