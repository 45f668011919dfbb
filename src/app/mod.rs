mod input;
mod modal;
mod options;
mod runtime;
mod sheet_ui;
mod status;
mod terminal;

pub use options::UiOptions;
pub use sheet_ui::SheetUi;
