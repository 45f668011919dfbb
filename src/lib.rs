#![deny(rust_2018_idioms)]

mod app;
mod domain;
mod form;
mod grid;
mod presentation;
mod submit;

pub use app::{SheetUi, UiOptions};
pub use domain::ConfigError;
pub use submit::{DEFAULT_ENDPOINT, DOWNLOAD_FILE_NAME, SubmitError};

pub mod prelude {
    pub use super::{SheetUi, UiOptions};
}
