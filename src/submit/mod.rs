mod client;
mod download;
mod payload;

pub use client::{DEFAULT_ENDPOINT, SubmitError, UploadClient};
pub use download::{DOWNLOAD_FILE_NAME, save_document};
pub use payload::SubmissionPayload;
