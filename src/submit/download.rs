use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::info;

/// Fixed filename the generated workbook is saved under.
pub const DOWNLOAD_FILE_NAME: &str = "Updated Line Protection Calculation Sheet.xlsm";

/// Writes the received workbook into `dir`, creating it if needed, and
/// returns the full path of the saved file.
pub fn save_document(dir: &Path, document: &[u8]) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(DOWNLOAD_FILE_NAME);
    fs::write(&path, document)?;
    info!(path = %path.display(), bytes = document.len(), "workbook saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_under_the_fixed_filename() {
        let dir = std::env::temp_dir().join("linesheet_download_test");
        let path = save_document(&dir, b"workbook").expect("save");
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(DOWNLOAD_FILE_NAME)
        );
        assert_eq!(fs::read(&path).expect("read back"), b"workbook");
        let _ = fs::remove_dir_all(&dir);
    }
}
