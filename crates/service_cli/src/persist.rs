//! Report persistence.
//!
//! One operation: write the report text to a caller-supplied path, or to
//! a generated `dice_log_YYYYMMDD_HHMMSS.txt` in the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;

/// Generates the default report filename from the current local time.
pub fn default_report_path() -> PathBuf {
    PathBuf::from(format!(
        "dice_log_{}.txt",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Writes `text` as UTF-8 to `path` if given, else to a generated
/// timestamped filename. Returns the path actually used.
///
/// # Errors
///
/// Propagates the underlying I/O error unmodified; no alternate path is
/// attempted.
pub fn save_report(text: &str, path: Option<&Path>) -> Result<PathBuf> {
    let out_path = match path {
        Some(path) => path.to_path_buf(),
        None => default_report_path(),
    };
    fs::write(&out_path, text)?;
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_shape() {
        let path = default_report_path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("dice_log_"));
        assert!(name.ends_with(".txt"));
        // dice_log_ + YYYYMMDD + _ + HHMMSS + .txt
        assert_eq!(name.len(), "dice_log_".len() + 15 + ".txt".len());
    }

    #[test]
    fn test_save_to_explicit_path() {
        let path = std::env::temp_dir().join("dice_sim_persist_test.txt");
        let used = save_report("report body\n", Some(&path)).unwrap();
        assert_eq!(used, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "report body\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unwritable_path_propagates() {
        let path = Path::new("/nonexistent_dir_for_test/report.txt");
        assert!(save_report("x", Some(path)).is_err());
    }
}
