use crate::error::{AuditError, Result};
use crate::utils::constants::{EXTENSION_SEPARATOR, FILENAME_EXTRA_POSITION};
use chrono::{Datelike, Local};
use std::path::{Path, PathBuf};

/// Date fields encoded in a main data file's location: `{YYYY}{MM}/{YY}{MM}{DD}?.mnd`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainDataPath {
    pub dir_year: String,
    pub dir_month: String,
    pub file_year: String,
    pub file_month: String,
    pub file_day: String,
    pub extra: char,
    pub extension: String,
}

impl MainDataPath {
    /// Decompose the last two path components into their date fields
    pub fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|f| f.to_str())
            .ok_or_else(|| invalid_path(path, "missing file name"))?;
        let dir_name = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|d| d.to_str())
            .ok_or_else(|| invalid_path(path, "missing monthly directory"))?;

        let dir: Vec<char> = dir_name.chars().collect();
        if dir.len() < 4 {
            return Err(invalid_path(
                path,
                &format!("directory name '{}' too short", dir_name),
            ));
        }

        let file: Vec<char> = file_name.chars().collect();
        if file.len() <= FILENAME_EXTRA_POSITION {
            return Err(invalid_path(
                path,
                &format!("file name '{}' too short", file_name),
            ));
        }

        Ok(Self {
            dir_year: dir[..4].iter().collect(),
            dir_month: dir[dir.len() - 2..].iter().collect(),
            file_year: file[..2].iter().collect(),
            file_month: file[2..4].iter().collect(),
            file_day: file[4..6].iter().collect(),
            extra: file[FILENAME_EXTRA_POSITION],
            extension: file[file.len().saturating_sub(3)..].iter().collect(),
        })
    }

    /// Trailing two digits of the directory year
    pub fn dir_year_suffix(&self) -> &str {
        &self.dir_year[self.dir_year.len().saturating_sub(2)..]
    }

    /// True when an unexpected character sits where the extension separator belongs
    pub fn is_augmented(&self) -> bool {
        self.extra != EXTENSION_SEPARATOR
    }
}

fn invalid_path(path: &Path, reason: &str) -> AuditError {
    AuditError::InvalidPath {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Generate default report filename with format: sodar-audit-{YYMMDD}.json
pub fn generate_default_report_filename() -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("sodar-audit-{:02}{:02}{:02}.json", year, month, day);
    PathBuf::from("output").join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_main_data_path() {
        let path = Path::new("/data/mnd/201301/130115.mnd");
        let parsed = MainDataPath::from_path(path).unwrap();

        assert_eq!(parsed.dir_year, "2013");
        assert_eq!(parsed.dir_month, "01");
        assert_eq!(parsed.dir_year_suffix(), "13");
        assert_eq!(parsed.file_year, "13");
        assert_eq!(parsed.file_month, "01");
        assert_eq!(parsed.file_day, "15");
        assert_eq!(parsed.extra, '.');
        assert_eq!(parsed.extension, "mnd");
        assert!(!parsed.is_augmented());
    }

    #[test]
    fn test_augmented_main_data_path() {
        let path = Path::new("201302/130201x.mnd");
        let parsed = MainDataPath::from_path(path).unwrap();

        assert_eq!(parsed.extra, 'x');
        assert_eq!(parsed.extension, "mnd");
        assert!(parsed.is_augmented());
    }

    #[test]
    fn test_short_names_rejected() {
        assert!(matches!(
            MainDataPath::from_path(Path::new("201301/1301")),
            Err(AuditError::InvalidPath { .. })
        ));
        assert!(matches!(
            MainDataPath::from_path(Path::new("x/130101.mnd")),
            Err(AuditError::InvalidPath { .. })
        ));
        assert!(MainDataPath::from_path(Path::new("130101.mnd")).is_err());
    }

    #[test]
    fn test_generate_default_report_filename() {
        let filename = generate_default_report_filename();
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.contains("sodar-audit-"));
        assert!(filename_str.ends_with(".json"));
        assert!(filename.starts_with("output"));
    }
}
