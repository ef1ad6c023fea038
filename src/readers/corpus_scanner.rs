use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lists a corpus' main data files in sorted path order: monthly directories, then their files
#[derive(Debug, Clone, Default)]
pub struct CorpusScanner;

impl CorpusScanner {
    pub fn new() -> Self {
        Self
    }

    pub fn find_main_data_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for directory in sorted_entries(root)? {
            if !directory.is_dir() {
                continue;
            }

            let mut count = 0;
            for path in sorted_entries(&directory)? {
                if path.is_file() {
                    files.push(path);
                    count += 1;
                }
            }
            debug!("Found {} files in {}", count, directory.display());
        }

        Ok(files)
    }
}

/// Visible entries of a directory, sorted lexically
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        entries.push(entry.path());
    }
    entries.sort();
    Ok(entries)
}
