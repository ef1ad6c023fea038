use crate::error::Result;
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use encoding_rs::{UTF_8, WINDOWS_1252};
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Reads a main data file into raw lines
#[derive(Debug, Clone, Copy)]
pub struct MainDataReader {
    use_mmap: bool,
}

impl MainDataReader {
    pub fn new() -> Self {
        Self { use_mmap: false }
    }

    pub fn with_mmap(use_mmap: bool) -> Self {
        Self { use_mmap }
    }

    /// Read a file's lines, decoding as UTF-8 or falling back to Windows-1252
    pub fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let text = if self.use_mmap {
            self.read_mmap(path)?
        } else {
            self.read_buffered(path)?
        };
        Ok(text.lines().map(str::to_string).collect())
    }

    fn read_buffered(&self, path: &Path) -> Result<String> {
        let file = File::open(path)?;
        let mut reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(decode(&bytes, path))
    }

    fn read_mmap(&self, path: &Path) -> Result<String> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Ok(String::new());
        }
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(decode(&mmap, path))
    }
}

impl Default for MainDataReader {
    fn default() -> Self {
        Self::new()
    }
}

fn decode(bytes: &[u8], path: &Path) -> String {
    let (text, had_errors) = UTF_8.decode_without_bom_handling(bytes);
    if !had_errors {
        return text.into_owned();
    }

    debug!("{} is not valid UTF-8, decoding as Windows-1252", path.display());
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text.into_owned()
}
