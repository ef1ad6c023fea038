use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Parsed content of a main data file's first segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub format_tag: String,
    pub start_timestamp: NaiveDateTime,
    pub file_count: u32,
    pub comment_count: u32,
    pub variable_count: usize,
    pub bin_count: usize,
}
