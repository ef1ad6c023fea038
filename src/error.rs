use chrono::NaiveDateTime;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuditError>;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Async task error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Invalid main data path {path:?}: {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    #[error("{segment} segment too short: needed line {line} but only {available} lines present")]
    SegmentTooShort {
        segment: &'static str,
        line: usize,
        available: usize,
    },

    #[error("Malformed {field} line '{line}': expected {expected} fields")]
    MalformedLine {
        field: &'static str,
        line: String,
        expected: usize,
    },

    #[error("Invalid {field} value '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("File format {found} is incorrect")]
    FormatTag { found: String },

    #[error("Directory year {directory} is not same as file year {file}")]
    DirectoryFileYear { directory: String, file: String },

    #[error("Directory month {directory} is not same as file month {file}")]
    DirectoryFileMonth { directory: String, file: String },

    #[error("Directory year {directory} is not same as start year {start}")]
    DirectoryStartYear { directory: String, start: String },

    #[error("Directory month {directory} is not same as start month {start}")]
    DirectoryStartMonth { directory: String, start: String },

    #[error("File day {file} is not same as start day {start}")]
    FileStartDay { file: String, start: String },

    #[error("Instrument type {found} is incorrect")]
    InstrumentType { found: String },

    #[error("File extension {found} is incorrect")]
    FileExtension { found: String },

    #[error("{field} {value} out of range")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("Invalid calendar timestamp '{value}'")]
    InvalidTimestamp { value: String },

    #[error("Constant '{label}' missing before first comment")]
    MissingConstant { label: &'static str },

    #[error("Main data declaration misplaced, found '{found}'")]
    MainDataMisplaced { found: String },

    #[error("Malformed variable declaration '{line}'")]
    MalformedVariable { line: String },

    #[error("First variable is not z, found '{found}'")]
    FirstVariable { found: String },

    #[error("Error code declaration misplaced, found '{found}'")]
    ErrorCodeMisplaced { found: String },

    #[error(
        "Mismatched file start time {header_start} and sample start time {sample_start} (sample = {index}, interval = {interval_seconds})"
    )]
    TimestampMismatch {
        header_start: NaiveDateTime,
        sample_start: NaiveDateTime,
        index: usize,
        interval_seconds: i64,
    },

    #[error("Mismatched file variable list {expected:?} and sample variable list {found:?}")]
    VariableMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Mismatched file elevation count {expected} and sample elevation count {found}")]
    BinCountMismatch { expected: usize, found: usize },

    #[error("Bin count {bin_count} cannot define a bin height")]
    DegenerateGrid { bin_count: usize },

    #[error("Uneven elevation interval {lower} to {upper} compared to bin height {bin_height}")]
    UnevenElevation {
        lower: i64,
        upper: i64,
        bin_height: i64,
    },

    #[error("Elevation span {lower} to {upper} overflows")]
    ElevationOverflow { lower: i64, upper: i64 },
}
