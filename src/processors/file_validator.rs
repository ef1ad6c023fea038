use crate::error::Result;
use crate::models::{Grid, Header, SiteConstants};
use crate::readers::{segment_lines, ConstantsParser, HeaderParser, SampleParser, Segment};
use crate::utils::config::AuditConfig;
use crate::utils::constants::{EXPECTED_SEGMENT_COUNT, FIRST_SAMPLE_SEGMENT, MIN_SEGMENT_COUNT};
use std::path::Path;

/// A file that passed every structural and consistency check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFile {
    pub header: Header,
    pub constants: SiteConstants,
    pub grid: Grid,
    pub augmented: Option<char>,
    pub inconsistent_sample: Option<usize>,
}

/// Classification of one file, before any cross-file comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    IrregularSegmentCount { segment_count: usize },
    InsufficientSegments { segment_count: usize },
    Validated(Box<ValidatedFile>),
    Exceptional { detail: String },
}

/// Orchestrates segmenting and parsing of a single main data file
#[derive(Debug, Clone)]
pub struct FileValidator {
    header_parser: HeaderParser,
    constants_parser: ConstantsParser,
    expected_segment_count: usize,
}

impl FileValidator {
    pub fn new() -> Self {
        Self {
            header_parser: HeaderParser::new(),
            constants_parser: ConstantsParser::new(),
            expected_segment_count: EXPECTED_SEGMENT_COUNT,
        }
    }

    pub fn from_config(config: &AuditConfig) -> Self {
        Self {
            header_parser: HeaderParser::with_year_window(
                config.earliest_year,
                config.latest_year,
            ),
            constants_parser: ConstantsParser::new(),
            expected_segment_count: config.expected_segment_count,
        }
    }

    /// Classify one file from its raw lines. Never fails: errors become `Exceptional`.
    pub fn analyze<S: AsRef<str>>(&self, path: &Path, lines: &[S]) -> FileOutcome {
        let segments = segment_lines(lines);
        let segment_count = segments.len();

        // One conditional: an irregular count short-circuits the insufficient check
        if segment_count != self.expected_segment_count {
            FileOutcome::IrregularSegmentCount { segment_count }
        } else if segment_count < MIN_SEGMENT_COUNT {
            FileOutcome::InsufficientSegments { segment_count }
        } else {
            match self.validate_segments(path, &segments) {
                Ok(file) => FileOutcome::Validated(Box::new(file)),
                Err(e) => FileOutcome::Exceptional {
                    detail: e.to_string(),
                },
            }
        }
    }

    fn validate_segments(&self, path: &Path, segments: &[Segment]) -> Result<ValidatedFile> {
        let parsed = self.header_parser.parse(&segments[0], path)?;
        let constants = self.constants_parser.parse(&segments[1], &parsed.header)?;
        let summary = SampleParser::new(&parsed.header, &constants)
            .parse_samples(&segments[FIRST_SAMPLE_SEGMENT..])?;

        Ok(ValidatedFile {
            header: parsed.header,
            constants,
            grid: summary.grid,
            augmented: parsed.augmented,
            inconsistent_sample: summary.inconsistent_sample,
        })
    }
}

impl Default for FileValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// True when `grid` matches the last successfully validated file's grid
pub fn is_congruent(previous: Option<&Grid>, grid: &Grid) -> bool {
    previous == Some(grid)
}
