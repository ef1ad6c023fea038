use crate::error::{AuditError, Result};
use crate::models::{Grid, Header, SiteConstants};
use crate::readers::cursor::SegmentCursor;
use crate::readers::fields::{
    ensure_in_range, parse_number, split_clock, split_date, split_fields, DateTimeFields,
};
use crate::readers::segmenter::Segment;
use crate::utils::constants::{HOUR_LIMIT, MINUTE_LIMIT, SECOND_LIMIT};
use chrono::Duration;
use tracing::debug;

/// File-level outcome of sample parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSummary {
    /// Grid of the first sample, representative of the whole file
    pub grid: Grid,
    /// Index of the first sample whose grid drifted from the first one
    pub inconsistent_sample: Option<usize>,
}

/// Validates data segments against the file's header and constants
pub struct SampleParser<'a> {
    header: &'a Header,
    constants: &'a SiteConstants,
}

impl<'a> SampleParser<'a> {
    pub fn new(header: &'a Header, constants: &'a SiteConstants) -> Self {
        Self { header, constants }
    }

    /// Parse every sample in order, stopping at the first grid drift
    pub fn parse_samples(&self, samples: &[Segment]) -> Result<SampleSummary> {
        let (first, rest) = samples.split_first().ok_or(AuditError::SegmentTooShort {
            segment: "sample",
            line: 0,
            available: 0,
        })?;

        let grid = self.parse_sample(0, first)?;
        let mut inconsistent_sample = None;

        for (offset, segment) in rest.iter().enumerate() {
            let index = offset + 1;
            let sample_grid = self.parse_sample(index, segment)?;
            if sample_grid != grid {
                debug!(
                    "Sample {} grid differs in {:?}",
                    index,
                    grid.differences(&sample_grid)
                );
                inconsistent_sample = Some(index);
                break;
            }
        }

        Ok(SampleSummary {
            grid,
            inconsistent_sample,
        })
    }

    /// Parse one sample segment into its grid
    pub fn parse_sample(&self, index: usize, segment: &[String]) -> Result<Grid> {
        let cursor = SegmentCursor::new("sample", segment);

        let [start_date, start_time, interval] = split_fields::<3>(cursor.line(0)?, "sample start")?;
        let start = DateTimeFields::parse(
            split_date(start_date, "sample date")?,
            split_clock(start_time, "sample time")?,
        )?;
        let [hours, minutes, seconds] = split_clock(interval, "sample interval")?;
        let hours: i64 = parse_number(hours, "sample hour")?;
        let minutes: i64 = parse_number(minutes, "sample minute")?;
        let seconds: i64 = parse_number(seconds, "sample second")?;

        ensure_in_range("Sample hour", hours, 0..HOUR_LIMIT)?;
        ensure_in_range("Sample minute", minutes, 0..MINUTE_LIMIT)?;
        ensure_in_range("Sample second", seconds, 0..SECOND_LIMIT)?;

        let sample_start = start.to_timestamp()?;
        let sample_interval =
            Duration::hours(hours) + Duration::minutes(minutes) + Duration::seconds(seconds);

        let expected_start = i32::try_from(index)
            .ok()
            .and_then(|n| sample_interval.checked_mul(n))
            .and_then(|offset| self.header.start_timestamp.checked_add_signed(offset));
        if expected_start != Some(sample_start) {
            return Err(AuditError::TimestampMismatch {
                header_start: self.header.start_timestamp,
                sample_start,
                index,
                interval_seconds: sample_interval.num_seconds(),
            });
        }

        let variables: Vec<&str> = cursor.line(1)?.split_whitespace().skip(1).collect();
        if variables != self.constants.variables {
            return Err(AuditError::VariableMismatch {
                expected: self.constants.variables.clone(),
                found: variables.into_iter().map(str::to_string).collect(),
            });
        }

        let elevations = cursor
            .rest_from(2)
            .iter()
            .map(|row| {
                let first = row.split_whitespace().next().unwrap_or_default();
                parse_number::<i64>(first, "elevation")
            })
            .collect::<Result<Vec<_>>>()?;

        let (min_elevation, max_elevation) = match (elevations.first(), elevations.last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => {
                return Err(AuditError::SegmentTooShort {
                    segment: "sample",
                    line: 2,
                    available: cursor.line_count(),
                })
            }
        };

        let bin_count = elevations.len();
        if bin_count != self.header.bin_count {
            return Err(AuditError::BinCountMismatch {
                expected: self.header.bin_count,
                found: bin_count,
            });
        }
        if bin_count < 2 {
            return Err(AuditError::DegenerateGrid { bin_count });
        }

        let bin_height =
            elevation_span(min_elevation, max_elevation)? / (bin_count as i64 - 1);
        for pair in elevations.windows(2) {
            if elevation_span(pair[0], pair[1])? != bin_height {
                return Err(AuditError::UnevenElevation {
                    lower: pair[0],
                    upper: pair[1],
                    bin_height,
                });
            }
        }

        Ok(Grid {
            sample_interval,
            min_elevation,
            max_elevation,
            bin_height,
            bin_count,
        })
    }
}

fn elevation_span(lower: i64, upper: i64) -> Result<i64> {
    upper
        .checked_sub(lower)
        .ok_or(AuditError::ElevationOverflow { lower, upper })
}
