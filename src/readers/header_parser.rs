use crate::error::{AuditError, Result};
use crate::models::Header;
use crate::readers::cursor::SegmentCursor;
use crate::readers::fields::{
    ensure_in_range, parse_number, split_clock, split_date, split_fields, DateTimeFields,
};
use crate::utils::constants::{
    EARLIEST_START_YEAR, FORMAT_TAG, HOUR_LIMIT, INSTRUMENT_TYPE, LATEST_START_YEAR,
    MAIN_DATA_EXTENSION, MINUTE_LIMIT, SECOND_LIMIT,
};
use crate::utils::filename::MainDataPath;
use std::path::Path;

/// Header plus the advisory raised while parsing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    pub header: Header,
    /// Extra filename character when the name is augmented
    pub augmented: Option<char>,
}

/// Parses segment 0 and cross-checks it against the path-encoded date
#[derive(Debug, Clone)]
pub struct HeaderParser {
    earliest_year: i64,
    latest_year: i64,
}

impl HeaderParser {
    pub fn new() -> Self {
        Self {
            earliest_year: EARLIEST_START_YEAR,
            latest_year: LATEST_START_YEAR,
        }
    }

    pub fn with_year_window(earliest_year: i64, latest_year: i64) -> Self {
        Self {
            earliest_year,
            latest_year,
        }
    }

    pub fn parse(&self, segment: &[String], path: &Path) -> Result<ParsedHeader> {
        let cursor = SegmentCursor::new("header", segment);

        let format_tag = cursor.line(0)?;
        let [start_date, start_time, file_count] = split_fields::<3>(cursor.line(1)?, "start")?;
        let date = split_date(start_date, "start date")?;
        let clock = split_clock(start_time, "start time")?;
        let instrument_type = cursor.line(2)?;
        let [comment_count, variable_count, bin_count] =
            split_fields::<3>(cursor.line(3)?, "counts")?;

        let location = MainDataPath::from_path(path)?;
        let [start_year, start_month, start_day] = date;

        if format_tag != FORMAT_TAG {
            return Err(AuditError::FormatTag {
                found: format_tag.to_string(),
            });
        }
        if location.dir_year_suffix() != location.file_year {
            return Err(AuditError::DirectoryFileYear {
                directory: location.dir_year.clone(),
                file: location.file_year.clone(),
            });
        }
        if location.dir_month != location.file_month {
            return Err(AuditError::DirectoryFileMonth {
                directory: location.dir_month.clone(),
                file: location.file_month.clone(),
            });
        }
        if location.dir_year != start_year {
            return Err(AuditError::DirectoryStartYear {
                directory: location.dir_year.clone(),
                start: start_year.to_string(),
            });
        }
        if location.dir_month != start_month {
            return Err(AuditError::DirectoryStartMonth {
                directory: location.dir_month.clone(),
                start: start_month.to_string(),
            });
        }
        if location.file_day != start_day {
            return Err(AuditError::FileStartDay {
                file: location.file_day.clone(),
                start: start_day.to_string(),
            });
        }
        if instrument_type != INSTRUMENT_TYPE {
            return Err(AuditError::InstrumentType {
                found: instrument_type.to_string(),
            });
        }
        if location.extension != MAIN_DATA_EXTENSION {
            return Err(AuditError::FileExtension {
                found: location.extension.clone(),
            });
        }

        let start = DateTimeFields::parse(date, clock)?;
        let file_count = parse_number(file_count, "file count")?;
        let comment_count = parse_number(comment_count, "comment count")?;
        let variable_count = parse_number(variable_count, "variable count")?;
        let bin_count = parse_number(bin_count, "bin count")?;

        ensure_in_range(
            "Start year",
            start.year,
            self.earliest_year..self.latest_year + 1,
        )?;
        ensure_in_range("Start month", start.month, 1..13)?;
        ensure_in_range("Start day", start.day, 1..32)?;
        ensure_in_range("Start hour", start.hour, 0..HOUR_LIMIT)?;
        ensure_in_range("Start minute", start.minute, 0..MINUTE_LIMIT)?;
        ensure_in_range("Start second", start.second, 0..SECOND_LIMIT)?;

        let augmented = location.is_augmented().then_some(location.extra);
        let start_timestamp = start.to_timestamp()?;

        Ok(ParsedHeader {
            header: Header {
                format_tag: format_tag.to_string(),
                start_timestamp,
                file_count,
                comment_count,
                variable_count,
                bin_count,
            },
            augmented,
        })
    }
}

impl Default for HeaderParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn segment(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    fn valid_segment() -> Vec<String> {
        segment(&["FORMAT-1", "2013-01-15 00:00:00 1", "SFAS", "2 4 48"])
    }

    fn path() -> &'static Path {
        Path::new("/mnd/201301/130115.mnd")
    }

    #[test]
    fn test_parse_valid_header() {
        let parsed = HeaderParser::new().parse(&valid_segment(), path()).unwrap();
        let header = parsed.header;

        assert_eq!(header.format_tag, "FORMAT-1");
        assert_eq!(
            header.start_timestamp,
            NaiveDate::from_ymd_opt(2013, 1, 15)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
        assert_eq!(header.file_count, 1);
        assert_eq!(header.comment_count, 2);
        assert_eq!(header.variable_count, 4);
        assert_eq!(header.bin_count, 48);
        assert_eq!(parsed.augmented, None);
    }

    #[test]
    fn test_corrupted_instrument_type() {
        let mut lines = valid_segment();
        lines[2] = "XXXX".to_string();

        match HeaderParser::new().parse(&lines, path()) {
            Err(AuditError::InstrumentType { found }) => assert_eq!(found, "XXXX"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_corrupted_format_tag() {
        let mut lines = valid_segment();
        lines[0] = "FORMAT-0".to_string();

        let err = HeaderParser::new().parse(&lines, path()).unwrap_err();
        assert!(matches!(err, AuditError::FormatTag { ref found } if found == "FORMAT-0"));
        assert!(err.to_string().contains("FORMAT-0"));
    }

    #[test]
    fn test_path_date_mismatches() {
        let parser = HeaderParser::new();
        let lines = valid_segment();

        assert!(matches!(
            parser.parse(&lines, Path::new("201301/120115.mnd")),
            Err(AuditError::DirectoryFileYear { .. })
        ));
        assert!(matches!(
            parser.parse(&lines, Path::new("201301/130215.mnd")),
            Err(AuditError::DirectoryFileMonth { .. })
        ));
        assert!(matches!(
            parser.parse(&lines, Path::new("201301/130116.mnd")),
            Err(AuditError::FileStartDay { .. })
        ));
        assert!(matches!(
            parser.parse(&lines, Path::new("201301/130115.txt")),
            Err(AuditError::FileExtension { .. })
        ));

        let mut other_year = lines.clone();
        other_year[1] = "2012-01-15 00:00:00 1".to_string();
        match parser.parse(&other_year, path()) {
            Err(AuditError::DirectoryStartYear { directory, start }) => {
                assert_eq!(directory, "2013");
                assert_eq!(start, "2012");
            }
            other => panic!("unexpected {:?}", other),
        }

        let mut other_month = lines;
        other_month[1] = "2013-02-15 00:00:00 1".to_string();
        assert!(matches!(
            parser.parse(&other_month, path()),
            Err(AuditError::DirectoryStartMonth { .. })
        ));
    }

    #[test]
    fn test_year_out_of_window() {
        let lines = segment(&["FORMAT-1", "2014-01-15 00:00:00 1", "SFAS", "2 4 48"]);
        let result = HeaderParser::new().parse(&lines, Path::new("201401/140115.mnd"));
        assert!(matches!(
            result,
            Err(AuditError::OutOfRange {
                field: "Start year",
                value: 2014
            })
        ));

        let widened = HeaderParser::with_year_window(2009, 2020);
        assert!(widened.parse(&lines, Path::new("201401/140115.mnd")).is_ok());
    }

    #[test]
    fn test_permissive_hour_fails_at_timestamp() {
        let mut lines = valid_segment();
        lines[1] = "2013-01-15 24:00:00 1".to_string();
        assert!(matches!(
            HeaderParser::new().parse(&lines, path()),
            Err(AuditError::InvalidTimestamp { .. })
        ));

        lines[1] = "2013-01-15 25:00:00 1".to_string();
        assert!(matches!(
            HeaderParser::new().parse(&lines, path()),
            Err(AuditError::OutOfRange {
                field: "Start hour",
                ..
            })
        ));
    }

    #[test]
    fn test_augmented_filename_is_advisory() {
        let parsed = HeaderParser::new()
            .parse(&valid_segment(), Path::new("201301/130115x.mnd"))
            .unwrap();
        assert_eq!(parsed.augmented, Some('x'));
        assert_eq!(parsed.header.bin_count, 48);
    }

    #[test]
    fn test_short_header_segment() {
        let lines = segment(&["FORMAT-1", "2013-01-15 00:00:00 1"]);
        assert!(matches!(
            HeaderParser::new().parse(&lines, path()),
            Err(AuditError::SegmentTooShort {
                segment: "header",
                line: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_counts_line() {
        let mut lines = valid_segment();
        lines[3] = "2 4".to_string();
        assert!(matches!(
            HeaderParser::new().parse(&lines, path()),
            Err(AuditError::MalformedLine { field: "counts", .. })
        ));
    }
}
