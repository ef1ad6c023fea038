use crate::error::{AuditError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use std::ops::Range;
use std::str::FromStr;

/// Split a line on whitespace, requiring exactly `N` fields
pub fn split_fields<'a, const N: usize>(line: &'a str, field: &'static str) -> Result<[&'a str; N]> {
    split_exact(line.split_whitespace(), line, field)
}

/// Split a `YYYY-MM-DD` token into its textual parts
pub fn split_date<'a>(token: &'a str, field: &'static str) -> Result<[&'a str; 3]> {
    split_exact(token.split('-'), token, field)
}

/// Split an `HH:MM:SS` token into its textual parts
pub fn split_clock<'a>(token: &'a str, field: &'static str) -> Result<[&'a str; 3]> {
    split_exact(token.split(':'), token, field)
}

fn split_exact<'a, const N: usize>(
    parts: impl Iterator<Item = &'a str>,
    line: &str,
    field: &'static str,
) -> Result<[&'a str; N]> {
    let parts: Vec<&str> = parts.collect();
    parts.try_into().map_err(|_| AuditError::MalformedLine {
        field,
        line: line.to_string(),
        expected: N,
    })
}

pub fn parse_number<T: FromStr>(value: &str, field: &'static str) -> Result<T> {
    value.parse::<T>().map_err(|_| AuditError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Fail unless `value` lies in the half-open `range`
pub fn ensure_in_range(field: &'static str, value: i64, range: Range<i64>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(AuditError::OutOfRange { field, value })
    }
}

/// Numeric date and clock fields of a `date time` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeFields {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

impl DateTimeFields {
    pub fn parse(date: [&str; 3], clock: [&str; 3]) -> Result<Self> {
        Ok(Self {
            year: parse_number(date[0], "year")?,
            month: parse_number(date[1], "month")?,
            day: parse_number(date[2], "day")?,
            hour: parse_number(clock[0], "hour")?,
            minute: parse_number(clock[1], "minute")?,
            second: parse_number(clock[2], "second")?,
        })
    }

    /// Build a calendar timestamp; out-of-calendar values fail here
    pub fn to_timestamp(self) -> Result<NaiveDateTime> {
        let invalid = || AuditError::InvalidTimestamp {
            value: format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            ),
        };

        let year = i32::try_from(self.year).map_err(|_| invalid())?;
        let [month, day, hour, minute, second] =
            [self.month, self.day, self.hour, self.minute, self.second]
                .map(|v| u32::try_from(v).ok());

        match (month, day, hour, minute, second) {
            (Some(month), Some(day), Some(hour), Some(minute), Some(second)) => {
                NaiveDate::from_ymd_opt(year, month, day)
                    .and_then(|d| d.and_hms_opt(hour, minute, second))
                    .ok_or_else(invalid)
            }
            _ => Err(invalid()),
        }
    }
}
