//! Renders well-formed FORMAT-1 main data files for tests and benchmarks.

use crate::utils::constants::{
    AZIMUTH_ANGLE_LABEL, FORMAT_TAG, HEIGHT_ABOVE_GROUND_LABEL, HEIGHT_ABOVE_SEA_LEVEL_LABEL,
    INSTRUMENT_TYPE, MAIN_DATA_DECLARATION, MAIN_DATA_EXTENSION,
};
use chrono::{Datelike, Duration, NaiveDateTime};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct MainDataBuilder {
    start: NaiveDateTime,
    interval: Duration,
    sample_count: usize,
    min_elevation: i64,
    bin_height: i64,
    bin_count: usize,
    format_tag: String,
    instrument_type: String,
    variables: Vec<(String, String)>,
}

impl MainDataBuilder {
    /// 48 ten-minute samples of 48 bins, 0..470 m, so 50 segments in total
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            start,
            interval: Duration::minutes(10),
            sample_count: 48,
            min_elevation: 0,
            bin_height: 10,
            bin_count: 48,
            format_tag: FORMAT_TAG.to_string(),
            instrument_type: INSTRUMENT_TYPE.to_string(),
            variables: vec![
                ("height".to_string(), "z".to_string()),
                ("wind speed".to_string(), "speed".to_string()),
                ("wind direction".to_string(), "dir".to_string()),
                ("vertical wind speed".to_string(), "W".to_string()),
            ],
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn with_bins(mut self, min_elevation: i64, bin_height: i64, bin_count: usize) -> Self {
        self.min_elevation = min_elevation;
        self.bin_height = bin_height;
        self.bin_count = bin_count;
        self
    }

    pub fn with_format_tag(mut self, format_tag: &str) -> Self {
        self.format_tag = format_tag.to_string();
        self
    }

    pub fn with_instrument_type(mut self, instrument_type: &str) -> Self {
        self.instrument_type = instrument_type.to_string();
        self
    }

    /// Location of this file inside a corpus, e.g. `201301/130115.mnd`
    pub fn relative_path(&self) -> PathBuf {
        self.location("")
    }

    /// Same location with an extra character inserted before the extension
    pub fn augmented_relative_path(&self, extra: char) -> PathBuf {
        self.location(&extra.to_string())
    }

    fn location(&self, extra: &str) -> PathBuf {
        let date = self.start.date();
        let directory = format!("{:04}{:02}", date.year(), date.month());
        let file = format!(
            "{:02}{:02}{:02}{}.{}",
            date.year() % 100,
            date.month(),
            date.day(),
            extra,
            MAIN_DATA_EXTENSION
        );
        PathBuf::from(directory).join(file)
    }

    pub fn build_segments(&self) -> Vec<Vec<String>> {
        let mut segments = vec![self.header_segment(), self.constants_segment()];
        segments.extend((0..self.sample_count).map(|index| self.sample_segment(index)));
        segments
    }

    pub fn build_lines(&self) -> Vec<String> {
        lines_from_segments(&self.build_segments())
    }

    pub fn render(&self) -> String {
        let mut text = self.build_lines().join("\n");
        text.push('\n');
        text
    }

    fn header_segment(&self) -> Vec<String> {
        vec![
            self.format_tag.clone(),
            format!("{} 1", self.start.format("%Y-%m-%d %H:%M:%S")),
            self.instrument_type.clone(),
            format!("2 {} {}", self.variables.len(), self.bin_count),
        ]
    }

    fn constants_segment(&self) -> Vec<String> {
        let mut lines = vec![
            "# file information".to_string(),
            format!("{}0", AZIMUTH_ANGLE_LABEL),
            format!("{}0", HEIGHT_ABOVE_GROUND_LABEL),
            format!("{}4", HEIGHT_ABOVE_SEA_LEVEL_LABEL),
            "# beginning of data block".to_string(),
            MAIN_DATA_DECLARATION.to_string(),
            "# variable definitions".to_string(),
        ];
        lines.extend(
            self.variables
                .iter()
                .map(|(label, name)| format!("{} # {} # - # G1 # 0 # 0 # 99999", label, name)),
        );
        lines.push("error code # error # - # N1 # 0 # 0 # 99999".to_string());
        lines
    }

    fn sample_segment(&self, index: usize) -> Vec<String> {
        let stamp = self.start + self.interval * index as i32;
        let seconds = self.interval.num_seconds();
        let mut lines = vec![
            format!(
                "{} {:02}:{:02}:{:02}",
                stamp.format("%Y-%m-%d %H:%M:%S"),
                seconds / 3600,
                seconds % 3600 / 60,
                seconds % 60
            ),
            format!(
                "# {} error",
                self.variables
                    .iter()
                    .map(|(_, name)| name.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            ),
        ];
        lines.extend((0..self.bin_count).map(|bin| {
            format!(
                "{} 4.2 180 0.1 0",
                self.min_elevation + self.bin_height * bin as i64
            )
        }));
        lines
    }
}

/// Join segments with a single blank line between each
pub fn lines_from_segments(segments: &[Vec<String>]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(segment.iter().cloned());
    }
    lines
}
