use crate::models::Grid;
use crate::utils::constants::{
    CATEGORY_AUGMENTED, CATEGORY_EXCEPTIONAL, CATEGORY_INCONGRUENT, CATEGORY_INCONSISTENT,
    CATEGORY_INSUFFICIENT, CATEGORY_IRREGULAR,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IrregularSegmentCount {
    pub path: PathBuf,
    pub segment_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsufficientSegments {
    pub path: PathBuf,
    pub segment_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InconsistentSample {
    pub path: PathBuf,
    pub sample_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AugmentedFilename {
    pub path: PathBuf,
    pub extra: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncongruentGrid {
    pub path: PathBuf,
    pub grid: Grid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExceptionalFile {
    pub path: PathBuf,
    pub detail: String,
}

/// Flattened `category,path,detail` row for tabular export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnomalyRow {
    pub category: &'static str,
    pub path: String,
    pub detail: String,
}

/// Everything a run hands to reporting: six ordered collections plus the final rolling grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnomalyReport {
    pub files_examined: usize,
    pub files_validated: usize,
    pub irregular: Vec<IrregularSegmentCount>,
    pub insufficient: Vec<InsufficientSegments>,
    pub inconsistent: Vec<InconsistentSample>,
    pub augmented: Vec<AugmentedFilename>,
    pub incongruent: Vec<IncongruentGrid>,
    pub exceptional: Vec<ExceptionalFile>,
    pub final_grid: Option<Grid>,
}

impl AnomalyReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of anomaly entries, not counting the grid seeded by the first validated file
    pub fn anomaly_count(&self) -> usize {
        self.irregular.len()
            + self.insufficient.len()
            + self.inconsistent.len()
            + self.augmented.len()
            + self.incongruent.len().saturating_sub(1)
            + self.exceptional.len()
    }

    pub fn rows(&self) -> Vec<AnomalyRow> {
        let mut rows = Vec::new();

        for entry in &self.irregular {
            rows.push(row(
                CATEGORY_IRREGULAR,
                &entry.path,
                format!("{} segments", entry.segment_count),
            ));
        }
        for entry in &self.insufficient {
            rows.push(row(
                CATEGORY_INSUFFICIENT,
                &entry.path,
                format!("{} segments", entry.segment_count),
            ));
        }
        for entry in &self.inconsistent {
            rows.push(row(
                CATEGORY_INCONSISTENT,
                &entry.path,
                format!("sample {}", entry.sample_index),
            ));
        }
        for entry in &self.augmented {
            rows.push(row(
                CATEGORY_AUGMENTED,
                &entry.path,
                format!("extra character '{}'", entry.extra),
            ));
        }
        for entry in &self.incongruent {
            rows.push(row(CATEGORY_INCONGRUENT, &entry.path, entry.grid.to_string()));
        }
        for entry in &self.exceptional {
            rows.push(row(CATEGORY_EXCEPTIONAL, &entry.path, entry.detail.clone()));
        }

        rows
    }

    /// Human-readable sectioned summary
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== SODAR Main Data Audit Report ===\n");
        summary.push_str(&format!("Files Examined: {}\n", self.files_examined));
        summary.push_str(&format!("Files Validated: {}\n", self.files_validated));

        summary.push_str(&format!(
            "\nIrregular Segment Counts: {}\n",
            self.irregular.len()
        ));
        for entry in &self.irregular {
            summary.push_str(&format!(
                "  {} = {} segments\n",
                entry.path.display(),
                entry.segment_count
            ));
        }

        summary.push_str(&format!(
            "\nInsufficient Segments: {}\n",
            self.insufficient.len()
        ));
        for entry in &self.insufficient {
            summary.push_str(&format!("  {}\n", entry.path.display()));
        }

        summary.push_str(&format!(
            "\nInconsistent Samples: {}\n",
            self.inconsistent.len()
        ));
        for entry in &self.inconsistent {
            summary.push_str(&format!(
                "  sample {} in {}\n",
                entry.sample_index,
                entry.path.display()
            ));
        }

        summary.push_str(&format!(
            "\nAugmented Filenames: {}\n",
            self.augmented.len()
        ));
        for entry in &self.augmented {
            summary.push_str(&format!("  {}\n", entry.path.display()));
        }

        summary.push_str("\nGridding:\n");
        match self.incongruent.split_first() {
            Some((initial, changes)) => {
                summary.push_str(&format!(
                    "  Initial ({}): {}\n",
                    initial.path.display(),
                    initial.grid
                ));
                for entry in changes {
                    summary.push_str(&format!(
                        "  Incongruity at {}: {}\n",
                        entry.path.display(),
                        entry.grid
                    ));
                }
            }
            None => summary.push_str("  No validated files\n"),
        }

        summary.push_str(&format!(
            "\nExceptional Files: {}\n",
            self.exceptional.len()
        ));
        for entry in &self.exceptional {
            summary.push_str(&format!(
                "  {}: {}\n",
                entry.path.display(),
                entry.detail
            ));
        }

        summary
    }
}

fn row(category: &'static str, path: &std::path::Path, detail: String) -> AnomalyRow {
    AnomalyRow {
        category,
        path: path.display().to_string(),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn grid(bin_height: i64) -> Grid {
        Grid {
            sample_interval: Duration::minutes(10),
            min_elevation: 0,
            max_elevation: 47 * bin_height,
            bin_height,
            bin_count: 48,
        }
    }

    fn report() -> AnomalyReport {
        AnomalyReport {
            files_examined: 5,
            files_validated: 3,
            irregular: vec![IrregularSegmentCount {
                path: PathBuf::from("201301/130102.mnd"),
                segment_count: 49,
            }],
            inconsistent: vec![InconsistentSample {
                path: PathBuf::from("201301/130103.mnd"),
                sample_index: 7,
            }],
            incongruent: vec![
                IncongruentGrid {
                    path: PathBuf::from("201301/130101.mnd"),
                    grid: grid(10),
                },
                IncongruentGrid {
                    path: PathBuf::from("201301/130104.mnd"),
                    grid: grid(20),
                },
            ],
            exceptional: vec![ExceptionalFile {
                path: PathBuf::from("201301/130105.mnd"),
                detail: "File format FORMAT-0 is incorrect".to_string(),
            }],
            final_grid: Some(grid(20)),
            ..AnomalyReport::default()
        }
    }

    #[test]
    fn test_anomaly_count_excludes_seed_grid() {
        assert_eq!(report().anomaly_count(), 4);
        assert_eq!(AnomalyReport::new().anomaly_count(), 0);
    }

    #[test]
    fn test_rows_follow_category_order() {
        let rows = report().rows();
        let categories: Vec<&str> = rows.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![
                "irregular",
                "inconsistent",
                "incongruent",
                "incongruent",
                "exceptional"
            ]
        );
        assert_eq!(rows[0].detail, "49 segments");
        assert_eq!(rows[1].detail, "sample 7");
    }

    #[test]
    fn test_summary_sections() {
        let summary = report().summary();
        assert!(summary.contains("Files Examined: 5"));
        assert!(summary.contains("Irregular Segment Counts: 1"));
        assert!(summary.contains("sample 7 in 201301/130103.mnd"));
        assert!(summary.contains("Initial (201301/130101.mnd)"));
        assert!(summary.contains("Incongruity at 201301/130104.mnd"));
        assert!(summary.contains("FORMAT-0"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = AnomalyReport::new().summary();
        assert!(summary.contains("No validated files"));
        assert!(summary.contains("Exceptional Files: 0"));
    }
}
