use crate::models::{
    AnomalyReport, AugmentedFilename, ExceptionalFile, Grid, IncongruentGrid, InconsistentSample,
    InsufficientSegments, IrregularSegmentCount,
};
use crate::processors::file_validator::{is_congruent, FileOutcome};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Folds per-file outcomes, in path order, into the run's anomaly collections
#[derive(Debug, Default)]
pub struct AnomalyCollector {
    report: AnomalyReport,
}

impl AnomalyCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one file's outcome and return the rolling grid for the next file
    pub fn record(
        &mut self,
        previous: Option<Grid>,
        path: PathBuf,
        outcome: FileOutcome,
    ) -> Option<Grid> {
        info!("Examining {}", path.display());
        self.report.files_examined += 1;

        match outcome {
            FileOutcome::IrregularSegmentCount { segment_count } => {
                warn!(
                    "Irregular number of segments in {} = {}",
                    path.display(),
                    segment_count
                );
                self.report.irregular.push(IrregularSegmentCount {
                    path,
                    segment_count,
                });
                previous
            }
            FileOutcome::InsufficientSegments { segment_count } => {
                warn!("Insufficient segments in {}", path.display());
                self.report.insufficient.push(InsufficientSegments {
                    path,
                    segment_count,
                });
                previous
            }
            FileOutcome::Exceptional { detail } => {
                error!("Exceptional main data file {}: {}", path.display(), detail);
                self.report.exceptional.push(ExceptionalFile { path, detail });
                previous
            }
            FileOutcome::Validated(file) => {
                self.report.files_validated += 1;

                if let Some(extra) = file.augmented {
                    warn!("Augmented main data file {}", path.display());
                    self.report.augmented.push(AugmentedFilename {
                        path: path.clone(),
                        extra,
                    });
                }
                if let Some(sample_index) = file.inconsistent_sample {
                    warn!(
                        "Inconsistent segment at sample {} in {}",
                        sample_index,
                        path.display()
                    );
                    self.report.inconsistent.push(InconsistentSample {
                        path: path.clone(),
                        sample_index,
                    });
                }

                if !is_congruent(previous.as_ref(), &file.grid) {
                    match previous {
                        Some(ref prior) => warn!(
                            "Incongruent grid at {}: {:?} changed",
                            path.display(),
                            prior.differences(&file.grid)
                        ),
                        None => debug!("Initial grid from {}: {}", path.display(), file.grid),
                    }
                    self.report.incongruent.push(IncongruentGrid {
                        path,
                        grid: file.grid,
                    });
                }

                Some(file.grid)
            }
        }
    }

    /// Close the run, keeping the final rolling grid
    pub fn finish(mut self, rolling: Option<Grid>) -> AnomalyReport {
        self.report.final_grid = rolling;
        self.report
    }
}
