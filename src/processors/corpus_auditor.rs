use crate::error::{AuditError, Result};
use crate::models::AnomalyReport;
use crate::processors::anomaly_collector::AnomalyCollector;
use crate::processors::file_validator::{FileOutcome, FileValidator};
use crate::readers::{CorpusScanner, MainDataReader};
use crate::utils::config::AuditConfig;
use crate::utils::progress::ProgressReporter;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Audits a whole corpus: files are analysed in parallel, then folded in path order
#[derive(Debug, Clone)]
pub struct CorpusAuditor {
    validator: FileValidator,
    reader: MainDataReader,
    scanner: CorpusScanner,
    max_workers: usize,
}

impl CorpusAuditor {
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            validator: FileValidator::from_config(config),
            reader: MainDataReader::with_mmap(config.use_mmap),
            scanner: CorpusScanner::new(),
            max_workers: config.max_workers,
        }
    }

    /// Discover and audit every main data file under `root`
    pub async fn audit_directory(
        &self,
        root: &Path,
        progress: Option<Arc<ProgressReporter>>,
    ) -> Result<AnomalyReport> {
        let paths = self.scanner.find_main_data_files(root)?;
        info!(
            "Found {} main data files under {}",
            paths.len(),
            root.display()
        );
        if paths.is_empty() {
            warn!("No main data files found under {}", root.display());
        }

        let auditor = self.clone();
        tokio::task::spawn_blocking(move || auditor.audit_files(&paths, progress.as_deref()))
            .await?
    }

    /// Audit an already ordered list of files
    pub fn audit_files(
        &self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<AnomalyReport> {
        if let Some(p) = progress {
            p.set_length(paths.len() as u64);
            p.set_message("Validating main data files...");
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()
            .map_err(|e| AuditError::Config(e.to_string()))?;

        // Collecting an indexed parallel iterator keeps path order
        let outcomes: Vec<FileOutcome> = pool.install(|| {
            paths
                .par_iter()
                .map(|path| {
                    let outcome = self.analyze_path(path);
                    if let Some(p) = progress {
                        p.increment(1);
                    }
                    outcome
                })
                .collect()
        });

        let report = fold_outcomes(paths.iter().cloned().zip(outcomes));

        if let Some(p) = progress {
            p.finish_with_message(&format!("Audited {} files", report.files_examined));
        }

        Ok(report)
    }

    /// Audit an ordered sequence of in-memory files, each given as its raw lines
    pub fn audit_sources<I, P, L, S>(&self, files: I) -> AnomalyReport
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<PathBuf>,
        L: AsRef<[S]>,
        S: AsRef<str>,
    {
        fold_outcomes(files.into_iter().map(|(path, lines)| {
            let path = path.into();
            let outcome = self.validator.analyze(&path, lines.as_ref());
            (path, outcome)
        }))
    }

    /// Read and classify one file; read failures are exceptional, not fatal
    pub fn analyze_path(&self, path: &Path) -> FileOutcome {
        match self.reader.read_lines(path) {
            Ok(lines) => self.validator.analyze(path, &lines),
            Err(e) => FileOutcome::Exceptional {
                detail: e.to_string(),
            },
        }
    }
}

impl Default for CorpusAuditor {
    fn default() -> Self {
        Self::new(&AuditConfig::default())
    }
}

fn fold_outcomes<I>(outcomes: I) -> AnomalyReport
where
    I: IntoIterator<Item = (PathBuf, FileOutcome)>,
{
    let mut collector = AnomalyCollector::new();
    let rolling = outcomes
        .into_iter()
        .fold(None, |rolling, (path, outcome)| {
            collector.record(rolling, path, outcome)
        });
    collector.finish(rolling)
}

/// Log the report section by section
pub fn log_report(report: &AnomalyReport) {
    info!("***Begin irregular segments report***");
    if report.irregular.is_empty() {
        info!("No irregular segments.");
    }
    for entry in &report.irregular {
        info!(
            "Irregular number of segments in {} = {}",
            entry.path.display(),
            entry.segment_count
        );
    }
    info!("***End irregular segments report***");

    info!("***Begin insufficient segments report***");
    if report.insufficient.is_empty() {
        info!("No insufficient segments.");
    }
    for entry in &report.insufficient {
        info!("Insufficient segments in {}", entry.path.display());
    }
    info!("***End insufficient segments report***");

    info!("***Begin inconsistent segments report***");
    if report.inconsistent.is_empty() {
        info!("No inconsistent segments.");
    }
    for entry in &report.inconsistent {
        info!(
            "Inconsistent segment at sample {} in {}",
            entry.sample_index,
            entry.path.display()
        );
    }
    info!("***End inconsistent segments report***");

    info!("***Begin augmented main data files report***");
    if report.augmented.is_empty() {
        info!("No augmented main data files.");
    }
    for entry in &report.augmented {
        info!("Augmented main data file in {}", entry.path.display());
    }
    info!("***End augmented main data files report***");

    info!("***Begin incongruent main data files report***");
    match report.incongruent.split_first() {
        Some((initial, changes)) => {
            info!("Initial gridding: {}", initial.grid);
            for entry in changes {
                info!("Incongruity occurred at {}: {}", entry.path.display(), entry.grid);
            }
        }
        None => info!("No incongruent main data files."),
    }
    info!("***End incongruent main data files report***");

    info!("***Begin exceptional main data files report***");
    if report.exceptional.is_empty() {
        info!("No exceptional main data files.");
    }
    for entry in &report.exceptional {
        info!(
            "Exceptional main data file {}: {}",
            entry.path.display(),
            entry.detail
        );
    }
    info!("***End exceptional main data files report***");
}
