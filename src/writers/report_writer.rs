use crate::error::Result;
use crate::models::AnomalyReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Persists an anomaly report as pretty JSON or as flat CSV rows
#[derive(Debug, Clone, Default)]
pub struct ReportWriter;

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_json(&self, report: &AnomalyReport, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(create_file(path)?);
        serde_json::to_writer_pretty(&mut writer, report)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!("Wrote JSON report to {}", path.display());
        Ok(())
    }

    /// One `category,path,detail` row per anomaly entry
    pub fn write_csv(&self, report: &AnomalyReport, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_writer(BufWriter::new(create_file(path)?));
        let rows = report.rows();
        for row in &rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        info!("Wrote {} CSV rows to {}", rows.len(), path.display());
        Ok(())
    }
}

fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(File::create(path)?)
}
