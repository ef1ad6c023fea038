use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::{log_report, CorpusAuditor, FileOutcome};
use crate::utils::config::AuditConfig;
use crate::utils::filename::generate_default_report_filename;
use crate::utils::logging::init_logging;
use crate::utils::progress::ProgressReporter;
use crate::writers::ReportWriter;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;
    let config = AuditConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Audit {
            input_dir,
            output_file,
            csv_file,
            max_workers,
            use_mmap,
        } => {
            let mut config = config;
            if let Some(workers) = max_workers {
                config = config.with_max_workers(workers);
            }
            if use_mmap {
                config = config.with_mmap(true);
            }
            config.validate()?;
            let output_file = output_file.unwrap_or_else(generate_default_report_filename);

            println!("Auditing SODAR main data...");
            println!("Input directory: {}", input_dir.display());
            println!("Output file: {}", output_file.display());
            println!("Workers: {}", config.max_workers);

            let progress = Arc::new(ProgressReporter::new(0, "Scanning corpus...", false));
            let auditor = CorpusAuditor::new(&config);
            let report = auditor
                .audit_directory(&input_dir, Some(Arc::clone(&progress)))
                .await?;

            log_report(&report);
            println!("\n{}", report.summary());

            let writer = ReportWriter::new();
            writer.write_json(&report, &output_file)?;
            if let Some(csv_file) = csv_file {
                writer.write_csv(&report, &csv_file)?;
            }

            if report.anomaly_count() == 0 {
                println!("No anomalies found");
            } else {
                println!("Found {} anomalies", report.anomaly_count());
            }
            info!("Audit complete");
        }

        Commands::Inspect { file } => {
            println!("Inspecting main data file: {}", file.display());

            let auditor = CorpusAuditor::new(&config);
            match auditor.analyze_path(&file) {
                FileOutcome::Validated(validated) => {
                    let header = &validated.header;
                    println!("\nHeader:");
                    println!("  Format: {}", header.format_tag);
                    println!("  Start: {}", header.start_timestamp);
                    println!("  Variables: {}", header.variable_count);
                    println!("  Bins: {}", header.bin_count);

                    let constants = &validated.constants;
                    println!("\nSite constants:");
                    println!("  Azimuth angle: {}", constants.azimuth_angle);
                    println!("  Elevation: {}", constants.elevation);
                    println!(
                        "  Height above sea level: {}",
                        constants.height_above_sea_level
                    );
                    println!("  Variables: {}", constants.variables.join(" "));

                    println!("\nGrid: {}", validated.grid);
                    if let Some(extra) = validated.augmented {
                        println!("Augmented file name (extra character '{}')", extra);
                    }
                    if let Some(index) = validated.inconsistent_sample {
                        println!("Grid drifts at sample {}", index);
                    }
                }
                FileOutcome::IrregularSegmentCount { segment_count } => {
                    println!(
                        "Irregular number of segments: {} (expected {})",
                        segment_count, config.expected_segment_count
                    );
                }
                FileOutcome::InsufficientSegments { segment_count } => {
                    println!("Insufficient segments: {}", segment_count);
                }
                FileOutcome::Exceptional { detail } => {
                    println!("Exceptional: {}", detail);
                }
            }
        }
    }

    Ok(())
}
