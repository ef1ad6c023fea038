use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sodar-audit")]
#[command(about = "Audits SODAR main data files for structural and gridding anomalies")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Configuration file (TOML, YAML or JSON)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Audit every main data file under a corpus directory
    Audit {
        #[arg(short, long, help = "Corpus root containing monthly directories")]
        input_dir: PathBuf,

        #[arg(
            short,
            long,
            help = "JSON report path [default: output/sodar-audit-{YYMMDD}.json]"
        )]
        output_file: Option<PathBuf>,

        #[arg(long, help = "Also write anomaly rows as CSV")]
        csv_file: Option<PathBuf>,

        #[arg(long, help = "Worker threads [default: number of CPUs]")]
        max_workers: Option<usize>,

        #[arg(long, default_value = "false")]
        use_mmap: bool,
    },

    /// Validate a single main data file and print what was parsed
    Inspect {
        #[arg(short, long)]
        file: PathBuf,
    },
}
