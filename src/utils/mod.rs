pub mod config;
pub mod constants;
pub mod filename;
pub mod logging;
pub mod progress;
pub mod sample_file;

pub use config::AuditConfig;
pub use constants::*;
pub use filename::{generate_default_report_filename, MainDataPath};
pub use logging::init_logging;
pub use progress::ProgressReporter;
pub use sample_file::MainDataBuilder;
