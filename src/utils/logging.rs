use crate::error::{AuditError, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber: stderr always, plus `log_file` when given
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let file_layer = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let file = File::create(path)?;
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(level)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .try_init()
        .map_err(|e| AuditError::Config(format!("Failed to initialise logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_receives_events() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs/audit.log");

        init_logging(false, Some(&path)).unwrap();
        tracing::info!("log file marker");
        tracing::debug!("hidden below info");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("log file marker"));
        assert!(!contents.contains("hidden below info"));

        // The global subscriber is already installed
        assert!(init_logging(false, None).is_err());
    }
}
