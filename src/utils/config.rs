use crate::error::{AuditError, Result};
use crate::utils::constants::{
    EARLIEST_START_YEAR, EXPECTED_SEGMENT_COUNT, LATEST_START_YEAR, MAX_WORKERS,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::{Validate, ValidationError};

/// Environment variable prefix, e.g. `SODAR_AUDIT_MAX_WORKERS=4`
pub const ENV_PREFIX: &str = "SODAR_AUDIT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_year_window"))]
pub struct AuditConfig {
    #[validate(range(min = 1))]
    pub expected_segment_count: usize,

    #[validate(range(min = 1900, max = 2100))]
    pub earliest_year: i64,

    #[validate(range(min = 1900, max = 2100))]
    pub latest_year: i64,

    #[validate(range(min = 1, max = 512))]
    pub max_workers: usize,

    pub use_mmap: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            expected_segment_count: EXPECTED_SEGMENT_COUNT,
            earliest_year: EARLIEST_START_YEAR,
            latest_year: LATEST_START_YEAR,
            max_workers: num_cpus::get().clamp(1, MAX_WORKERS),
            use_mmap: false,
        }
    }
}

impl AuditConfig {
    /// Layer defaults, an optional config file and `SODAR_AUDIT_*` variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default(
                "expected_segment_count",
                defaults.expected_segment_count as i64,
            )
            .and_then(|b| b.set_default("earliest_year", defaults.earliest_year))
            .and_then(|b| b.set_default("latest_year", defaults.latest_year))
            .and_then(|b| b.set_default("max_workers", defaults.max_workers as i64))
            .and_then(|b| b.set_default("use_mmap", defaults.use_mmap))
            .map_err(|e| AuditError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let loaded: Self = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| AuditError::Config(e.to_string()))?;

        loaded.validate()?;
        Ok(loaded)
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }
}

fn validate_year_window(config: &AuditConfig) -> std::result::Result<(), ValidationError> {
    if config.earliest_year > config.latest_year {
        return Err(ValidationError::new("year_window"));
    }
    Ok(())
}
