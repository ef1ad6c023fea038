pub mod anomaly_collector;
pub mod corpus_auditor;
pub mod file_validator;

pub use anomaly_collector::AnomalyCollector;
pub use corpus_auditor::{log_report, CorpusAuditor};
pub use file_validator::{is_congruent, FileOutcome, FileValidator, ValidatedFile};
