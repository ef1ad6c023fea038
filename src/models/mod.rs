pub mod anomaly;
pub mod grid;
pub mod header;
pub mod site_constants;

pub use anomaly::{
    AnomalyReport, AnomalyRow, AugmentedFilename, ExceptionalFile, IncongruentGrid,
    InconsistentSample, InsufficientSegments, IrregularSegmentCount,
};
pub use grid::Grid;
pub use header::Header;
pub use site_constants::SiteConstants;
