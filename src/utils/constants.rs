/// Literal tokens of the FORMAT-1 main data layout
pub const FORMAT_TAG: &str = "FORMAT-1";
pub const INSTRUMENT_TYPE: &str = "SFAS";
pub const MAIN_DATA_EXTENSION: &str = "mnd";
pub const MAIN_DATA_DECLARATION: &str = "Main Data";
pub const ERROR_CODE_PREFIX: &str = "error code #";
pub const COMMENT_PREFIX: &str = "#";
pub const VARIABLE_SEPARATOR: &str = " # ";

/// Variable names
pub const ELEVATION_VARIABLE: &str = "z";
pub const ERROR_VARIABLE: &str = "error";

/// Labeled site constants (whitespace-exact prefixes)
pub const AZIMUTH_ANGLE_LABEL: &str = "antenna azimuth angle [deg] : ";
pub const HEIGHT_ABOVE_GROUND_LABEL: &str = "height above ground [m]     : ";
pub const HEIGHT_ABOVE_SEA_LEVEL_LABEL: &str = "height above sea level [m]  : ";

/// Filename layout: YYMMDD, one extra character, then the extension
pub const EXTENSION_SEPARATOR: char = '.';
pub const FILENAME_EXTRA_POSITION: usize = 6;

/// Segment layout
pub const EXPECTED_SEGMENT_COUNT: usize = 50;
pub const MIN_SEGMENT_COUNT: usize = 3;
pub const FIRST_SAMPLE_SEGMENT: usize = 2;

/// Start year window (inclusive)
pub const EARLIEST_START_YEAR: i64 = 2009;
pub const LATEST_START_YEAR: i64 = 2013;

/// Clock component bounds (exclusive upper)
pub const HOUR_LIMIT: i64 = 25;
pub const MINUTE_LIMIT: i64 = 61;
pub const SECOND_LIMIT: i64 = 61;

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
pub const MAX_WORKERS: usize = 512;

/// Report categories
pub const CATEGORY_IRREGULAR: &str = "irregular";
pub const CATEGORY_INSUFFICIENT: &str = "insufficient";
pub const CATEGORY_INCONSISTENT: &str = "inconsistent";
pub const CATEGORY_AUGMENTED: &str = "augmented";
pub const CATEGORY_INCONGRUENT: &str = "incongruent";
pub const CATEGORY_EXCEPTIONAL: &str = "exceptional";
