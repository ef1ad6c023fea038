pub mod constants_parser;
pub mod corpus_scanner;
pub mod cursor;
pub mod fields;
pub mod header_parser;
pub mod main_data_reader;
pub mod sample_parser;
pub mod segmenter;

pub use constants_parser::ConstantsParser;
pub use corpus_scanner::CorpusScanner;
pub use cursor::SegmentCursor;
pub use header_parser::{HeaderParser, ParsedHeader};
pub use main_data_reader::MainDataReader;
pub use sample_parser::{SampleParser, SampleSummary};
pub use segmenter::{segment_lines, Segment};
