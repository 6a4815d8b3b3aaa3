//! CSV ingestion for the member-import pipeline: decoding, header
//! detection, and table structuring with auto column mapping.

pub mod csv_read;
pub mod structure;

pub use csv_read::{read_raw_table, read_raw_table_from_reader};
pub use structure::{TableStructure, detect_has_header, structure_table};
